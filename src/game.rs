//! Turn-by-turn game state.
//!
//! [`Game`] owns the one board of a match, tracks whose turn it is, and
//! recomputes the [`Outcome`] after every move. Both the console loop and
//! self-play drive games through it.

use derive_more::{Display, Error};
use tracing::info;

use crate::board::{Board, Mark, MoveError, Point};
use crate::minimax::{Outcome, SearchError, best_move, outcome};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("{_0}")]
    Move(MoveError),
    #[display("{_0}")]
    Search(SearchError),
    #[display("it is not {mark:?}'s turn")]
    NotYourTurn { mark: Mark },
    #[display("game is already over ({outcome})")]
    GameOver { outcome: Outcome },
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

impl From<SearchError> for GameError {
    fn from(err: SearchError) -> Self {
        GameError::Search(err)
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::Player)
    }
}

impl Game {
    /// Start an empty board with `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: Outcome::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    fn check_turn(&self, mark: Mark) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver {
                outcome: self.outcome,
            });
        }
        if mark != self.to_move {
            return Err(GameError::NotYourTurn { mark });
        }
        Ok(())
    }

    fn play(&mut self, mark: Mark, (row, col): Point) -> Result<Outcome, GameError> {
        self.check_turn(mark)?;
        self.board.place(row, col, mark)?;
        self.to_move = mark.opponent();
        self.outcome = outcome(&self.board);
        if self.is_over() {
            info!(outcome = %self.outcome, "game finished");
        }
        Ok(self.outcome)
    }

    /// Apply the human's move at 0-based `(row, col)`.
    ///
    /// An off-board or taken cell returns [`GameError::Move`] and leaves the
    /// game unchanged, so the caller can simply ask again.
    pub fn play_human(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        self.play(Mark::Player, (row, col))
    }

    /// Search for the computer's move and apply it.
    pub fn play_computer(&mut self) -> Result<(Point, Outcome), GameError> {
        self.check_turn(Mark::Computer)?;
        let pt = best_move(&self.board)?;
        let result = self.play(Mark::Computer, pt)?;
        Ok((pt, result))
    }
}
