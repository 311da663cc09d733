//! Exhaustive game-tree search.
//!
//! Plain minimax over the full tree: no pruning, no depth discounting. A win
//! found nine plies deep scores the same as an immediate one, so the engine
//! has no preference for faster wins. Root moves are scanned in row-major
//! order and only a strictly better score replaces the current best, which
//! makes the choice deterministic (the empty board always yields `(0, 0)`).
//!
//! The search works on a single mutable board with backtracking: each
//! hypothetical move is placed, searched, and cleared again before the next
//! sibling is tried, so the board leaves [`minimax`] exactly as it entered.

use derive_more::{Display, Error};
use tracing::{debug, info};

use crate::board::{Board, Mark, Point};
use crate::constants::{SCORE_COMPUTER_WIN, SCORE_DRAW, SCORE_PLAYER_WIN};

/// State of the game as read off the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    ComputerWin,
    PlayerWin,
    Draw,
    Ongoing,
}

impl Outcome {
    /// Minimax value of a terminal outcome, `None` while the game goes on.
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::ComputerWin => Some(SCORE_COMPUTER_WIN),
            Outcome::PlayerWin => Some(SCORE_PLAYER_WIN),
            Outcome::Draw => Some(SCORE_DRAW),
            Outcome::Ongoing => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// Every cell is taken.
    #[display("no legal move: the board is full")]
    NoLegalMove,
    /// The position is already decided.
    #[display("no move to search: game already ended ({outcome})")]
    GameOver { outcome: Outcome },
}

/// Classify a board. A computer line is checked before a player line; both
/// at once cannot arise from alternating play.
pub fn outcome(board: &Board) -> Outcome {
    if board.is_win(Mark::Computer) {
        Outcome::ComputerWin
    } else if board.is_win(Mark::Player) {
        Outcome::PlayerWin
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// `+1` computer win, `-1` player win, `0` draw, `None` if not terminal.
pub fn evaluate(board: &Board) -> Option<i32> {
    outcome(board).score()
}

/// Place `mark` at `pt`, run `f`, then take the mark back.
fn with_move<T>(
    board: &mut Board,
    pt: Point,
    mark: Mark,
    f: impl FnOnce(&mut Board) -> T,
) -> T {
    board.set(pt, Some(mark));
    let result = f(board);
    board.set(pt, None);
    result
}

/// Game-theoretic value of `board` with the computer maximizing.
///
/// `maximizing` is true when the computer is the side to move. The board is
/// restored before returning.
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    if let Some(score) = evaluate(board) {
        return score;
    }

    let mark = if maximizing { Mark::Computer } else { Mark::Player };
    let moves: Vec<Point> = board.empty_cells().collect();
    let scores = moves
        .into_iter()
        .map(|pt| with_move(board, pt, mark, |b| minimax(b, !maximizing)));

    let best = if maximizing { scores.max() } else { scores.min() };
    // Non-terminal implies at least one empty cell
    best.unwrap_or(SCORE_DRAW)
}

/// Root scores for every computer move, in row-major order.
///
/// Each score is the minimax value after the computer plays that cell, with
/// the player to move next.
pub fn score_moves(board: &Board) -> Vec<(Point, i32)> {
    let mut scratch = *board;
    let moves: Vec<Point> = scratch.empty_cells().collect();
    moves
        .into_iter()
        .map(|pt| {
            let score = with_move(&mut scratch, pt, Mark::Computer, |b| minimax(b, false));
            debug!(row = pt.0, col = pt.1, score, "scored root move");
            (pt, score)
        })
        .collect()
}

/// The computer's move: the first cell in row-major order with the highest
/// minimax score.
///
/// Calling this on a full or already decided board is a caller error.
pub fn best_move(board: &Board) -> Result<Point, SearchError> {
    if board.is_full() {
        return Err(SearchError::NoLegalMove);
    }
    let current = outcome(board);
    if current.is_terminal() {
        return Err(SearchError::GameOver { outcome: current });
    }

    let mut best: Option<(Point, i32)> = None;
    for (pt, score) in score_moves(board) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pt, score)),
        }
    }

    let (pt, score) = best.ok_or(SearchError::NoLegalMove)?;
    info!(row = pt.0, col = pt.1, score, "computer move selected");
    Ok(pt)
}
