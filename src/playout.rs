//! Random playouts against the search engine.
//!
//! A random opponent picks uniformly among the empty cells. Self-play pits it
//! against [`crate::minimax::best_move`] for a number of games, alternating who
//! opens, and tallies the results. The engine must never lose.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Mark, Point};
use crate::game::{Game, GameError};
use crate::minimax::{Outcome, SearchError};

/// Pick a uniformly random empty cell, or `None` on a full board.
pub fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Point> {
    let moves: Vec<Point> = board.empty_cells().collect();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Results of a self-play match, counted from the engine's side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub computer_wins: usize,
    pub player_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    pub fn games(&self) -> usize {
        self.computer_wins + self.player_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

impl fmt::Display for MatchTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: computer {} / player {} / draw {}",
            self.games(),
            self.computer_wins,
            self.player_wins,
            self.draws
        )
    }
}

/// Play one game of the engine against the random opponent.
pub fn playout(first: Mark, rng: &mut fastrand::Rng) -> Result<Outcome, GameError> {
    let mut game = Game::new(first);
    while !game.is_over() {
        match game.to_move() {
            Mark::Player => {
                let (row, col) =
                    random_move(game.board(), rng).ok_or(SearchError::NoLegalMove)?;
                game.play_human(row, col)?;
            }
            Mark::Computer => {
                game.play_computer()?;
            }
        }
    }
    Ok(game.outcome())
}

/// Play `games` games with a seeded opponent. Even-numbered games open with
/// the random player, odd-numbered ones with the engine.
pub fn self_play(games: usize, seed: u64) -> Result<MatchTally, GameError> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut tally = MatchTally::default();

    for i in 0..games {
        let first = if i % 2 == 0 {
            Mark::Player
        } else {
            Mark::Computer
        };
        let result = playout(first, &mut rng)?;
        debug!(game = i, ?first, outcome = %result, "playout finished");
        tally.record(result);
    }

    info!(%tally, "self-play finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_move_is_empty_cell() {
        let mut rng = fastrand::Rng::with_seed(7);
        let board = Board::from_rows(["XO ", "OX ", "XOX"]).unwrap();
        for _ in 0..20 {
            let pt = random_move(&board, &mut rng).unwrap();
            assert!(pt == (0, 2) || pt == (1, 2), "unexpected {pt:?}");
        }
    }

    #[test]
    fn test_random_move_full_board() {
        let mut rng = fastrand::Rng::with_seed(7);
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_self_play_engine_never_loses() {
        let tally = self_play(20, 42).unwrap();
        assert_eq!(tally.games(), 20);
        assert_eq!(tally.player_wins, 0);
    }

    #[test]
    fn test_self_play_is_reproducible() {
        assert_eq!(self_play(6, 3).unwrap(), self_play(6, 3).unwrap());
    }
}
