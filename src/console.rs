//! Interactive text console.
//!
//! The human enters moves as `row column`, both numbered 1-3, and the engine
//! answers with its own move after each one. The loop reads from any
//! [`BufRead`] and writes to any [`Write`], so it runs the same against the
//! terminal or an in-memory script.
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe_rust::board::Mark;
//! use tictactoe_rust::console::ConsoleGame;
//! let mut console = ConsoleGame::new(Mark::Player);
//! console.run(std::io::stdin().lock(), std::io::stdout().lock())?;
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::board::{Mark, MoveError, Point};
use crate::game::{Game, GameError};
use crate::minimax::Outcome;

const BANNER: &str = "=== TIC-TAC-TOE ===\n\
You will play with X, the computer will play with O.\n\
Please enter row and column as: row column (numbered 1-3).\n\
Example for the top-left corner: 1 1\n";

const PROMPT: &str = "Your move (row column): ";
const MSG_TAKEN: &str = "That position is already taken! Please try again.";
const MSG_OUT_OF_RANGE: &str = "Invalid index, please enter values between 1 and 3.";
const MSG_MALFORMED: &str = "Please enter two numbers: row column.";
const MSG_THINKING: &str = "Computer is thinking...";

/// Console session state.
pub struct ConsoleGame {
    game: Game,
}

impl Default for ConsoleGame {
    fn default() -> Self {
        Self::new(Mark::Player)
    }
}

impl ConsoleGame {
    /// Create a session where `first` opens the game.
    pub fn new(first: Mark) -> Self {
        Self {
            game: Game::new(first),
        }
    }

    /// Play one game to the end.
    ///
    /// Returns the final outcome, or `None` if input ran out first.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> Result<Option<Outcome>> {
        writeln!(out, "{BANNER}")?;

        loop {
            match self.game.to_move() {
                Mark::Player => {
                    self.print_board(&mut out)?;
                    if !self.read_human_move(&mut input, &mut out)? {
                        writeln!(out)?;
                        return Ok(None);
                    }
                }
                Mark::Computer => {
                    writeln!(out, "{MSG_THINKING}")?;
                    let (pt, _) = self
                        .game
                        .play_computer()
                        .context("computer could not move")?;
                    debug!(row = pt.0, col = pt.1, "computer played");
                }
            }

            if self.game.is_over() {
                self.print_board(&mut out)?;
                writeln!(out, "{}", result_message(self.game.outcome()))?;
                out.flush()?;
                return Ok(Some(self.game.outcome()));
            }
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Current board:\n{}", self.game.board())?;
        Ok(())
    }

    /// Prompt until a legal move is entered. Returns false on end of input.
    fn read_human_move<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool> {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line).context("failed to read move")? == 0 {
                return Ok(false);
            }

            let Some((row, col)) = parse_move(&line) else {
                writeln!(out, "{MSG_MALFORMED}")?;
                continue;
            };

            match self.game.play_human(row, col) {
                Ok(_) => return Ok(true),
                Err(GameError::Move(MoveError::Occupied { .. })) => {
                    writeln!(out, "{MSG_TAKEN}")?
                }
                Err(GameError::Move(MoveError::OutOfBounds { .. })) => {
                    writeln!(out, "{MSG_OUT_OF_RANGE}")?
                }
                Err(err) => return Err(err).context("human move rejected"),
            }
        }
    }
}

/// Parse `row column` (1-based) into a 0-based point.
///
/// Numbers below 1 map to an off-board index so the board rejects them the
/// same way as numbers above 3. Anything after the second number is ignored.
fn parse_move(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace().map(str::parse::<i64>);
    let (Some(Ok(row)), Some(Ok(col))) = (parts.next(), parts.next()) else {
        return None;
    };
    Some((to_index(row), to_index(col)))
}

fn to_index(n: i64) -> usize {
    n.checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(usize::MAX)
}

fn result_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "Congratulations! You have won!",
        Outcome::ComputerWin => "The computer has won!",
        Outcome::Draw => "It's a draw!",
        Outcome::Ongoing => "",
    }
}
