//! Tictactoe-Rust: a Tic-Tac-Toe engine that never loses.
//!
//! The computer picks its moves with an exhaustive minimax search over the
//! full game tree. The human plays `X`, the computer plays `O`.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, scores
//! - [`board`] - The 3x3 grid and its queries (win, full, empty cells)
//! - [`minimax`] - Outcome evaluation and game-tree search
//! - [`game`] - Turn order and outcome tracking for one match
//! - [`playout`] - Random opponent and self-play matches
//! - [`console`] - Interactive text loop
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::board::{Board, Mark};
//! use tictactoe_rust::minimax::best_move;
//!
//! let mut board = Board::new();
//! board.place(0, 0, Mark::Computer).unwrap();
//! board.place(1, 1, Mark::Player).unwrap();
//! board.place(0, 1, Mark::Computer).unwrap();
//! board.place(2, 2, Mark::Player).unwrap();
//!
//! // Complete the top row
//! assert_eq!(best_move(&board), Ok((0, 2)));
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod minimax;
pub mod playout;
