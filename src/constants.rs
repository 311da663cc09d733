//! Constants for board geometry, marks, scores, and self-play defaults.
//!
//! The board is a fixed 3x3 grid addressed by `(row, col)` with both
//! coordinates in `0..N`. Cells are enumerated in row-major order everywhere,
//! and that order decides tie-breaks during search.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Total number of cells.
pub const CELLS: usize = N * N;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Human player's mark.
pub const PLAYER_GLYPH: char = 'X';

/// Computer's mark.
pub const COMPUTER_GLYPH: char = 'O';

/// Empty cell.
pub const EMPTY_GLYPH: char = ' ';

// =============================================================================
// Outcome Scores (from the computer's point of view)
// =============================================================================

pub const SCORE_COMPUTER_WIN: i32 = 1;
pub const SCORE_PLAYER_WIN: i32 = -1;
pub const SCORE_DRAW: i32 = 0;

// =============================================================================
// Self-play Defaults
// =============================================================================

/// Default number of games for `selfplay`.
pub const SELFPLAY_GAMES: usize = 100;

/// Default RNG seed for `selfplay`.
pub const SELFPLAY_SEED: u64 = 1;
