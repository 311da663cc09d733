//! The 3x3 board and its pure queries.
//!
//! A cell is either empty or holds one player's [`Mark`]. The board is a
//! plain value: the search places and clears marks in place, and the turn loop
//! owns the single instance for the whole game.

use std::fmt;

use derive_more::{Display, Error};

use crate::constants::{COMPUTER_GLYPH, EMPTY_GLYPH, LINES, N, PLAYER_GLYPH};

/// The symbol a side puts on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The human, `X`.
    Player,
    /// The engine, `O`.
    Computer,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Mark::Player => PLAYER_GLYPH,
            Mark::Computer => COMPUTER_GLYPH,
        }
    }
}

/// Contents of a single cell. `None` is empty.
pub type Cell = Option<Mark>;

/// A `(row, col)` coordinate, both in `0..N`.
pub type Point = (usize, usize);

/// Why a board mutation was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("invalid index ({row}, {col}): row and column must be in 0..3")]
    OutOfBounds { row: usize, col: usize },
    #[display("cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },
    #[display("invalid cell character {glyph:?}")]
    InvalidCell { glyph: char },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from three rows of text.
    ///
    /// `X` is the player, `O` the computer, and a space or `.` is empty.
    /// Rows shorter than `N` are padded with empty cells.
    pub fn from_rows(rows: [&str; N]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, glyph) in line.chars().enumerate() {
                if c >= N {
                    return Err(MoveError::OutOfBounds { row: r, col: c });
                }
                board.cells[r][c] = match glyph {
                    PLAYER_GLYPH => Some(Mark::Player),
                    COMPUTER_GLYPH => Some(Mark::Computer),
                    EMPTY_GLYPH | '.' => None,
                    other => return Err(MoveError::InvalidCell { glyph: other }),
                };
            }
        }
        Ok(board)
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), MoveError> {
        if row >= N || col >= N {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(())
    }

    /// Cell contents, or `None` if the coordinate is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= N || col >= N {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Put `mark` on an empty cell.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        Self::check_bounds(row, col)?;
        if self.cells[row][col].is_some() {
            return Err(MoveError::Occupied { row, col });
        }
        self.cells[row][col] = Some(mark);
        Ok(())
    }

    /// Reset a cell to empty. Used to take back a hypothetical move.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = None;
        Ok(())
    }

    /// True iff some row, column, or diagonal is entirely `mark`.
    pub fn is_win(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.cells[r][c] == Some(mark)))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Empty cells in row-major order (top to bottom, left to right).
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..N)
            .flat_map(|r| (0..N).map(move |c| (r, c)))
            .filter(|&(r, c)| self.cells[r][c].is_none())
    }

    /// Unchecked write for search; `pt` must come from [`Board::empty_cells`].
    pub(crate) fn set(&mut self, (row, col): Point, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(mark))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let ch = cell.map_or(EMPTY_GLYPH, Mark::glyph);
                write!(f, " {ch}")?;
                if c + 1 < N {
                    write!(f, " |")?;
                }
            }
            writeln!(f)?;
            if r + 1 < N {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
