use std::fmt;
use std::fmt::Write as _;

use crate::engine::input::{self, InputMode};
use crate::engine::piece::Piece;
use crate::error::GridError;

/// A zero-based (row, col) coordinate on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Location { row, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A grid slot: either empty or holding exactly one piece. The cell owns
/// the piece; moving a piece transfers it to the destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// One-character display symbol; a space for an empty cell.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(piece) => piece.symbol(),
        }
    }
}

/// The rectangular cell store underlying any board. Dimensions are fixed at
/// construction and every access is bounds-checked: an out-of-range location
/// is a [`GridError::OutOfBounds`], never a silent truncation and never a
/// panic.
///
/// `Grid` is plain data with no internal synchronization; concurrent
/// mutation from multiple threads requires external locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with all cells empty.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, location: Location) -> bool {
        location.row < self.rows && location.col < self.cols
    }

    fn index(&self, location: Location) -> Result<usize, GridError> {
        if self.contains(location) {
            Ok(location.row * self.cols + location.col)
        } else {
            Err(GridError::OutOfBounds {
                location,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, location: Location) -> Result<&Cell, GridError> {
        let idx = self.index(location)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, location: Location) -> Result<&mut Cell, GridError> {
        let idx = self.index(location)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, location: Location, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(location)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Relocate whatever occupies `from` to `to`, leaving `filler` behind,
    /// and return the previous occupant of `to` (the capture victim, possibly
    /// empty). Unconditional: legality is the caller's responsibility.
    pub fn move_piece(
        &mut self,
        from: Location,
        to: Location,
        filler: Cell,
    ) -> Result<Cell, GridError> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;
        let mover = std::mem::replace(&mut self.cells[from_idx], filler);
        Ok(std::mem::replace(&mut self.cells[to_idx], mover))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Format/range pre-check for raw player input, matching what the
    /// parsing functions accept and additionally requiring in-range values.
    pub fn is_well_formed_input(&self, input: &str, mode: InputMode) -> bool {
        input::is_well_formed(input, mode, self.rows, self.cols)
    }

    /// Deterministic visual rendering: each cell as `[x]`, rows separated by
    /// newlines, with optional row-index prefixes and a trailing column-index
    /// line. This format is a compatibility surface; see the display tests.
    pub fn render(&self, show_rows: bool, show_cols: bool) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            if show_rows {
                let _ = write!(out, "{row} ");
            }
            for col in 0..self.cols {
                let _ = write!(out, "[{}]", self.cells[row * self.cols + col].symbol());
            }
            out.push('\n');
        }
        if show_cols {
            if show_rows {
                out.push_str("  ");
            }
            for col in 0..self.cols {
                let _ = write!(out, " {col} ");
            }
            out.push('\n');
        }
        out
    }
}
