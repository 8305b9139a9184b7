//! Board geometry: coordinates and ship placement resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Parse a client-supplied orientation. Accepts the full words and the
    /// `h`/`v` short forms, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Some(Orientation::Horizontal),
            "vertical" | "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// A single board cell, written as a row letter `a`-`j` followed by a column
/// numeral `1`-`10` (`a1`, `c7`, `j10`). Both parts are stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

/// Why a coordinate failed to parse. Row and column are checked
/// independently so callers can report which half was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    Empty,
    BadRow(char),
    BadColumn(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "coordinate is empty"),
            CoordError::BadRow(c) => write!(f, "row letter {:?} is not in a-j", c),
            CoordError::BadColumn(s) => write!(f, "column {:?} is not in 1-10", s),
        }
    }
}

impl Coord {
    /// Build a coordinate from zero-based row/column, refusing anything off
    /// the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Coord { row, col })
    }

    /// Parse a cell like `a1` or `J10`. Case-insensitive on input; rendering
    /// is always lowercase.
    pub fn parse(raw: &str) -> Result<Self, CoordError> {
        let mut chars = raw.trim().chars();
        let letter = chars.next().ok_or(CoordError::Empty)?;
        let row = match letter.to_ascii_lowercase() {
            l @ 'a'..='j' => l as u8 - b'a',
            other => return Err(CoordError::BadRow(other)),
        };
        let rest = chars.as_str();
        let col: u8 = rest
            .parse()
            .map_err(|_| CoordError::BadColumn(rest.to_string()))?;
        if !(1..=BOARD_SIZE).contains(&col) {
            return Err(CoordError::BadColumn(rest.to_string()));
        }
        Ok(Coord { row, col: col - 1 })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row-major index into a 100-cell mask.
    pub(crate) fn index(&self) -> u32 {
        self.row as u32 * BOARD_SIZE as u32 + self.col as u32
    }

    pub(crate) fn from_index(i: u32) -> Self {
        Coord {
            row: (i / BOARD_SIZE as u32) as u8,
            col: (i % BOARD_SIZE as u32) as u8,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.row) as char, self.col + 1)
    }
}

/// Errors from placement resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds => write!(f, "placement runs off the board"),
        }
    }
}

/// Resolve the ordered run of cells a ship occupies, starting at `origin`.
/// Horizontal placement advances the column numeral, vertical placement the
/// row letter. Fails if any cell falls outside the grid.
pub fn resolve_cells(
    origin: Coord,
    length: usize,
    orientation: Orientation,
) -> Result<Vec<Coord>, GridError> {
    let mut cells = Vec::with_capacity(length);
    for i in 0..length as u8 {
        let (row, col) = match orientation {
            Orientation::Horizontal => (origin.row(), origin.col() + i),
            Orientation::Vertical => (origin.row() + i, origin.col()),
        };
        cells.push(Coord::new(row, col).ok_or(GridError::OutOfBounds)?);
    }
    Ok(cells)
}
