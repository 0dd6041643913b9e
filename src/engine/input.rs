//! Parsing and pre-validation of raw location input.
//!
//! The well-formedness check accepts exactly what parsing accepts, further
//! restricted to values inside the grid. Range validation is numeric: an
//! input like `"12, 0"` is rejected on a 9-row board even though its first
//! character is a valid digit.

use std::str::FromStr;

use crate::engine::grid::Location;
use crate::error::LocationParseError;

/// How much of a coordinate a game expects the player to type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A full `"<row>, <col>"` coordinate.
    Full,
    /// A single row index.
    RowOnly,
    /// A single column index (connect-four style drops).
    ColOnly,
}

impl FromStr for Location {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row_part, col_part) = s.split_once(',').ok_or(LocationParseError::MissingComma)?;
        if col_part.contains(',') {
            return Err(LocationParseError::ExtraField);
        }
        Ok(Location {
            row: parse_index(row_part)?,
            col: parse_index(col_part)?,
        })
    }
}

fn parse_index(s: &str) -> Result<usize, LocationParseError> {
    let s = s.trim();
    s.parse::<usize>()
        .map_err(|_| LocationParseError::NotANumber(s.to_string()))
}

/// Whether `input` parses under `mode` and lands inside a `rows` x `cols`
/// grid. Agrees with [`Location::from_str`] on the `Full` acceptance set.
pub fn is_well_formed(input: &str, mode: InputMode, rows: usize, cols: usize) -> bool {
    match mode {
        InputMode::Full => input
            .parse::<Location>()
            .is_ok_and(|loc| loc.row < rows && loc.col < cols),
        InputMode::RowOnly => parse_index(input).is_ok_and(|row| row < rows),
        InputMode::ColOnly => parse_index(input).is_ok_and(|col| col < cols),
    }
}
