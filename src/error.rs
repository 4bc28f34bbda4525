//! Error types for board construction and board file parsing.
//!
//! Only malformed input is an error here. A word that cannot be traced on a
//! board is an ordinary `false` from the search, never an `Err`.

use std::io;

use thiserror::Error;

/// Raised when a grid cannot form a rectangular, non-empty board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The grid has no rows at all.
    #[error("board must have at least one row")]
    NoRows,

    /// A row has zero cells.
    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    /// A row's length differs from the first row's.
    #[error("board must be rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Random generation was asked to draw from an empty alphabet.
    #[error("alphabet must contain at least one letter")]
    EmptyAlphabet,

    /// The letter has a meaning of its own in board files (cell separator or
    /// comment marker), so a board using it cannot be written back out.
    #[error("letter {letter:?} cannot appear in a board file")]
    ReservedLetter { letter: char },
}

/// Errors produced while reading a textual board description.
#[derive(Error, Debug)]
pub enum BoardParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A whitespace-separated token held more than one character.
    #[error("line {line}: cell '{token}' must be a single character")]
    MultiCharCell { line: usize, token: String },

    #[error("invalid board shape: {0}")]
    Shape(#[from] ShapeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_messages() {
        assert_eq!(
            ShapeError::RaggedRow {
                row: 2,
                expected: 4,
                found: 3
            }
            .to_string(),
            "board must be rectangular: row 2 has 3 cells, expected 4"
        );
        assert_eq!(ShapeError::EmptyRow { row: 0 }.to_string(), "row 0 is empty");
        assert_eq!(
            ShapeError::ReservedLetter { letter: '#' }.to_string(),
            "letter '#' cannot appear in a board file"
        );
    }

    #[test]
    fn test_parse_error_wraps_shape_error() {
        let err: BoardParseError = ShapeError::NoRows.into();
        assert!(matches!(err, BoardParseError::Shape(ShapeError::NoRows)));
        assert!(err.to_string().contains("at least one row"));
    }
}
