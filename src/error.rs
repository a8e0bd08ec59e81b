//! Error types for grid input validation

use thiserror::Error;

use crate::geometry::IntSize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("bitmap of size {size} needs {expected} cells, got {actual}")]
    SizeMismatch {
        size: IntSize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        found: char,
        line: usize,
        column: usize,
    },

    #[error("bitmap has no cells")]
    Empty,
}

impl GridError {
    pub fn size_mismatch(size: IntSize, actual: usize) -> Self {
        GridError::SizeMismatch {
            size,
            expected: size.area(),
            actual,
        }
    }

    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        GridError::RaggedRow {
            row,
            expected,
            actual,
        }
    }

    /// An unexpected character; `line` and `column` are 1-based
    pub fn invalid_character(found: char, line: usize, column: usize) -> Self {
        GridError::InvalidCharacter {
            found,
            line,
            column,
        }
    }
}
