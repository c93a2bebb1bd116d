//! Errors raised while decoding the text format.

use displaydoc::Display;
use thiserror::Error;

/// Malformed or incomplete input text.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum FormatError {
    /// Input is empty, expected a `rows,cols,generations` header line.
    MissingHeader,
    /// Header {line:?} has {found} comma-separated fields, expected 3.
    FieldCount { line: String, found: usize },
    /// Header field `{field}` is not a non-negative integer: {value:?}.
    InvalidInteger { field: &'static str, value: String },
    /// Grid dimensions must be positive, got {rows}x{cols}.
    ZeroDimension { rows: usize, cols: usize },
    /// Grid of {rows}x{cols} cells is too large to address.
    TooLarge { rows: usize, cols: usize },
    /// Expected {expected} grid rows, found {found}.
    MissingRows { expected: usize, found: usize },
    /// Row {row} has {found} cells, expected {expected}.
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Row {row}, column {col}: cell token {token:?} is not a single character.
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
    },
}
