//! Error types for huffcode.
//!
//! Frequency counting and tree construction cannot fail, so the taxonomy is
//! small: writing the code table can fail, and re-reading a serialized table
//! can reject malformed text.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all fallible operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The code table destination could not be created or written
    #[error("cannot write code table to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialized code table is malformed
    #[error("code table parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error on a caller-provided sink or source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing a single bit-string into a [`Code`](crate::code::Code).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// A code must have at least one bit
    #[error("empty code")]
    Empty,

    /// Only '0' and '1' are valid bits
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },
}

/// Errors from parsing a serialized code table.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Line does not contain the single-space separator
    #[error("line {line}: missing separator between symbol and code")]
    MissingSeparator { line: usize },

    /// Symbol field is not a decimal byte value
    #[error("line {line}: invalid symbol {value:?}")]
    InvalidSymbol { line: usize, value: String },

    /// Code field is empty or contains something other than '0'/'1'
    #[error("line {line}: {source}")]
    InvalidCode {
        line: usize,
        #[source]
        source: CodeError,
    },

    /// Same symbol appears on more than one line
    #[error("line {line}: duplicate symbol {symbol}")]
    DuplicateSymbol { line: usize, symbol: u8 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
