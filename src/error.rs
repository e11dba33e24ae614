//! Error types for linkchain operations.
//!
//! This module provides the error hierarchy using `thiserror` for chain
//! mutations and queries, the standalone string/matrix routines, and CLI
//! commands.

use thiserror::Error;

/// Result type alias for linkchain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Chain-related errors (queries on the linked chain).
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// Routine-related errors (string and matrix transforms).
    #[error("routine error: {0}")]
    Routine(#[from] RoutineError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised by [`Chain`](crate::core::Chain) queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The operation needs at least one element.
    #[error("chain is empty")]
    EmptyStructure,

    /// Position is outside `1..=len`.
    #[error("index {k} out of range for chain of length {len}")]
    IndexOutOfRange {
        /// Requested position counted from the tail (1 = last).
        k: usize,
        /// Number of elements in the chain at the time of the call.
        len: usize,
    },
}

/// Errors raised by the string and matrix routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutineError {
    /// The logical length is larger than the buffer holding it.
    #[error("true length {true_len} exceeds buffer length {buffer_len}")]
    TrueLengthOutOfBounds {
        /// Logical length requested.
        true_len: usize,
        /// Physical buffer length.
        buffer_len: usize,
    },

    /// The buffer has no room for the expanded content.
    #[error("buffer too small: need {needed}, have {available}")]
    BufferTooSmall {
        /// Length required after expansion.
        needed: usize,
        /// Physical buffer length.
        available: usize,
    },

    /// Matrix has a row whose width differs from the first row.
    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        /// Offending row index.
        row: usize,
        /// Width of the offending row.
        found: usize,
        /// Width of row zero.
        expected: usize,
    },

    /// Matrix must be square for this operation.
    #[error("matrix is {rows}x{cols}, expected square")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

impl From<std::num::ParseIntError> for CommandError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
