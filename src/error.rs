//! Error types for input validation and command execution.
//!
//! Every failure mode has a named variant carrying what the user typed, so the
//! console loop can show the message and re-prompt the same field.

use thiserror::Error;

/// Why a piece of raw text could not become a typed value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required and cannot be empty")]
    EmptyInput { field: String },

    #[error("{field} must be a valid number. You entered: '{input}'")]
    NotANumber { field: String, input: String },

    #[error("{field} must be non-negative (>= 0). You entered: {value}")]
    Negative { field: String, value: f64 },

    #[error("Invalid direction: '{input}'. Please use one of: N, E, S, W")]
    InvalidDirection { input: String },

    #[error(
        "Invalid command: '{input}'. Valid commands: L (turn Left), R (turn Right), M (Move forward)"
    )]
    InvalidCommand { input: String },

    #[error(
        "Invalid format: '{input}'. Expected exactly {expected} comma-separated parts, found {found}"
    )]
    BadFieldCount {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error(
        "Invalid command '{symbol}' at position {index} in sequence '{input}'. Valid commands: L (turn Left), R (turn Right), M (Move forward)"
    )]
    InvalidCommandInSequence {
        input: String,
        index: usize,
        symbol: char,
    },
}

/// Fieldless tag for each [`ValidationError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    NotANumber,
    Negative,
    InvalidDirection,
    InvalidCommand,
    BadFieldCount,
    InvalidCommandInSequence,
}

impl ValidationError {
    /// The variant of this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::Negative { .. } => ErrorKind::Negative,
            Self::InvalidDirection { .. } => ErrorKind::InvalidDirection,
            Self::InvalidCommand { .. } => ErrorKind::InvalidCommand,
            Self::BadFieldCount { .. } => ErrorKind::BadFieldCount,
            Self::InvalidCommandInSequence { .. } => ErrorKind::InvalidCommandInSequence,
        }
    }
}

/// Failure raised by the rover while executing raw command tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoverError {
    #[error(
        "Invalid command: '{0}'. Valid commands: L (turn Left), R (turn Right), M (Move forward)"
    )]
    InvalidCommand(char),
}

/// Result type alias for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
