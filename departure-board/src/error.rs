//! Error types for the departure board.
//!
//! Every fallible operation returns a [`BoardError`]; the session turns
//! them into diagnostics and decides whether the store survives.

use std::path::PathBuf;

use crate::domain::{InvalidTrainNumber, TimeError};

/// Errors reported to the user while running commands.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Input did not name a known command
    #[error("unknown command: {0}")]
    InvalidCommand(String),

    /// Save/load path does not end in `.json`
    #[error("unsupported file format: {} (expected a .json file)", .0.display())]
    InvalidFileExtension(PathBuf),

    /// Load target does not exist
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Load target could not be read or is not a valid departure list
    #[error("malformed file {}: {message}", .path.display())]
    MalformedFile { path: PathBuf, message: String },

    /// A value typed at a prompt or as a command argument is invalid
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Writing a file or using a standard stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TimeError> for BoardError {
    fn from(err: TimeError) -> Self {
        BoardError::InvalidInput(err.to_string())
    }
}

impl From<InvalidTrainNumber> for BoardError {
    fn from(err: InvalidTrainNumber) -> Self {
        BoardError::InvalidInput(err.to_string())
    }
}
