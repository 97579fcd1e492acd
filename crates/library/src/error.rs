//! Error types for the library crate.
//!
//! Everything that can go wrong while reading a movie library from disk
//! ends up in [`LibraryError`]. Sorting never produces these; it has its own
//! error type in the `listing` crate.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while loading and indexing a movie library
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Library file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The library document is not valid JSON or doesn't match the movie schema
    ///
    /// `line` and `column` come straight from serde_json and are 1-based.
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// Two movies in the same library share an id
    #[error("Duplicate movie id {id}")]
    DuplicateId { id: MovieId },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LibraryError>;
