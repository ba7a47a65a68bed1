//! Error types for jotter-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using jotter-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jotter-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The id does not refer to a note on the board
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// Palette index out of range
    #[error("Invalid color index: {0}")]
    InvalidColor(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
