//! Error types for extloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting a project
#[derive(Error, Debug)]
pub enum ExtlocError {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 text
    #[error("file is not valid UTF-8 text: {}", path.display())]
    Decode { path: PathBuf },

    /// Invalid exclusion substring
    #[error("invalid exclusion '{pattern}': {message}")]
    InvalidExclusion { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Root exists but cannot be listed as a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl ExtlocError {
    /// Whether this error is a per-file decode failure the pipeline recovers from.
    pub fn is_decode(&self) -> bool {
        matches!(self, ExtlocError::Decode { .. })
    }
}
