//! Error types for dirkit-paths

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in path operations
#[derive(Debug, Error)]
pub enum PathsError {
    #[error("Failed to determine home directory")]
    NoHomeDirectory,

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
