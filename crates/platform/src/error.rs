//! Error types for dirkit-platform

use dirkit_paths::PathsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Unknown platform: expected one of win32, linux, darwin")]
    UnsupportedPlatform,

    #[error("Failed to determine home directory")]
    NoHomeDirectory,

    #[error("Path error: {0}")]
    Paths(#[from] PathsError),

    #[error("File does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}
