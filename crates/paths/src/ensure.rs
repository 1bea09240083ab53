//! Idempotent directory creation

use crate::error::PathsError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Create a directory and every missing parent, returning the path
///
/// Succeeds silently if the directory already exists, including when a
/// concurrent caller creates it first. Fails with
/// [`PathsError::NotADirectory`] if the path exists but is not a
/// directory.
///
/// # Examples
///
/// ```no_run
/// use dirkit_paths::ensuredir;
///
/// let dpath = ensuredir("/tmp/widget/cache").unwrap();
/// assert!(dpath.is_dir());
/// ```
pub fn ensuredir<P: AsRef<Path>>(path: P) -> Result<PathBuf, PathsError> {
    let path = path.as_ref();
    if path.exists() {
        if !path.is_dir() {
            return Err(PathsError::NotADirectory(path.to_path_buf()));
        }
        return Ok(path.to_path_buf());
    }
    debug!(path = %path.display(), "creating directory");
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(path.to_path_buf()),
        // A racing creator is success; anything else is surfaced
        Err(_) if path.is_dir() => Ok(path.to_path_buf()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(PathsError::NotADirectory(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
