//! Home-shorthand expansion and lexical path normalization

use crate::error::PathsError;
use std::path::{Component, Path, PathBuf};

/// Returns the current user's home directory
pub fn userhome() -> Result<PathBuf, PathsError> {
    dirs::home_dir().ok_or(PathsError::NoHomeDirectory)
}

/// Expand a path, resolving a leading `~` to the current user's home directory
///
/// # Examples
///
/// ```
/// use dirkit_paths::expanduser;
///
/// let path = expanduser("~/.config/widget").unwrap();
/// assert!(path.starts_with(dirs::home_dir().unwrap()));
/// ```
pub fn expanduser<P: AsRef<Path>>(path: P) -> Result<PathBuf, PathsError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();
    if path_str.starts_with("~/") || path_str == "~" {
        Ok(expanduser_in(path, userhome()?))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Expand a path against an explicit home directory
///
/// Same as [`expanduser`] but with the home directory supplied by the
/// caller, so tests can use a synthetic home.
pub fn expanduser_in<P: AsRef<Path>, H: AsRef<Path>>(path: P, home: H) -> PathBuf {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if let Some(rest) = path_str.strip_prefix("~/") {
        home.as_ref().join(rest)
    } else if path_str == "~" {
        home.as_ref().to_path_buf()
    } else {
        path.to_path_buf()
    }
}

/// Replace a leading home-directory prefix with `~`
///
/// The inverse of [`expanduser`]. The path is normalized first; paths
/// outside the home directory are returned normalized but otherwise
/// unchanged.
pub fn compressuser<P: AsRef<Path>>(path: P) -> Result<PathBuf, PathsError> {
    Ok(compressuser_in(path, userhome()?))
}

/// Replace a leading home-directory prefix with `~`, against an explicit home
pub fn compressuser_in<P: AsRef<Path>, H: AsRef<Path>>(path: P, home: H) -> PathBuf {
    let path = normalize(path.as_ref());
    match path.strip_prefix(home.as_ref()) {
        Ok(rest) if rest.as_os_str().is_empty() => PathBuf::from("~"),
        Ok(rest) => PathBuf::from("~").join(rest),
        Err(_) => path,
    }
}

/// Normalize a path by resolving `.` and `..` components without requiring
/// the path to exist
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut components = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                // Pop the last component unless it is a root or prefix
                match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => components.push(component),
                }
            }
            Component::CurDir => {
                // Skip . components
            }
            other => {
                components.push(other);
            }
        }
    }

    components.iter().collect()
}

/// Resolve a path to an absolute, normalized form
///
/// Expands a leading `~`, resolves relative paths against the current
/// working directory, and normalizes `.`/`..` components lexically. The
/// path is not required to exist and symlinks are not resolved.
pub fn truepath<P: AsRef<Path>>(path: P) -> Result<PathBuf, PathsError> {
    let expanded = expanduser(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()?.join(expanded)
    };
    Ok(normalize(absolute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().expect("No home directory");

        let expanded = expanduser("~/.config").unwrap();
        assert_eq!(expanded, home.join(".config"));

        let expanded = expanduser("~").unwrap();
        assert_eq!(expanded, home);
    }

    #[test]
    fn test_expand_absolute_untouched() {
        let path = expanduser("/etc/hosts").unwrap();
        assert_eq!(path, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_expand_relative_untouched() {
        let path = expanduser("./foo/bar").unwrap();
        assert_eq!(path, PathBuf::from("./foo/bar"));
    }

    #[test]
    fn test_expand_in_synthetic_home() {
        let path = expanduser_in("~/.cache/widget", "/home/alice");
        assert_eq!(path, PathBuf::from("/home/alice/.cache/widget"));

        let path = expanduser_in("~", "/home/alice");
        assert_eq!(path, PathBuf::from("/home/alice"));
    }

    #[test]
    fn test_compress_home_prefix() {
        let path = compressuser_in("/home/alice/.config/widget", "/home/alice");
        assert_eq!(path, PathBuf::from("~/.config/widget"));

        let path = compressuser_in("/home/alice", "/home/alice");
        assert_eq!(path, PathBuf::from("~"));
    }

    #[test]
    fn test_compress_outside_home() {
        let path = compressuser_in("/etc/hosts", "/home/alice");
        assert_eq!(path, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_compress_normalizes_first() {
        let path = compressuser_in("/home/alice/tmp/../.config", "/home/alice");
        assert_eq!(path, PathBuf::from("~/.config"));
    }

    #[test]
    fn test_expand_compress_round_trip() {
        let expanded = expanduser_in("~/.config/widget", "/home/alice");
        let compressed = compressuser_in(&expanded, "/home/alice");
        assert_eq!(compressed, PathBuf::from("~/.config/widget"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/foo/bar/../baz"), PathBuf::from("/foo/baz"));
        assert_eq!(normalize("/foo/./bar"), PathBuf::from("/foo/bar"));
        assert_eq!(normalize("/foo/bar/../../baz"), PathBuf::from("/baz"));
    }

    #[test]
    fn test_normalize_parent_at_root() {
        // .. above the root stays at the root
        assert_eq!(normalize("/../foo"), PathBuf::from("/foo"));
    }

    #[test]
    fn test_normalize_relative_parent_kept() {
        // Leading .. on a relative path cannot be resolved lexically
        assert_eq!(normalize("../foo"), PathBuf::from("../foo"));
    }

    #[test]
    fn test_truepath_relative() {
        let cwd = std::env::current_dir().unwrap();
        let path = truepath("foo/./bar").unwrap();
        assert_eq!(path, cwd.join("foo/bar"));
    }

    #[test]
    fn test_truepath_absolute() {
        let path = truepath("/etc/../etc/hosts").unwrap();
        assert_eq!(path, PathBuf::from("/etc/hosts"));
    }
}
