//! Per-application directory resolution
//!
//! Maps a purpose (persistent resource data vs. deletable cache data) and
//! a platform identity to the OS-conventional base directory, then derives
//! application-specific subdirectories from it.

use crate::error::PlatformError;
use crate::platform::{Os, PlatformId};
use dirkit_paths::{ensuredir, expanduser_in, normalize, userhome};
use std::path::PathBuf;
use tracing::debug;

/// What the requested directory is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Purpose {
    /// Persistent configuration data
    Resource,
    /// Ephemeral, safely-deletable data
    Cache,
}

impl Purpose {
    /// The OS-conventional base directory, before home expansion
    fn base(self, os: Os) -> &'static str {
        match (self, os) {
            (Self::Resource, Os::Windows) => "~/AppData/Roaming",
            (Self::Resource, Os::Linux) => "~/.config",
            (Self::Resource, Os::Darwin) => "~/Library/Application Support",
            (Self::Cache, Os::Windows) => "~/AppData/Local",
            (Self::Cache, Os::Linux) => "~/.cache",
            (Self::Cache, Os::Darwin) => "~/Library/Caches",
        }
    }
}

/// Directory resolver for a platform identity and home directory
///
/// Path derivation is a pure function of the identity, the home directory,
/// and the request; only the `ensure_*` methods touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    platform: PlatformId,
    home: PathBuf,
}

impl AppDirs {
    /// Resolver for the current execution environment
    ///
    /// Fails with [`PlatformError::NoHomeDirectory`] if the user's home
    /// directory cannot be determined.
    pub fn current() -> Result<Self, PlatformError> {
        let home = userhome().map_err(|_| PlatformError::NoHomeDirectory)?;
        Ok(Self {
            platform: PlatformId::current(),
            home,
        })
    }

    /// Resolver with an explicit platform identity and home directory
    ///
    /// Lets tests simulate each supported platform and the unrecognized
    /// case with a synthetic home.
    pub fn with_home(platform: PlatformId, home: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            home: home.into(),
        }
    }

    /// The platform identity this resolver was built with
    pub fn platform(&self) -> PlatformId {
        self.platform
    }

    fn base_dir(&self, purpose: Purpose) -> Result<PathBuf, PlatformError> {
        let os = self
            .platform
            .os()
            .ok_or(PlatformError::UnsupportedPlatform)?;
        let dpath = normalize(expanduser_in(purpose.base(os), &self.home));
        debug!(os = %os, dpath = %dpath.display(), "resolved base directory");
        Ok(dpath)
    }

    /// Base directory for persistent configuration data
    pub fn resource_dir(&self) -> Result<PathBuf, PlatformError> {
        self.base_dir(Purpose::Resource)
    }

    /// Base directory for ephemeral, safely-deletable data
    pub fn cache_dir(&self) -> Result<PathBuf, PlatformError> {
        self.base_dir(Purpose::Cache)
    }

    fn app_dir(
        &self,
        purpose: Purpose,
        appname: &str,
        subdirs: &[&str],
    ) -> Result<PathBuf, PlatformError> {
        let mut dpath = self.base_dir(purpose)?;
        dpath.push(appname);
        for sub in subdirs {
            dpath.push(sub);
        }
        Ok(dpath)
    }

    /// Resource directory for an application; pure path composition
    pub fn app_resource_dir(
        &self,
        appname: &str,
        subdirs: &[&str],
    ) -> Result<PathBuf, PlatformError> {
        self.app_dir(Purpose::Resource, appname, subdirs)
    }

    /// Cache directory for an application; pure path composition
    pub fn app_cache_dir(&self, appname: &str, subdirs: &[&str]) -> Result<PathBuf, PlatformError> {
        self.app_dir(Purpose::Cache, appname, subdirs)
    }

    /// Resource directory for an application, created if missing
    pub fn ensure_app_resource_dir(
        &self,
        appname: &str,
        subdirs: &[&str],
    ) -> Result<PathBuf, PlatformError> {
        let dpath = self.app_resource_dir(appname, subdirs)?;
        ensuredir(&dpath)?;
        Ok(dpath)
    }

    /// Cache directory for an application, created if missing
    pub fn ensure_app_cache_dir(
        &self,
        appname: &str,
        subdirs: &[&str],
    ) -> Result<PathBuf, PlatformError> {
        let dpath = self.app_cache_dir(appname, subdirs)?;
        ensuredir(&dpath)?;
        Ok(dpath)
    }
}

/// Base resource directory for the current platform
///
/// `~/AppData/Roaming` on Windows, `~/.config` on Linux,
/// `~/Library/Application Support` on macOS, with `~` expanded.
pub fn platform_resource_dir() -> Result<PathBuf, PlatformError> {
    AppDirs::current()?.resource_dir()
}

/// Base cache directory for the current platform
///
/// `~/AppData/Local` on Windows, `~/.cache` on Linux,
/// `~/Library/Caches` on macOS, with `~` expanded.
pub fn platform_cache_dir() -> Result<PathBuf, PlatformError> {
    AppDirs::current()?.cache_dir()
}

/// Resource directory for an application; the path may not exist yet
///
/// # Examples
///
/// ```no_run
/// use dirkit_platform::get_app_resource_dir;
///
/// let dpath = get_app_resource_dir("widget", &["v2"]).unwrap();
/// ```
pub fn get_app_resource_dir(appname: &str, subdirs: &[&str]) -> Result<PathBuf, PlatformError> {
    AppDirs::current()?.app_resource_dir(appname, subdirs)
}

/// Resource directory for an application, created if missing
pub fn ensure_app_resource_dir(appname: &str, subdirs: &[&str]) -> Result<PathBuf, PlatformError> {
    AppDirs::current()?.ensure_app_resource_dir(appname, subdirs)
}

/// Cache directory for an application; the path may not exist yet
pub fn get_app_cache_dir(appname: &str, subdirs: &[&str]) -> Result<PathBuf, PlatformError> {
    AppDirs::current()?.app_cache_dir(appname, subdirs)
}

/// Cache directory for an application, created if missing
pub fn ensure_app_cache_dir(appname: &str, subdirs: &[&str]) -> Result<PathBuf, PlatformError> {
    AppDirs::current()?.ensure_app_cache_dir(appname, subdirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn resolver(ident: &str) -> AppDirs {
        AppDirs::with_home(
            PlatformId::from_identifier(ident, ident != "win32"),
            "/home/alice",
        )
    }

    #[test]
    fn resource_dir_per_platform() {
        assert_eq!(
            resolver("linux").resource_dir().unwrap(),
            Path::new("/home/alice/.config")
        );
        assert_eq!(
            resolver("darwin").resource_dir().unwrap(),
            Path::new("/home/alice/Library/Application Support")
        );
        assert_eq!(
            resolver("win32").resource_dir().unwrap(),
            Path::new("/home/alice/AppData/Roaming")
        );
    }

    #[test]
    fn cache_dir_per_platform() {
        assert_eq!(
            resolver("linux").cache_dir().unwrap(),
            Path::new("/home/alice/.cache")
        );
        assert_eq!(
            resolver("darwin").cache_dir().unwrap(),
            Path::new("/home/alice/Library/Caches")
        );
        assert_eq!(
            resolver("win32").cache_dir().unwrap(),
            Path::new("/home/alice/AppData/Local")
        );
    }

    #[test]
    fn unrecognized_platform_is_fatal() {
        let dirs = resolver("freebsd");
        assert!(matches!(
            dirs.resource_dir(),
            Err(PlatformError::UnsupportedPlatform)
        ));
        assert!(matches!(
            dirs.cache_dir(),
            Err(PlatformError::UnsupportedPlatform)
        ));
    }

    #[test]
    fn app_dir_joins_segments_in_order() {
        let dirs = resolver("linux");
        assert_eq!(
            dirs.app_resource_dir("myapp", &[]).unwrap(),
            dirs.resource_dir().unwrap().join("myapp")
        );
        assert_eq!(
            dirs.app_resource_dir("myapp", &["sub", "dir"]).unwrap(),
            Path::new("/home/alice/.config/myapp/sub/dir")
        );
    }

    #[test]
    fn app_cache_dir_example() {
        // Linux: get_app_cache_dir("widget") -> <home>/.cache/widget
        let dirs = resolver("linux");
        assert_eq!(
            dirs.app_cache_dir("widget", &[]).unwrap(),
            Path::new("/home/alice/.cache/widget")
        );
    }

    #[test]
    fn macos_resource_dir_example() {
        // macOS: get_app_resource_dir("widget", "v2")
        //   -> <home>/Library/Application Support/widget/v2
        let dirs = resolver("darwin");
        assert_eq!(
            dirs.app_resource_dir("widget", &["v2"]).unwrap(),
            Path::new("/home/alice/Library/Application Support/widget/v2")
        );
    }

    #[test]
    fn base_dirs_are_normalized() {
        let dirs = AppDirs::with_home(
            PlatformId::from_identifier("linux", true),
            "/home/alice/subdir/..",
        );
        assert_eq!(
            dirs.cache_dir().unwrap(),
            Path::new("/home/alice/.cache")
        );
    }

    #[test]
    fn derivation_is_pure() {
        let dirs = resolver("linux");
        assert_eq!(
            dirs.app_cache_dir("myapp", &["a"]).unwrap(),
            dirs.app_cache_dir("myapp", &["a"]).unwrap()
        );
    }
}
