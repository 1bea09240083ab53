//! Platform classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system families supported by dirkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Darwin,
    Windows,
}

impl Os {
    /// Detect the current operating system at runtime
    ///
    /// Returns `None` if the OS is not one of the supported families
    pub fn current() -> Option<Self> {
        match std::env::consts::OS {
            "linux" => Some(Self::Linux),
            "macos" => Some(Self::Darwin),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }

    /// Classify a `sys.platform`-style identifier string
    ///
    /// Matches by prefix, so variants like `"linux2"` or `"darwin21"`
    /// still classify. Returns `None` for anything else.
    pub fn from_identifier(ident: &str) -> Option<Self> {
        if ident.starts_with("win32") {
            Some(Self::Windows)
        } else if ident.starts_with("linux") {
            Some(Self::Linux)
        } else if ident.starts_with("darwin") {
            Some(Self::Darwin)
        } else {
            None
        }
    }

    /// Returns the canonical identifier for this OS family
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "win32",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable classification of an execution environment
///
/// Carries the three-way OS classification plus an independent
/// POSIX-compatibility fact. The two are read from different signals and
/// are not guaranteed to agree; an environment can be POSIX-compatible
/// without matching any supported family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformId {
    os: Option<Os>,
    posix: bool,
}

impl PlatformId {
    /// Create a platform identity from its parts
    pub const fn new(os: Option<Os>, posix: bool) -> Self {
        Self { os, posix }
    }

    /// Detect the identity of the current execution environment
    pub fn current() -> Self {
        Self {
            os: Os::current(),
            posix: cfg!(unix),
        }
    }

    /// Build a platform identity from an identifier string
    ///
    /// Intended for tests and callers that simulate other platforms;
    /// `posix` is supplied separately since it comes from a separate
    /// environment signal.
    pub fn from_identifier(ident: &str, posix: bool) -> Self {
        Self {
            os: Os::from_identifier(ident),
            posix,
        }
    }

    /// The OS family, or `None` if unrecognized
    pub fn os(&self) -> Option<Os> {
        self.os
    }

    /// Check if this is a Windows environment
    pub fn is_windows(&self) -> bool {
        self.os == Some(Os::Windows)
    }

    /// Check if this is a Linux environment
    pub fn is_linux(&self) -> bool {
        self.os == Some(Os::Linux)
    }

    /// Check if this is a macOS environment
    pub fn is_macos(&self) -> bool {
        self.os == Some(Os::Darwin)
    }

    /// Check if the environment reports POSIX-compatible semantics
    pub fn is_posix_compatible(&self) -> bool {
        self.posix
    }
}
