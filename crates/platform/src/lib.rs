//! Platform detection and per-application directories for dirkit
//!
//! This crate provides cross-platform helpers for:
//! - OS family classification (Windows, Linux, macOS)
//! - Resource (persistent config) and cache directory resolution
//! - Opening files with OS-default or user-preferred programs
//!
//! The free functions ([`platform_resource_dir`], [`get_app_cache_dir`],
//! and friends) operate on the current execution environment; [`AppDirs`]
//! accepts an injected [`PlatformId`] and home directory instead.

mod appdirs;
mod error;
mod open;
mod platform;

pub use appdirs::{
    AppDirs, ensure_app_cache_dir, ensure_app_resource_dir, get_app_cache_dir,
    get_app_resource_dir, platform_cache_dir, platform_resource_dir,
};
pub use error::PlatformError;
pub use open::{editfile, editor_command, startfile};
pub use platform::{Os, PlatformId};
