//! Path utilities for dirkit
//!
//! This crate provides small path helpers shared across dirkit:
//! - Home-shorthand (`~`) expansion and compression
//! - Lexical path normalization
//! - Idempotent directory creation
//! - File-name augmentation
//!
//! Temporary directories are not wrapped here; use the `tempfile` crate
//! directly.

mod augment;
mod ensure;
mod error;
mod expand;

pub use augment::{Augment, augpath};
pub use ensure::ensuredir;
pub use error::PathsError;
pub use expand::{
    compressuser, compressuser_in, expanduser, expanduser_in, normalize, truepath, userhome,
};
