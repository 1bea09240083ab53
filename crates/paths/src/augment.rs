//! File-name augmentation

use std::path::{Path, PathBuf};

/// Edits to apply to the file-name component of a path
///
/// Unset fields leave the corresponding part of the name unchanged.
#[derive(Debug, Clone, Default)]
pub struct Augment<'a> {
    /// Text prepended to the file name
    pub prefix: Option<&'a str>,
    /// Text inserted between the base name and the extension
    pub suffix: Option<&'a str>,
    /// Replacement extension, without the leading dot
    pub ext: Option<&'a str>,
    /// Replacement base name, keeping the original extension
    pub base: Option<&'a str>,
}

/// Rewrite the file name of a path according to `aug`
///
/// The directory component is kept as-is. The file name is split into a
/// base and an extension, each optionally replaced, then reassembled as
/// `prefix + base + suffix + extension`.
///
/// # Examples
///
/// ```
/// use dirkit_paths::{augpath, Augment};
/// use std::path::PathBuf;
///
/// let out = augpath("/data/img.png", &Augment { suffix: Some("_thumb"), ..Default::default() });
/// assert_eq!(out, PathBuf::from("/data/img_thumb.png"));
/// ```
pub fn augpath<P: AsRef<Path>>(path: P, aug: &Augment<'_>) -> PathBuf {
    let path = path.as_ref();
    let dpath = path.parent().unwrap_or_else(|| Path::new(""));

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let orig_ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    let base = aug.base.map(str::to_owned).unwrap_or(stem);
    let ext = aug.ext.map(str::to_owned).or(orig_ext);

    let mut fname = String::new();
    if let Some(prefix) = aug.prefix {
        fname.push_str(prefix);
    }
    fname.push_str(&base);
    if let Some(suffix) = aug.suffix {
        fname.push_str(suffix);
    }
    if let Some(ext) = ext {
        fname.push('.');
        fname.push_str(&ext);
    }

    dpath.join(fname)
}
