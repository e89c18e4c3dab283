// src/config/path_resolve.rs

//! Turns user-supplied path strings into absolute, de-duplicated paths.

use std::collections::HashSet;
use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Whether the host filesystem compares names case-insensitively.
pub(crate) const CASE_INSENSITIVE_FS: bool = cfg!(windows);

/// Makes `path` absolute against the current directory and folds `.`/`..`
/// components lexically. Symlinks are not resolved and the path need not exist.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                log::warn!(
                    "Could not read current directory to absolutize '{}': {}",
                    path.display(),
                    e
                );
                path.to_path_buf()
            }
        }
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pops past the root or a drive prefix.
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Trims surrounding whitespace from entries that are valid Unicode.
fn trim_entry(raw: &OsStr) -> &OsStr {
    match raw.to_str() {
        Some(text) => OsStr::new(text.trim()),
        None => raw,
    }
}

/// Key used to compare two normalized paths for equality.
///
/// The key keeps the raw OS bytes, so distinct non-UTF-8 names never collide.
/// Case is folded only on case-insensitive hosts.
pub(crate) fn path_key(path: &Path) -> PathBuf {
    if CASE_INSENSITIVE_FS {
        if let Some(text) = path.to_str() {
            return PathBuf::from(text.to_lowercase());
        }
    }
    path.to_path_buf()
}

/// Normalizes a list of user-supplied paths.
///
/// Each non-empty entry is made absolute, a trailing separator is dropped
/// with the component rebuild, and duplicates are removed while keeping
/// first-seen order. Nonexistent paths pass through; this function never
/// fails.
///
/// # Examples
///
/// ```
/// use ccdoc::config::path_resolve::normalize_paths;
///
/// let paths = normalize_paths(["/tmp/project/", "/tmp/project", "", "/tmp/other"]);
/// assert_eq!(paths.len(), 2);
/// assert!(paths[0].ends_with("project"));
/// assert!(paths[1].ends_with("other"));
/// ```
pub fn normalize_paths<I, S>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for raw in paths {
        let raw = trim_entry(raw.as_ref());
        if raw.is_empty() {
            continue;
        }
        let path = absolutize(Path::new(raw));
        if seen.insert(path_key(&path)) {
            normalized.push(path);
        }
    }
    normalized
}

/// Same as [`normalize_paths`], for values that are already `PathBuf`s.
pub fn normalize_path_bufs(paths: &[PathBuf]) -> Vec<PathBuf> {
    normalize_paths(paths.iter().map(|p| p.as_os_str()))
}
