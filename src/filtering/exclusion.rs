// src/filtering/exclusion.rs

use crate::config::path_resolve::path_key;
use std::path::{Path, PathBuf};

/// A set of normalized absolute paths excluded together with everything below them.
///
/// Matching compares whole components of the normalized path, so excluding
/// `/srv/foo` covers `/srv/foo/a.py` but not `/srv/foobar`.
///
/// # Examples
///
/// ```
/// use ccdoc::filtering::ExclusionSet;
/// use std::path::{Path, PathBuf};
///
/// let set = ExclusionSet::new(vec![PathBuf::from("/srv/foo")]);
/// assert!(set.covers(Path::new("/srv/foo")));
/// assert!(set.covers(Path::new("/srv/foo/deep/a.py")));
/// assert!(!set.covers(Path::new("/srv/foobar/a.py")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    paths: Vec<PathBuf>,
    keys: Vec<PathBuf>,
}

impl ExclusionSet {
    /// Builds a set from already-normalized absolute paths.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let keys = paths.iter().map(|p| path_key(p)).collect();
        Self { paths, keys }
    }

    /// The excluded paths, in insertion order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether `path` equals or lies beneath any excluded path.
    pub fn covers(&self, path: &Path) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        let candidate = path_key(path);
        self.keys.iter().any(|excluded| candidate.starts_with(excluded))
    }
}
