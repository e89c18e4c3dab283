//! Discovers candidate source files under the configured roots.
use crate::cancellation::CancellationToken;
use crate::config::path_resolve::path_key;
use crate::config::DiscoveryConfig;
use crate::errors::Result;
use crate::filtering::file_extension;
use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

mod entry_processor;
mod gitignore;
mod walker;

use entry_processor::process_direntry;
pub use gitignore::read_gitignore_excludes;
use walker::build_walker;

/// Walks one root and returns the candidate files beneath it.
///
/// Per entry, in order: hidden names, skip-set directories and files, and
/// excluded paths are pruned (an excluded directory is never entered); then a
/// file is kept when its extension matches and it is not binary. Files come
/// back in depth-first filesystem order.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled during the walk.
///
/// # Examples
///
/// ```
/// # use std::fs;
/// use ccdoc::cancellation::CancellationToken;
/// use ccdoc::config::DiscoveryConfig;
/// use ccdoc::discovery::find_files;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join("main.py"), "print(1)\n")?;
/// fs::write(temp.path().join("notes.txt"), "hello\n")?;
///
/// let config = DiscoveryConfig::new(vec![temp.path().to_path_buf()], vec!["py".to_string()]);
/// let files = find_files(temp.path(), &config, &CancellationToken::new())?;
/// assert_eq!(files, vec![temp.path().join("main.py")]);
/// # Ok(())
/// # }
/// ```
pub fn find_files(
    root: &Path,
    config: &DiscoveryConfig,
    token: &CancellationToken,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_root(root, config, Some(config.extensions.as_slice()), token, |path| {
        files.push(path)
    })?;
    debug!("Found {} candidate files under {}", files.len(), root.display());
    Ok(files)
}

/// Runs [`find_files`] for each root and concatenates the results.
///
/// A path reached from more than one root is kept at its first occurrence.
pub fn collect_files(
    roots: &[PathBuf],
    config: &DiscoveryConfig,
    token: &CancellationToken,
) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for root in roots {
        for path in find_files(root, config, token)? {
            if seen.insert(path_key(&path)) {
                files.push(path);
            }
        }
    }
    debug!("Discovery complete. {} files across {} roots", files.len(), roots.len());
    Ok(files)
}

/// Lists every distinct lower-case extension of the files discovery would see
/// without an extension filter.
///
/// Hidden, skip-set, exclusion and binary rules still apply.
pub fn collect_extensions(
    roots: &[PathBuf],
    config: &DiscoveryConfig,
    token: &CancellationToken,
) -> Result<BTreeSet<String>> {
    let mut extensions = BTreeSet::new();
    for root in roots {
        walk_root(root, config, None, token, |path| {
            if let Some(ext) = file_extension(&path) {
                extensions.insert(ext);
            }
        })?;
    }
    Ok(extensions)
}

fn walk_root(
    root: &Path,
    config: &DiscoveryConfig,
    extensions: Option<&[String]>,
    token: &CancellationToken,
    mut visit: impl FnMut(PathBuf),
) -> Result<()> {
    token.check()?;
    for entry_result in build_walker(root, config) {
        token.check()?;
        if let Some(path) = process_direntry(entry_result, extensions) {
            visit(path);
        }
    }
    Ok(())
}
