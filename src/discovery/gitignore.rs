// src/discovery/gitignore.rs

use crate::config::path_resolve::normalize_path_bufs;
use crate::filtering::{default_skip_dirs, name_in_set};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GITIGNORE_FILE_NAME: &str = ".gitignore";
const GLOB_CHARS: &[char] = &['*', '?', '['];

/// Collects the literal paths named by `.gitignore` files under the roots.
///
/// Only lines naming a concrete path are used: blank lines, comments,
/// negations and glob patterns are ignored, and a path is kept only if it
/// exists relative to the `.gitignore` that names it. The walk skips `.git`
/// and the built-in skip-set directories.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use ccdoc::discovery::read_gitignore_excludes;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempfile::tempdir()?;
/// let root = temp.path().canonicalize()?;
/// fs::create_dir(root.join("build"))?;
/// fs::write(root.join(".gitignore"), "build/\n*.log\n")?;
///
/// assert_eq!(read_gitignore_excludes(&[root.clone()]), vec![root.join("build")]);
/// # Ok(())
/// # }
/// ```
pub fn read_gitignore_excludes(roots: &[PathBuf]) -> Vec<PathBuf> {
    let skip_dirs = default_skip_dirs();
    let mut found = Vec::new();

    for root in roots {
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir() && name_in_set(entry.path(), &skip_dirs))
        });
        for entry in walker {
            match entry {
                Ok(entry)
                    if entry.file_type().is_file() && entry.file_name() == GITIGNORE_FILE_NAME =>
                {
                    found.extend(excludes_from_file(entry.path()));
                }
                Ok(_) => {}
                Err(e) => debug!("Skipping unreadable entry while looking for .gitignore: {}", e),
            }
        }
    }

    let normalized = normalize_path_bufs(&found);
    debug!("Collected {} exclusions from .gitignore files", normalized.len());
    normalized
}

/// Reads one `.gitignore` and resolves its literal entries against its directory.
fn excludes_from_file(gitignore: &Path) -> Vec<PathBuf> {
    let content = match fs::read_to_string(gitignore) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read {}: {}", gitignore.display(), e);
            return Vec::new();
        }
    };
    let base = gitignore.parent().unwrap_or_else(|| Path::new(""));
    content
        .lines()
        .filter_map(literal_entry)
        .map(|entry| base.join(entry))
        .filter(|path| path.exists())
        .collect()
}

/// Returns the path part of a line that names a concrete path, if it does.
fn literal_entry(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }
    if line.contains(GLOB_CHARS) {
        return None;
    }
    let line = line.strip_prefix('/').unwrap_or(line);
    let line = line.strip_suffix('/').unwrap_or(line);
    (!line.is_empty()).then_some(line)
}
