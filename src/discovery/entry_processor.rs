// src/discovery/entry_processor.rs

use crate::filtering::{is_binary, passes_extension_filter};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::PathBuf;
use tracing::instrument;

/// Processes a single directory entry that survived the walker's pruning.
///
/// Returns `Some(path)` for a regular file that passes the extension filter
/// (when one is given) and is not binary. Walker errors are logged and the
/// entry skipped.
#[instrument(level = "trace", skip_all)]
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    extensions: Option<&[String]>,
) -> Option<PathBuf> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };
    let path = entry.path();
    trace!("Processing entry: {}", path.display());

    // --- 2. Filter by File Type ---
    if !entry.file_type().is_some_and(|t| t.is_file()) {
        trace!("Skipping non-file entry: {}", path.display());
        return None;
    }

    // --- 3. Filter by Extension ---
    // Checked before the binary sniff so rejected files are never opened.
    if let Some(extensions) = extensions {
        if !passes_extension_filter(path, extensions) {
            trace!("Skipping file due to extension filter: {}", path.display());
            return None;
        }
    }

    // --- 4. Filter Binary Content ---
    if is_binary(path) {
        debug!("Skipping binary file: {}", path.display());
        return None;
    }

    debug!("Entry passed filters: {}", path.display());
    Some(entry.into_path())
}
