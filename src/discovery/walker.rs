use crate::config::DiscoveryConfig;
use crate::constants::HIDDEN_MARKER;
use crate::filtering::{name_in_set, ExclusionSet};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace};
use std::path::Path;

/// The name and path rules decided at entry time, before a directory is entered.
#[derive(Debug, Clone)]
struct PruneRules {
    skip_dirs: Vec<String>,
    skip_files: Vec<String>,
    excludes: ExclusionSet,
}

impl PruneRules {
    /// Returns the reason an entry is pruned, or `None` to keep it.
    fn prune_reason(&self, entry: &DirEntry) -> Option<&'static str> {
        // The root itself is always walked.
        if entry.depth() == 0 {
            return None;
        }
        let path = entry.path();
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        if is_hidden(path) {
            Some("hidden")
        } else if is_dir && name_in_set(path, &self.skip_dirs) {
            Some("skip-set directory")
        } else if !is_dir && name_in_set(path, &self.skip_files) {
            Some("skip-set file")
        } else if self.excludes.covers(path) {
            Some("excluded")
        } else {
            None
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with(HIDDEN_MARKER))
}

/// Configures and builds a sequential `ignore::Walk` for one root.
///
/// Ignore files are not consulted; hidden entries, skip-set names and
/// excluded paths are pruned in `filter_entry`, so a pruned directory is
/// never descended into.
pub(super) fn build_walker(root: &Path, config: &DiscoveryConfig) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .follow_links(true);
    debug!(
        "Configuring WalkBuilder for {}: standard filters off, following links.",
        root.display()
    );

    let rules = PruneRules {
        skip_dirs: config.skip_dirs.clone(),
        skip_files: config.skip_files.clone(),
        excludes: config.excludes.clone(),
    };
    walker_builder.filter_entry(move |entry| match rules.prune_reason(entry) {
        Some(reason) => {
            trace!("Pruning {} ({})", entry.path().display(), reason);
            false
        }
        None => true,
    });

    walker_builder.build()
}
