// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage to determine which files
//! become candidates. They are exposed publicly to allow for their use in
//! other contexts.

mod binary;
mod exclusion;
mod extension;
mod skip_names;

pub use binary::{is_binary, is_binary_buffer};
pub use exclusion::ExclusionSet;
pub use extension::{file_extension, passes_extension_filter};
pub(crate) use skip_names::name_in_set;
pub use skip_names::{default_skip_dirs, default_skip_files};
