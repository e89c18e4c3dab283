//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI
//! (or set programmatically through [`ConfigBuilder`]), making them available to
//! the rest of the application in a structured and type-safe manner. A `Config`
//! only exists once validation has passed: roots and excludes are normalized and
//! exist, the output location is usable, and the style values are in range.

use crate::constants::DEFAULT_COMMENT_PREFIXES;
use crate::core_types::ParagraphStyle;
use crate::filtering::{default_skip_dirs, default_skip_files, ExclusionSet};
use crate::processing::content_reader::EncodingChoice;
use crate::processing::language::LanguageTable;
use std::path::PathBuf;
use std::sync::Arc;

pub use builder::ConfigBuilder;
mod builder;
pub(crate) mod parsing;
pub mod path_resolve;
mod validation;

pub use parsing::split_items;

/// Configuration options related to file discovery and filtering.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Normalized, existing root directories, in emission order.
    pub roots: Vec<PathBuf>,
    /// Lower-case extensions without a leading dot. Never empty after `build()`.
    pub extensions: Vec<String>,
    /// Paths (and everything beneath them) that are never returned.
    pub excludes: ExclusionSet,
    /// Directory names (lower-case) that are never descended into.
    pub skip_dirs: Vec<String>,
    /// File names (lower-case) that are never returned.
    pub skip_files: Vec<String>,
}

/// Configuration options related to processing file content.
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Drop lines that are empty after trimming.
    pub skip_blank_lines: bool,
    /// Strip comments (language-aware, or by prefix for unknown languages).
    pub skip_comment_lines: bool,
    /// Line prefixes treated as comments when a file's language is unknown.
    pub comment_prefixes: Vec<String>,
    /// How file bytes are decoded into text.
    pub encoding: EncodingChoice,
    /// Extension → language → comment strategy table.
    pub languages: Arc<LanguageTable>,
}

/// Configuration options related to the generated document.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Text written into the page header.
    pub title: String,
    /// Paragraph style applied to every source line.
    pub style: ParagraphStyle,
    /// Absolute path of the document to write.
    pub output_path: PathBuf,
    /// Optional template document whose styles are carried over.
    pub template_path: Option<PathBuf>,
}

/// The complete, validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for the processing stage.
    pub processing: ProcessingConfig,
    /// Configuration for the output stage.
    pub output: OutputConfig,
}

impl DiscoveryConfig {
    /// Discovery settings with the built-in skip sets and no excludes.
    pub fn new(roots: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            roots,
            extensions,
            excludes: ExclusionSet::default(),
            skip_dirs: default_skip_dirs(),
            skip_files: default_skip_files(),
        }
    }
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// No validation is performed; roots are empty and the output path is
    /// `code.docx` in the current directory.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            discovery: DiscoveryConfig::new(Vec::new(), vec!["py".to_string()]),
            processing: ProcessingConfig {
                skip_blank_lines: true,
                skip_comment_lines: true,
                comment_prefixes: DEFAULT_COMMENT_PREFIXES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                encoding: EncodingChoice::Named(encoding_rs::UTF_8),
                languages: LanguageTable::shared(),
            },
            output: OutputConfig {
                title: crate::constants::DEFAULT_TITLE.to_string(),
                style: ParagraphStyle::default(),
                output_path: PathBuf::from(crate::constants::DEFAULT_OUTPUT_FILE),
                template_path: None,
            },
        }
    }
}
