//! Handles the processing stage of the `ccdoc` pipeline.
//!
//! This module is responsible for decoding file contents, classifying the
//! source language, and filtering the lines that end up in the document.

use crate::config::ProcessingConfig;
use crate::core_types::CandidateFile;
use log::debug;

pub mod content_reader;
pub mod filters;
pub mod language;

pub use content_reader::{decode_bytes, decode_file, EncodingChoice};
pub use filters::{filter_lines, LineFilterOptions};
pub use language::{Language, LanguageTable};

/// Decodes one candidate file and returns the lines to write for it.
///
/// A file whose language is unknown falls back to the configured comment
/// prefixes. Read failures yield no lines.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use ccdoc::{Config, CandidateFile};
/// # use ccdoc::processing::{process_file, Language};
/// # fn main() -> std::io::Result<()> {
/// let temp = tempfile::tempdir()?;
/// let path = temp.path().join("a.py");
/// fs::write(&path, "print(1)  # comment\n\n")?;
///
/// let file = CandidateFile { path, language: Some(Language::Python) };
/// let config = Config::new_for_test();
/// assert_eq!(process_file(&file, &config.processing), vec!["print(1)"]);
/// # Ok(())
/// # }
/// ```
pub fn process_file(file: &CandidateFile, config: &ProcessingConfig) -> Vec<String> {
    let content = decode_file(&file.path, config.encoding);
    let strategy = file
        .language
        .and_then(|language| config.languages.strategy(language));
    let options = LineFilterOptions {
        skip_blank: config.skip_blank_lines,
        skip_comment: config.skip_comment_lines,
        fallback_prefixes: config.comment_prefixes.clone(),
    };
    let lines = filter_lines(&content, strategy, &options);
    debug!(
        "Processed {} ({}): {} lines kept",
        file.path.display(),
        file.language.map_or("unknown", |l| l.tag()),
        lines.len()
    );
    lines
}
