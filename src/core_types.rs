//! Defines core data structures used throughout the application pipeline.
//!
//! `CandidateFile` is produced by discovery and consumed by processing;
//! `ParagraphStyle` travels with every batch of lines handed to a
//! [`DocumentSink`](crate::output::DocumentSink); `GenerateSummary` is the
//! result of a complete run.

use crate::constants::{
    DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE, DEFAULT_LINE_SPACING, DEFAULT_SPACE_AFTER,
    DEFAULT_SPACE_BEFORE,
};
use crate::processing::language::Language;
use std::path::PathBuf;

/// A file that survived every discovery filter.
///
/// # Examples
///
/// ```
/// use ccdoc::core_types::CandidateFile;
/// use ccdoc::processing::language::Language;
/// use std::path::PathBuf;
///
/// let file = CandidateFile {
///     path: PathBuf::from("/project/src/main.py"),
///     language: Some(Language::Python),
/// };
///
/// assert_eq!(file.language.map(|l| l.tag()), Some("python"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// The absolute, normalized path to the file.
    pub path: PathBuf,
    /// The language inferred from the extension, `None` when unrecognized.
    pub language: Option<Language>,
}

/// Paragraph formatting applied to every emitted source line.
///
/// All measurements are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub font_name: String,
    pub font_size: f64,
    pub space_before: f64,
    pub space_after: f64,
    /// Exact line height.
    pub line_spacing: f64,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            space_before: DEFAULT_SPACE_BEFORE,
            space_after: DEFAULT_SPACE_AFTER,
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }
}

/// The outcome of a successful `generate` run.
///
/// # Examples
///
/// ```
/// use ccdoc::core_types::GenerateSummary;
/// use std::path::PathBuf;
///
/// let summary = GenerateSummary {
///     file_count: 3,
///     outfile: PathBuf::from("code.docx"),
/// };
/// assert_eq!(summary.file_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of source files written into the document.
    pub file_count: usize,
    /// The document that was written.
    pub outfile: PathBuf,
}
