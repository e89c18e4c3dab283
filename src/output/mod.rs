// src/output/mod.rs

use crate::core_types::ParagraphStyle;
use crate::errors::Result;
use std::path::Path;

mod docx;
pub mod dry_run;
mod xml;

pub use docx::DocxSink;

/// Destination for the filtered lines of every source file.
///
/// A run calls `begin` once, `append_lines` once per file in discovery order
/// (lines already filtered and right-trimmed), and `save` once at the end.
/// Nothing is written to disk before `save`.
pub trait DocumentSink {
    /// Starts a new document with `title` in its page header.
    fn begin(&mut self, title: &str) -> Result<()>;

    /// Appends one paragraph per line, formatted with `style`.
    fn append_lines(
        &mut self,
        source_path: &Path,
        lines: &[String],
        style: &ParagraphStyle,
    ) -> Result<()>;

    /// Writes the finished document to `output_path`.
    fn save(&mut self, output_path: &Path) -> Result<()>;
}
