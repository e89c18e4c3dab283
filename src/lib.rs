//! `ccdoc` is a library and command-line tool that assembles a software-copyright
//! source code document (`.docx`) from a project's source files.
//!
//! As a library, it provides a three-stage pipeline:
//! 1.  **Discover**: Walk the source roots and keep the files whose extension
//!     matches, skipping hidden entries, dependency and build directories,
//!     lockfiles, excluded paths and binary files.
//! 2.  **Process**: Decode each file, strip comments in a language-aware way and
//!     drop blank lines.
//! 3.  **Write**: Hand the remaining lines to a [`DocumentSink`], by default the
//!     `.docx` backend [`DocxSink`].
//!
//! # Example: Library Usage
//!
//! ```
//! use ccdoc::{discover, generate, CancellationToken, ConfigBuilder, DocxSink};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! fs::write(temp.path().join("a.py"), "print(1)  # comment\n\n").unwrap();
//! fs::write(temp.path().join("b.txt"), b"\0\x01binary").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .root(temp.path())
//!     .extensions(vec!["py".to_string()])
//!     .output_path(temp.path().join("code.docx"))
//!     .build()
//!     .unwrap();
//! let token = CancellationToken::new();
//!
//! // Stage 1 on its own.
//! let files = discover(&config, &token).unwrap();
//! assert_eq!(files.len(), 1);
//!
//! // The whole pipeline, written into a .docx.
//! let mut sink = DocxSink::new(config.output.style.clone());
//! let summary = generate(&config, &mut sink, &token, None).unwrap();
//! assert_eq!(summary.file_count, 1);
//! assert!(summary.outfile.exists());
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{CandidateFile, GenerateSummary, ParagraphStyle};
pub use errors::{Error, Result};
pub use output::{DocumentSink, DocxSink};

use crate::progress::ProgressReporter;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Discovers the candidate files for a run, in document order.
///
/// Roots are walked in the configured order; a file reachable from several
/// roots appears once. Each file carries the language inferred from its
/// extension.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled during the walk.
pub fn discover(config: &Config, token: &CancellationToken) -> Result<Vec<CandidateFile>> {
    let paths = discovery::collect_files(&config.discovery.roots, &config.discovery, token)?;
    let languages = &config.processing.languages;
    Ok(paths
        .into_iter()
        .map(|path| {
            let language = languages.classify(&path);
            CandidateFile { path, language }
        })
        .collect())
}

/// Lists the distinct extensions found under the configured roots,
/// ignoring the extension filter.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled during the walk.
pub fn scan_extensions(config: &Config, token: &CancellationToken) -> Result<BTreeSet<String>> {
    discovery::collect_extensions(&config.discovery.roots, &config.discovery, token)
}

/// Runs discovery and writes every candidate file into `sink`, then saves it.
///
/// Files are appended in discovery order. Each file's content is decoded and
/// filtered on its own and dropped once handed to the sink. A run with no
/// candidate files still saves a document holding only the header.
///
/// # Errors
/// - `Error::Interrupted` if the token is cancelled; nothing is saved.
/// - `Error::Backend` or `Error::Io` if the sink cannot write the document.
pub fn generate(
    config: &Config,
    sink: &mut dyn DocumentSink,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<GenerateSummary> {
    let files = discover(config, token)?;
    write_document(&files, config, sink, token, progress)
}

/// Writes already-discovered files into `sink` and saves it.
fn write_document(
    files: &[CandidateFile],
    config: &Config,
    sink: &mut dyn DocumentSink,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<GenerateSummary> {
    let output = &config.output;
    sink.begin(&output.title)?;

    if let Some(p) = &progress {
        p.set_length(files.len() as u64);
    }
    for (index, file) in files.iter().enumerate() {
        token.check()?;
        if let Some(p) = &progress {
            p.set_message(file.path.display().to_string());
        }
        let lines = processing::process_file(file, &config.processing);
        sink.append_lines(&file.path, &lines, &output.style)?;
        if let Some(p) = &progress {
            p.set_position(index as u64 + 1);
        }
    }
    token.check()?;

    sink.save(&output.output_path)?;
    if let Some(p) = &progress {
        p.finish();
    }
    info!(
        "Wrote {} source files into {}",
        files.len(),
        output.output_path.display()
    );
    Ok(GenerateSummary {
        file_count: files.len(),
        outfile: output.output_path.clone(),
    })
}

/// Executes the complete pipeline into the configured `.docx` file.
///
/// This mirrors the command-line run: the template (if any) is loaded before
/// any directory is scanned. When nothing matches, a document holding only the
/// header is still written and the summary reports zero files.
///
/// # Errors
/// Any error from [`generate`], or `Error::Backend` for an unreadable template.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<GenerateSummary> {
    let style = config.output.style.clone();
    let mut sink = match &config.output.template_path {
        Some(template) => DocxSink::from_template(template, style)?,
        None => DocxSink::new(style),
    };

    let files = discover(config, token)?;
    if files.is_empty() {
        warn!("No files found matching the specified criteria");
    }
    debug!("Writing {} files", files.len());
    write_document(&files, config, &mut sink, token, progress)
}
