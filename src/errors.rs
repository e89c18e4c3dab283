//! Defines application-specific error types.
//!
//! `Error` is the top-level type returned by the library API. Input problems are
//! reported through `ConfigError` before any file is scanned; per-file problems
//! never surface here (they are logged and the file is skipped or decoded lossily).

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the `ccdoc` library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level errors produced by `ccdoc`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid invocation parameters, detected before scanning starts.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The document backend could not produce the output document.
    #[error("Document backend error: {0}")]
    Backend(String),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Validation failures for invocation parameters.
///
/// Each variant names the single offending path or option so the caller can
/// present it directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Source directory does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Exclude path does not exist: {}", .0.display())]
    MissingExclude(PathBuf),

    #[error("Template file does not exist: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("Output directory does not exist: {}", .0.display())]
    InvalidOutputDir(PathBuf),

    #[error("Output file must end with '.{extension}': {}", .path.display())]
    InvalidOutputExtension { path: PathBuf, extension: String },

    #[error("Invalid value for '{option}': {reason}")]
    InvalidValue { option: String, reason: String },

    #[error("Unknown encoding: '{0}'")]
    UnknownEncoding(String),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Backend(err.to_string())
    }
}
