//! The `ccdoc` prelude for convenient library usage.
//!
//! Re-exports the types and functions most programs need to drive the
//! pipeline or plug in their own [`DocumentSink`].
//!
//! # Example
//!
//! ```
//! use ccdoc::prelude::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//!
//! let config = ConfigBuilder::new()
//!     .root(temp.path())
//!     .output_path(temp.path().join("code.docx"))
//!     .build()?;
//! let token = CancellationToken::new();
//! let files = discover(&config, &token)?;
//! assert!(files.is_empty());
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{CandidateFile, GenerateSummary, ParagraphStyle};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::filtering::{is_binary, passes_extension_filter, ExclusionSet};
pub use crate::output::{DocumentSink, DocxSink};
pub use crate::processing::filters::{filter_lines, strip_comments, CommentStrategy, LineFilterOptions};
pub use crate::processing::{decode_bytes, EncodingChoice, Language, LanguageTable};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::{discover, generate, run, scan_extensions};
