// src/constants.rs

/// Default page header title.
pub const DEFAULT_TITLE: &str = "软件著作权程序鉴别材料生成器V1.0";

/// Root directory used when none is given.
pub const DEFAULT_ROOT: &str = ".";

/// Extension used when the extension filter is empty.
pub const DEFAULT_EXTENSION: &str = "py";

/// Line prefixes treated as comments when a file's language is unknown.
pub const DEFAULT_COMMENT_PREFIXES: &[&str] = &["#", "//"];

/// Default output document.
pub const DEFAULT_OUTPUT_FILE: &str = "code.docx";

/// Extension every output document must carry.
pub const DOCUMENT_EXTENSION: &str = "docx";

/// Default encoding label.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Encoding label that selects the fallback decoding chain.
pub const AUTO_ENCODING: &str = "auto";

/// Entries whose name starts with this character are hidden.
pub const HIDDEN_MARKER: char = '.';

/// Number of leading bytes inspected when deciding whether a file is binary.
pub const SNIFF_BUFFER_SIZE: usize = 2048;

// Paragraph style defaults, in points.
pub const DEFAULT_FONT_NAME: &str = "宋体";
pub const DEFAULT_FONT_SIZE: f64 = 10.5;
pub const DEFAULT_SPACE_BEFORE: f64 = 0.0;
pub const DEFAULT_SPACE_AFTER: f64 = 2.3;
pub const DEFAULT_LINE_SPACING: f64 = 10.5;
