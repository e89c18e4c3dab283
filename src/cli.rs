// src/cli.rs

use crate::constants::{
    DEFAULT_ENCODING, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE, DEFAULT_LINE_SPACING,
    DEFAULT_OUTPUT_FILE, DEFAULT_SPACE_AFTER, DEFAULT_SPACE_BEFORE, DEFAULT_TITLE,
};
use crate::processing::language::Language;
use clap::Parser;

/// Generates a software-copyright source code document (.docx).
///
/// ccdoc walks the source directories, keeps the files whose extensions match,
/// strips comments and blank lines, and writes every remaining line as one
/// paragraph of a Word document whose page header carries the title.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Title written into the page header.
    #[arg(short = 't', long, value_name = "TEXT", default_value = DEFAULT_TITLE)]
    pub title: String,

    // --- Source Options ---
    /// Source directory to scan (repeatable; defaults to the current directory).
    #[arg(short = 'i', long = "indir", value_name = "DIR")]
    pub indirs: Vec<String>,

    /// File extensions to include (case-insensitive; separate with ',' or ';').
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub exts: Vec<String>,

    /// Paths to exclude, files or directories (repeatable; must exist).
    #[arg(long = "exclude", value_name = "PATH", num_args = 1..)]
    pub excludes: Vec<String>,

    /// Also exclude the literal paths listed in .gitignore files under the source directories.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub gitignore: bool,

    /// Text encoding of the sources, or 'auto' to try UTF-8, UTF-16 and GBK in turn.
    #[arg(long, value_name = "LABEL", default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    // --- Line Filtering Options ---
    /// Comment prefix for files of unknown language (repeatable; default: '#' and '//').
    #[arg(short = 'c', long = "comment-char", value_name = "PREFIX", allow_hyphen_values = true)]
    pub comment_chars: Vec<String>,

    /// Add the comment prefixes of these languages (e.g. 'python,lua').
    #[arg(long = "comment-lang", value_name = "LANG", value_delimiter = ',')]
    pub comment_langs: Vec<Language>,

    /// Keep blank lines (default is to drop them).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub keep_blank_lines: bool,

    /// Keep comments (default is to strip them).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub keep_comment_lines: bool,

    // --- Document Style Options ---
    /// Font for the source lines and the header.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FONT_NAME)]
    pub font_name: String,

    /// Font size in points (at least 1.0).
    #[arg(long, value_name = "PT", default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: f64,

    /// Space before each paragraph, in points.
    #[arg(long, value_name = "PT", default_value_t = DEFAULT_SPACE_BEFORE)]
    pub space_before: f64,

    /// Space after each paragraph, in points.
    #[arg(long, value_name = "PT", default_value_t = DEFAULT_SPACE_AFTER)]
    pub space_after: f64,

    /// Exact line height, in points.
    #[arg(long, value_name = "PT", default_value_t = DEFAULT_LINE_SPACING)]
    pub line_spacing: f64,

    // --- Output Options ---
    /// Output document ('.docx' is appended when missing).
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub outfile: String,

    /// Template document whose styles, theme and page setup are reused.
    #[arg(long, value_name = "FILE")]
    pub template: Option<String>,

    // --- Execution Control ---
    /// Print the files that would be written, and their count, without writing anything.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue, conflicts_with = "list_extensions")]
    pub dry_run: bool,

    /// Print every file extension found under the source directories and exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub list_extensions: bool,

    /// Log debug details to stderr.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}
