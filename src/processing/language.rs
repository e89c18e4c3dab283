// src/processing/language.rs

//! Maps file extensions to languages and languages to comment strategies.

use super::filters::fragments::*;
use super::filters::CommentStrategy;
use crate::filtering::file_extension;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// A source language known to the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Go,
    Php,
    CSharp,
    Kotlin,
    Swift,
    Rust,
    Dart,
    Scala,
    Sql,
    R,
    Lua,
    PowerShell,
    Yaml,
    Java,
    C,
    Cpp,
    Html,
    Xml,
    Css,
    Shell,
    Ruby,
    Perl,
    Json,
    Markdown,
    Toml,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::Php,
        Language::CSharp,
        Language::Kotlin,
        Language::Swift,
        Language::Rust,
        Language::Dart,
        Language::Scala,
        Language::Sql,
        Language::R,
        Language::Lua,
        Language::PowerShell,
        Language::Yaml,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::Html,
        Language::Xml,
        Language::Css,
        Language::Shell,
        Language::Ruby,
        Language::Perl,
        Language::Json,
        Language::Markdown,
        Language::Toml,
    ];

    /// The lower-case tag used on the command line and in logs.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Php => "php",
            Language::CSharp => "csharp",
            Language::Kotlin => "kotlin",
            Language::Swift => "swift",
            Language::Rust => "rust",
            Language::Dart => "dart",
            Language::Scala => "scala",
            Language::Sql => "sql",
            Language::R => "r",
            Language::Lua => "lua",
            Language::PowerShell => "powershell",
            Language::Yaml => "yaml",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Css => "css",
            Language::Shell => "shellscript",
            Language::Ruby => "ruby",
            Language::Perl => "perl",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Toml => "toml",
        }
    }

    /// Line prefixes that mark a comment line in this language.
    ///
    /// Used as fallback prefixes for files whose extension is not classified.
    pub fn comment_prefixes(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["#", "\"\"\"", "'''"],
            Language::JavaScript
            | Language::TypeScript
            | Language::Go
            | Language::CSharp
            | Language::Kotlin
            | Language::Swift
            | Language::Rust
            | Language::Dart
            | Language::Scala
            | Language::Java
            | Language::C
            | Language::Cpp => &["//", "/*", "*/"],
            Language::Php => &["//", "#", "/*", "*/"],
            Language::Sql => &["--", "/*", "*/"],
            Language::R | Language::Yaml | Language::Shell | Language::Toml => &["#"],
            Language::Lua => &["--", "--[[", "]]"],
            Language::PowerShell => &["#", "<#", "#>"],
            Language::Html | Language::Xml | Language::Markdown => &["<!--", "-->"],
            Language::Css => &["/*", "*/"],
            Language::Ruby | Language::Perl => &["#", "=begin", "=end"],
            Language::Json => &[],
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyw", "pyi"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "tsx", "mts", "cts"],
            Language::Go => &["go"],
            Language::Php => &["php"],
            Language::CSharp => &["cs"],
            Language::Kotlin => &["kt", "kts"],
            Language::Swift => &["swift"],
            Language::Rust => &["rs"],
            Language::Dart => &["dart"],
            Language::Scala => &["scala", "sc"],
            Language::Sql => &["sql"],
            Language::R => &["r"],
            Language::Lua => &["lua"],
            Language::PowerShell => &["ps1", "psm1", "psd1"],
            Language::Yaml => &["yaml", "yml"],
            Language::Java => &["java"],
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
            Language::Html => &["html", "htm", "vue"],
            Language::Xml => &["xml", "xsd", "xsl", "svg"],
            Language::Css => &["css", "scss", "less"],
            Language::Shell => &["sh", "bash", "zsh"],
            Language::Ruby => &["rb"],
            Language::Perl => &["pl", "pm"],
            Language::Json => &["json"],
            Language::Markdown => &["md", "markdown"],
            Language::Toml => &["toml"],
        }
    }

    fn builtin_strategy(self) -> Result<CommentStrategy, regex::Error> {
        let c_comments: &[&str] = &[SLASH_LINE, C_BLOCK];
        match self {
            Language::Python => CommentStrategy::python(),
            Language::JavaScript | Language::TypeScript => CommentStrategy::tokenized(
                &[DOUBLE_QUOTED, SINGLE_QUOTED, BACKTICK],
                c_comments,
            ),
            Language::Go => {
                CommentStrategy::tokenized(&[DOUBLE_QUOTED, CHAR_LITERAL, BACKTICK], c_comments)
            }
            Language::Rust => CommentStrategy::tokenized(
                &[RUST_RAW_STRING, DOUBLE_QUOTED, CHAR_LITERAL],
                c_comments,
            ),
            Language::CSharp => CommentStrategy::tokenized(
                &[CSHARP_VERBATIM, DOUBLE_QUOTED, CHAR_LITERAL],
                c_comments,
            ),
            Language::C | Language::Cpp => CommentStrategy::tokenized(
                &[CPP_RAW_STRING, DOUBLE_QUOTED, CHAR_LITERAL],
                c_comments,
            ),
            Language::Java | Language::Kotlin | Language::Scala | Language::Swift => {
                CommentStrategy::tokenized(
                    &[TRIPLE_QUOTED, DOUBLE_QUOTED, CHAR_LITERAL],
                    c_comments,
                )
            }
            Language::Dart => CommentStrategy::tokenized(
                &[TRIPLE_QUOTED, DOUBLE_QUOTED, SINGLE_QUOTED],
                c_comments,
            ),
            Language::Php => CommentStrategy::tokenized(
                &[DOUBLE_QUOTED, SINGLE_QUOTED, PHP_ATTRIBUTE_OPEN],
                &[SLASH_LINE, C_BLOCK, HASH_LINE],
            ),
            Language::Sql => {
                CommentStrategy::tokenized(&[SINGLE_QUOTED, DOUBLE_QUOTED], &[DASH_LINE, C_BLOCK])
            }
            Language::R => {
                CommentStrategy::tokenized(&[DOUBLE_QUOTED, SINGLE_QUOTED], &[HASH_LINE])
            }
            Language::Toml => CommentStrategy::tokenized(
                &[TRIPLE_QUOTED, DOUBLE_QUOTED, SINGLE_QUOTED],
                &[HASH_LINE],
            ),
            Language::Lua => CommentStrategy::tokenized(
                &[LUA_LONG_STRING, DOUBLE_QUOTED, SINGLE_QUOTED],
                &[LUA_BLOCK, DASH_LINE],
            ),
            Language::PowerShell => CommentStrategy::tokenized(
                &[DOUBLE_QUOTED, SINGLE_QUOTED],
                &[POWERSHELL_BLOCK, HASH_LINE],
            ),
            Language::Yaml => CommentStrategy::tokenized(
                &[DOUBLE_QUOTED, SINGLE_QUOTED],
                &[HASH_AFTER_BLANK],
            ),
            Language::Shell => CommentStrategy::tokenized(
                &[DOUBLE_QUOTED, SINGLE_QUOTED, SHELL_HASH_VARIABLE],
                &[HASH_AFTER_BLANK],
            ),
            Language::Ruby => CommentStrategy::tokenized(
                &[DOUBLE_QUOTED, SINGLE_QUOTED],
                &[RUBY_BLOCK, HASH_LINE],
            ),
            Language::Perl => CommentStrategy::tokenized(
                &[DOUBLE_QUOTED, SINGLE_QUOTED, PERL_HASH_VARIABLE],
                &[PERL_POD, HASH_LINE],
            ),
            Language::Html | Language::Xml | Language::Markdown => {
                CommentStrategy::block_only(&[MARKUP_BLOCK])
            }
            Language::Css => CommentStrategy::block_only(&[C_BLOCK]),
            Language::Json => Ok(CommentStrategy::None),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Parses a tag (case-insensitive) or a common alias such as `js`, `c#`, `sh`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let alias = match wanted.as_str() {
            "py" => Some(Language::Python),
            "js" => Some(Language::JavaScript),
            "ts" => Some(Language::TypeScript),
            "golang" => Some(Language::Go),
            "cs" | "c#" => Some(Language::CSharp),
            "kt" => Some(Language::Kotlin),
            "rs" => Some(Language::Rust),
            "ps1" | "pwsh" => Some(Language::PowerShell),
            "yml" => Some(Language::Yaml),
            "c++" | "cxx" => Some(Language::Cpp),
            "sh" | "bash" | "shell" => Some(Language::Shell),
            "rb" => Some(Language::Ruby),
            "md" => Some(Language::Markdown),
            _ => None,
        };
        alias
            .or_else(|| Language::ALL.iter().copied().find(|l| l.tag() == wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Language::ALL.iter().map(|l| l.tag()).collect();
                format!("unknown language '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

static BUILTIN_TABLE: Lazy<Arc<LanguageTable>> = Lazy::new(|| Arc::new(LanguageTable::builtin()));

/// An immutable extension → language → comment strategy table.
///
/// The built-in table is built once and shared through [`LanguageTable::shared`];
/// alternative tables can be assembled with [`LanguageTable::empty`] and
/// [`LanguageTable::with_language`].
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    by_extension: HashMap<String, Language>,
    strategies: HashMap<Language, CommentStrategy>,
}

impl LanguageTable {
    /// A table with no languages; every file is unclassified.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the table of every built-in language.
    pub fn builtin() -> Self {
        Language::ALL
            .iter()
            .fold(Self::empty(), |table, &language| {
                // The built-in patterns are constants covered by unit tests.
                let strategy = language
                    .builtin_strategy()
                    .expect("built-in comment pattern is valid");
                table.with_language(language, language.extensions(), strategy)
            })
    }

    /// The process-wide built-in table.
    pub fn shared() -> Arc<LanguageTable> {
        Arc::clone(&BUILTIN_TABLE)
    }

    /// Registers `language` for `extensions` with the given strategy.
    ///
    /// Extensions are matched case-insensitively and may carry a leading dot.
    pub fn with_language(
        mut self,
        language: Language,
        extensions: &[&str],
        strategy: CommentStrategy,
    ) -> Self {
        for ext in extensions {
            let ext = ext.trim_start_matches('.').to_lowercase();
            self.by_extension.insert(ext, language);
        }
        self.strategies.insert(language, strategy);
        self
    }

    /// Infers the language from the text after the final dot of the file name.
    pub fn classify(&self, path: &Path) -> Option<Language> {
        file_extension(path).and_then(|ext| self.by_extension.get(&ext).copied())
    }

    /// The comment strategy registered for `language`.
    pub fn strategy(&self, language: Language) -> Option<&CommentStrategy> {
        self.strategies.get(&language)
    }
}
