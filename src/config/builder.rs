// src/config/builder.rs

use super::{
    parsing::{normalize_extensions, normalize_prefixes, parse_encoding, split_items},
    path_resolve::{absolutize, normalize_path_bufs},
    validation::{validate_output, validate_paths, validate_style},
    Config, DiscoveryConfig, OutputConfig, ProcessingConfig,
};
use crate::cli::Cli;
use crate::constants::{
    DEFAULT_COMMENT_PREFIXES, DEFAULT_ENCODING, DEFAULT_EXTENSION, DEFAULT_OUTPUT_FILE,
    DEFAULT_ROOT, DEFAULT_TITLE, DOCUMENT_EXTENSION,
};
use crate::core_types::ParagraphStyle;
use crate::discovery::read_gitignore_excludes;
use crate::errors::Result;
use crate::filtering::{default_skip_dirs, default_skip_files, ExclusionSet};
use crate::processing::language::{Language, LanguageTable};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

/// A builder for creating a validated [`Config`].
///
/// Every setter is optional; unset values fall back to the defaults of the
/// command-line tool (current directory, `py` files, `#` and `//` comment
/// prefixes, `code.docx`).
///
/// # Examples
///
/// ```
/// use ccdoc::ConfigBuilder;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// let out = temp.path().join("out.docx");
///
/// let config = ConfigBuilder::new()
///     .root(temp.path())
///     .extensions(vec![".RS".to_string()])
///     .output_path(&out)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.discovery.extensions, vec!["rs".to_string()]);
/// // The output document is always excluded from discovery.
/// assert!(config.discovery.excludes.covers(&config.output.output_path));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    title: Option<String>,
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
    comment_prefixes: Vec<String>,
    comment_languages: Vec<Language>,
    excludes: Vec<PathBuf>,
    use_gitignore_excludes: bool,
    skip_dirs: Option<Vec<String>>,
    skip_files: Option<Vec<String>>,
    style: ParagraphStyle,
    output_path: Option<PathBuf>,
    template_path: Option<PathBuf>,
    encoding: Option<String>,
    skip_blank_lines: Option<bool>,
    skip_comment_lines: Option<bool>,
    languages: Option<Arc<LanguageTable>>,
}

impl ConfigBuilder {
    /// Creates a new builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    ///
    /// Extension and comment-prefix values may hold several items separated by
    /// `,`, `;` or newlines. A missing `.docx` suffix on the output file is
    /// appended here.
    pub fn from_cli(cli: Cli) -> Self {
        let mut builder = Self::new()
            .title(cli.title)
            .roots(cli.indirs)
            .extensions(cli.exts.iter().flat_map(|e| split_items(e)).collect())
            .comment_prefixes(cli.comment_chars.iter().flat_map(|c| split_items(c)).collect())
            .comment_languages(cli.comment_langs)
            .excludes(cli.excludes)
            .gitignore_excludes(cli.gitignore)
            .style(ParagraphStyle {
                font_name: cli.font_name,
                font_size: cli.font_size,
                space_before: cli.space_before,
                space_after: cli.space_after,
                line_spacing: cli.line_spacing,
            })
            .output_path(ensure_document_extension(cli.outfile))
            .encoding(cli.encoding)
            .skip_blank_lines(!cli.keep_blank_lines)
            .skip_comment_lines(!cli.keep_comment_lines);
        if let Some(template) = cli.template {
            builder = builder.template_path(template);
        }
        builder
    }

    /// Sets the page header title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds one root directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Adds several root directories, in emission order.
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// Sets the extension filter (leading dots and case are normalized).
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets the fallback comment prefixes used for unknown languages.
    pub fn comment_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.comment_prefixes = prefixes;
        self
    }

    /// Adds the comment prefixes of these languages to the fallback prefixes.
    pub fn comment_languages(mut self, languages: Vec<Language>) -> Self {
        self.comment_languages = languages;
        self
    }

    /// Adds paths to exclude (files or directories; must exist).
    pub fn excludes<I, P>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.excludes.extend(excludes.into_iter().map(Into::into));
        self
    }

    /// Merges literal exclusions found in `.gitignore` files under the roots.
    pub fn gitignore_excludes(mut self, enabled: bool) -> Self {
        self.use_gitignore_excludes = enabled;
        self
    }

    /// Replaces the built-in directory skip-set.
    pub fn skip_dirs(mut self, names: Vec<String>) -> Self {
        self.skip_dirs = Some(names);
        self
    }

    /// Replaces the built-in file skip-set.
    pub fn skip_files(mut self, names: Vec<String>) -> Self {
        self.skip_files = Some(names);
        self
    }

    /// Sets the paragraph style.
    pub fn style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the output document path.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets the template document.
    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Sets the encoding label (`"auto"` selects the fallback chain).
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Whether blank lines are dropped (default `true`).
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = Some(skip);
        self
    }

    /// Whether comments are stripped (default `true`).
    pub fn skip_comment_lines(mut self, skip: bool) -> Self {
        self.skip_comment_lines = Some(skip);
        self
    }

    /// Uses an alternate language table instead of the built-in one.
    pub fn languages(mut self, table: Arc<LanguageTable>) -> Self {
        self.languages = Some(table);
        self
    }

    /// Validates the options and builds the final `Config`.
    ///
    /// Every input check runs before any directory is read, so a failure here
    /// never leaves a partial run behind.
    ///
    /// # Errors
    /// Returns `Error::Config` naming the first offending path or option.
    pub fn build(self) -> Result<Config> {
        let roots = if self.roots.is_empty() {
            normalize_path_bufs(&[PathBuf::from(DEFAULT_ROOT)])
        } else {
            normalize_path_bufs(&self.roots)
        };
        let user_excludes = normalize_path_bufs(&self.excludes);
        let output_path = absolutize(
            &self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        );
        let template_path = self.template_path.map(|p| absolutize(&p));

        validate_paths(&roots, &user_excludes, template_path.as_deref())?;
        validate_output(&output_path)?;
        validate_style(&self.style)?;
        let encoding = parse_encoding(self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING))?;

        let mut exclude_paths = user_excludes;
        if self.use_gitignore_excludes {
            let mined = read_gitignore_excludes(&roots);
            debug!("Merged {} exclusions from .gitignore files.", mined.len());
            exclude_paths.extend(mined);
        }
        // A document must never include its own previous output.
        exclude_paths.push(output_path.clone());
        let excludes = ExclusionSet::new(normalize_path_bufs(&exclude_paths));

        let mut extensions = normalize_extensions(&self.extensions);
        if extensions.is_empty() {
            extensions.push(DEFAULT_EXTENSION.to_string());
        }

        let mut prefixes = self.comment_prefixes;
        for language in &self.comment_languages {
            prefixes.extend(language.comment_prefixes().iter().map(|p| p.to_string()));
        }
        let mut comment_prefixes = normalize_prefixes(&prefixes);
        if comment_prefixes.is_empty() {
            comment_prefixes = DEFAULT_COMMENT_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect();
        }

        let lowercase = |names: Vec<String>| -> Vec<String> {
            names.into_iter().map(|n| n.to_lowercase()).collect()
        };
        let discovery = DiscoveryConfig {
            roots,
            extensions,
            excludes,
            skip_dirs: self.skip_dirs.map(lowercase).unwrap_or_else(default_skip_dirs),
            skip_files: self.skip_files.map(lowercase).unwrap_or_else(default_skip_files),
        };

        let config = Config {
            discovery,
            processing: ProcessingConfig {
                skip_blank_lines: self.skip_blank_lines.unwrap_or(true),
                skip_comment_lines: self.skip_comment_lines.unwrap_or(true),
                comment_prefixes,
                encoding,
                languages: self.languages.unwrap_or_else(LanguageTable::shared),
            },
            output: OutputConfig {
                title: self
                    .title
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                style: self.style,
                output_path,
                template_path,
            },
        };
        debug!("Configuration built: {:?}", config);
        Ok(config)
    }
}

/// Appends the document extension when the path does not already carry it.
pub(crate) fn ensure_document_extension(path: String) -> PathBuf {
    let suffix = format!(".{}", DOCUMENT_EXTENSION);
    if path.to_lowercase().ends_with(&suffix) {
        PathBuf::from(path)
    } else {
        PathBuf::from(path + &suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConfigError, Error};
    use crate::processing::content_reader::EncodingChoice;
    use std::fs;
    use tempfile::tempdir;

    fn builder_in(dir: &std::path::Path) -> ConfigBuilder {
        ConfigBuilder::new()
            .root(dir)
            .output_path(dir.join("out.docx"))
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = builder_in(temp.path()).build()?;
        assert_eq!(config.discovery.extensions, vec!["py".to_string()]);
        assert_eq!(
            config.processing.comment_prefixes,
            vec!["#".to_string(), "//".to_string()]
        );
        assert!(config.processing.skip_blank_lines);
        assert!(config.processing.skip_comment_lines);
        assert_eq!(config.output.title, DEFAULT_TITLE);
        assert!(matches!(config.processing.encoding, EncodingChoice::Named(_)));
        assert!(config.discovery.skip_dirs.contains(&"node_modules".to_string()));
        Ok(())
    }

    #[test]
    fn test_missing_root_is_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let missing = temp.path().join("nope");
        let result = ConfigBuilder::new()
            .root(&missing)
            .output_path(temp.path().join("out.docx"))
            .build();
        match result {
            Err(Error::Config(ConfigError::MissingRoot(path))) => assert_eq!(path, missing),
            other => panic!("Expected MissingRoot, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_missing_exclude_is_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = builder_in(temp.path())
            .excludes([temp.path().join("ghost")])
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingExclude(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_missing_template_is_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = builder_in(temp.path())
            .template_path(temp.path().join("template.docx"))
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingTemplate(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_output_dir_must_exist() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = ConfigBuilder::new()
            .root(temp.path())
            .output_path(temp.path().join("missing_dir").join("out.docx"))
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidOutputDir(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_output_must_be_docx() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = ConfigBuilder::new()
            .root(temp.path())
            .output_path(temp.path().join("out.txt"))
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidOutputExtension { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_font_size_lower_bound() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = builder_in(temp.path())
            .style(ParagraphStyle {
                font_size: 0.5,
                ..ParagraphStyle::default()
            })
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_output_path_is_excluded() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = builder_in(temp.path()).build()?;
        assert!(config
            .discovery
            .excludes
            .covers(&temp.path().join("out.docx")));
        Ok(())
    }

    #[test]
    fn test_comment_languages_extend_prefixes() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = builder_in(temp.path())
            .comment_prefixes(vec![";".to_string()])
            .comment_languages(vec![Language::Sql])
            .build()?;
        assert_eq!(
            config.processing.comment_prefixes,
            vec![
                ";".to_string(),
                "--".to_string(),
                "/*".to_string(),
                "*/".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_gitignore_excludes_are_merged() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("build"))?;
        fs::write(temp.path().join(".gitignore"), "build/\n")?;
        let config = builder_in(temp.path()).gitignore_excludes(true).build()?;
        assert!(config
            .discovery
            .excludes
            .covers(&temp.path().join("build").join("x.py")));
        Ok(())
    }

    #[test]
    fn test_unknown_encoding_is_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = builder_in(temp.path()).encoding("not-an-encoding").build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::UnknownEncoding(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_ensure_document_extension() {
        assert_eq!(
            ensure_document_extension("code".to_string()),
            PathBuf::from("code.docx")
        );
        assert_eq!(
            ensure_document_extension("CODE.DOCX".to_string()),
            PathBuf::from("CODE.DOCX")
        );
    }
}
