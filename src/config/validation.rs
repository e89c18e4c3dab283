// src/config/validation.rs

use crate::constants::DOCUMENT_EXTENSION;
use crate::core_types::ParagraphStyle;
use crate::errors::ConfigError;
use std::path::{Path, PathBuf};

/// Checks that every root is a directory, every exclude exists, and the
/// template (if any) is a file.
pub(super) fn validate_paths(
    roots: &[PathBuf],
    excludes: &[PathBuf],
    template: Option<&Path>,
) -> Result<(), ConfigError> {
    if let Some(root) = roots.iter().find(|r| !r.is_dir()) {
        return Err(ConfigError::MissingRoot(root.clone()));
    }
    if let Some(exclude) = excludes.iter().find(|e| !e.exists()) {
        return Err(ConfigError::MissingExclude(exclude.clone()));
    }
    if let Some(template) = template {
        if !template.is_file() {
            return Err(ConfigError::MissingTemplate(template.to_path_buf()));
        }
    }
    Ok(())
}

/// Checks the output document's extension and that its directory exists.
pub(super) fn validate_output(output: &Path) -> Result<(), ConfigError> {
    let has_extension = output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
    if !has_extension {
        return Err(ConfigError::InvalidOutputExtension {
            path: output.to_path_buf(),
            extension: DOCUMENT_EXTENSION.to_string(),
        });
    }
    match output.parent() {
        Some(parent) if parent.is_dir() => Ok(()),
        Some(parent) => Err(ConfigError::InvalidOutputDir(parent.to_path_buf())),
        None => Err(ConfigError::InvalidOutputDir(output.to_path_buf())),
    }
}

/// Checks the numeric style values: all finite and non-negative, font size at least 1pt.
pub(super) fn validate_style(style: &ParagraphStyle) -> Result<(), ConfigError> {
    let checks = [
        ("--font-size", style.font_size, 1.0),
        ("--space-before", style.space_before, 0.0),
        ("--space-after", style.space_after, 0.0),
        ("--line-spacing", style.line_spacing, 0.0),
    ];
    for (option, value, min) in checks {
        if !value.is_finite() || value < min {
            return Err(ConfigError::InvalidValue {
                option: option.to_string(),
                reason: format!("must be a number >= {}, got {}", min, value),
            });
        }
    }
    if style.font_name.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "--font-name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
