// src/config/parsing.rs

use crate::constants::AUTO_ENCODING;
use crate::errors::ConfigError;
use crate::processing::content_reader::EncodingChoice;

/// Splits free-form list input into trimmed, non-empty items.
///
/// Items may be separated by commas, semicolons, or newlines, so a value like
/// `"py, js;\nts"` yields `["py", "js", "ts"]`.
pub fn split_items(text: &str) -> Vec<String> {
    text.split(|c| c == ',' || c == ';' || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes extension strings: trims, drops a leading dot, lower-cases,
/// and removes empties and duplicates (first occurrence wins).
pub(super) fn normalize_extensions(exts: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for ext in exts {
        let item = ext.trim();
        let item = item.strip_prefix('.').unwrap_or(item).to_lowercase();
        if !item.is_empty() && !normalized.contains(&item) {
            normalized.push(item);
        }
    }
    normalized
}

/// Drops empty comment prefixes and duplicates, preserving order.
pub(super) fn normalize_prefixes(prefixes: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for prefix in prefixes {
        let item = prefix.trim();
        if !item.is_empty() && !normalized.iter().any(|p| p == item) {
            normalized.push(item.to_string());
        }
    }
    normalized
}

/// Resolves an encoding label (`"auto"` or a WHATWG label such as `"gbk"`).
pub(super) fn parse_encoding(label: &str) -> Result<EncodingChoice, ConfigError> {
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case(AUTO_ENCODING) {
        return Ok(EncodingChoice::Auto);
    }
    // Python-style aliases the WHATWG label table does not know.
    let lookup = match label.to_ascii_lowercase().as_str() {
        "utf-8-sig" | "utf8-sig" | "utf8" => "utf-8".to_string(),
        "utf-16" | "utf16" => "utf-16le".to_string(),
        "cp936" => "gbk".to_string(),
        other => other.to_string(),
    };
    encoding_rs::Encoding::for_label(lookup.as_bytes())
        .map(EncodingChoice::Named)
        .ok_or_else(|| ConfigError::UnknownEncoding(label.to_string()))
}
