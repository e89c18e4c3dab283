// src/filtering/extension.rs

use std::path::Path;

/// Returns the lower-cased text after the final dot of the file name, if any.
///
/// Dot-files such as `.bashrc` have no extension.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Checks if a path's extension is in the (lower-case) extension filter.
///
/// The comparison is case-insensitive and exact on the suffix after the final
/// dot: `happy` does not match filter `py`, and `a.tar.gz` matches `gz` only.
///
/// # Examples
///
/// ```
/// use ccdoc::filtering::passes_extension_filter;
/// use std::path::Path;
///
/// let exts = vec!["py".to_string()];
/// assert!(passes_extension_filter(Path::new("src/A.PY"), &exts));
/// assert!(!passes_extension_filter(Path::new("src/happy"), &exts));
/// assert!(!passes_extension_filter(Path::new("src/a.pyc"), &exts));
/// ```
pub fn passes_extension_filter(path: &Path, extensions: &[String]) -> bool {
    match file_extension(path) {
        Some(ext) => extensions.iter().any(|allowed| *allowed == ext),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_lowercase()).collect()
    }

    #[test]
    fn test_ext_include() {
        let filter = exts(&["txt", "md"]);
        assert!(passes_extension_filter(Path::new("file.txt"), &filter));
        assert!(passes_extension_filter(Path::new("FILE.MD"), &filter)); // Case insensitive
        assert!(!passes_extension_filter(Path::new("file.rs"), &filter));
        assert!(!passes_extension_filter(Path::new("file"), &filter)); // No extension fails include
    }

    #[test]
    fn test_uppercase_filter_normalized_by_caller() {
        // Filters arrive lower-cased from the config layer.
        let filter = exts(&["PY"]);
        assert!(passes_extension_filter(Path::new("a.py"), &filter));
    }

    #[test]
    fn test_only_final_suffix_counts() {
        let filter = exts(&["gz"]);
        assert!(passes_extension_filter(Path::new("a.tar.gz"), &filter));
        assert!(!passes_extension_filter(Path::new("a.tar.gz"), &exts(&["tar"])));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("x/Main.JAVA")), Some("java".to_string()));
        assert_eq!(file_extension(Path::new(".bashrc")), None);
        assert_eq!(file_extension(Path::new("Makefile")), None);
        assert_eq!(file_extension(Path::new("trailing.")), None);
    }
}
