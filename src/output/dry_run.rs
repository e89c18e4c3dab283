// src/output/dry_run.rs

use crate::core_types::CandidateFile;
use log::debug;
use std::io::{self, Write};

/// Writes the output for a dry run (`--dry-run`).
///
/// Lists the files that would be written into the document, in the order they
/// would appear, followed by the count. Each line names the detected language
/// when there is one.
pub fn write_dry_run_output(writer: &mut dyn Write, files: &[CandidateFile]) -> io::Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "\n--- Dry Run: Files that would be processed ---")?;

    for file in files {
        match file.language {
            Some(language) => writeln!(writer, "- {} ({})", file.path.display(), language)?,
            None => writeln!(writer, "- {}", file.path.display())?,
        }
    }

    writeln!(writer, "--- End Dry Run: {} file(s) ---", files.len())?;
    writer.flush()
}

/// Writes the extensions found under the roots (`--list-extensions`), one per line.
pub fn write_extension_list<'a>(
    writer: &mut dyn Write,
    extensions: impl IntoIterator<Item = &'a String>,
) -> io::Result<()> {
    for extension in extensions {
        writeln!(writer, "{}", extension)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::language::Language;
    use std::collections::BTreeSet;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn candidate(path: &str, language: Option<Language>) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from(path),
            language,
        }
    }

    #[test]
    fn test_dry_run_output_empty() -> anyhow::Result<()> {
        let mut writer = Cursor::new(Vec::new());
        write_dry_run_output(&mut writer, &[])?;

        let output = String::from_utf8(writer.into_inner())?;
        let expected =
            "\n--- Dry Run: Files that would be processed ---\n--- End Dry Run: 0 file(s) ---\n";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_dry_run_output_preserves_order() -> anyhow::Result<()> {
        let files = vec![
            candidate("/p/z_file.py", Some(Language::Python)),
            candidate("/p/a_file.rs", Some(Language::Rust)),
            candidate("/p/sub/b_file.xyz", None),
        ];
        let mut writer = Cursor::new(Vec::new());
        write_dry_run_output(&mut writer, &files)?;

        let output = String::from_utf8(writer.into_inner())?;
        let expected = format!(
            "\n--- Dry Run: Files that would be processed ---\n- /p/z_file.py ({})\n- /p/a_file.rs ({})\n- /p/sub/b_file.xyz\n--- End Dry Run: 3 file(s) ---\n",
            Language::Python,
            Language::Rust
        );
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_extension_list() -> anyhow::Result<()> {
        let extensions: BTreeSet<String> = ["rs", "md", "py"].iter().map(|s| s.to_string()).collect();
        let mut writer = Cursor::new(Vec::new());
        write_extension_list(&mut writer, &extensions)?;
        assert_eq!(String::from_utf8(writer.into_inner())?, "md\npy\nrs\n");
        Ok(())
    }
}
