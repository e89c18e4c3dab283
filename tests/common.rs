// tests/common.rs

use ccdoc::{DocumentSink, ParagraphStyle, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn ccdoc_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ccdoc"))
}

/// Writes `content` at `relative_path` under `root`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(&path, content).expect("write test file");
    path
}

/// Returns one part of a saved `.docx` package as text.
#[allow(dead_code)]
pub fn read_docx_part(path: &Path, part: &str) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(fs::File::open(path)?)?;
    let mut entry = archive.by_name(part)?;
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

/// A `DocumentSink` that records every call instead of writing a document.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub title: Option<String>,
    pub files: Vec<(PathBuf, Vec<String>)>,
    pub style: Option<ParagraphStyle>,
    pub saved_to: Option<PathBuf>,
}

#[allow(dead_code)]
impl RecordingSink {
    /// All recorded lines, in the order they were appended.
    pub fn all_lines(&self) -> Vec<String> {
        self.files
            .iter()
            .flat_map(|(_, lines)| lines.iter().cloned())
            .collect()
    }

    /// The file names of the appended files, in order.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|(path, _)| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

impl DocumentSink for RecordingSink {
    fn begin(&mut self, title: &str) -> Result<()> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn append_lines(
        &mut self,
        source_path: &Path,
        lines: &[String],
        style: &ParagraphStyle,
    ) -> Result<()> {
        self.files.push((source_path.to_path_buf(), lines.to_vec()));
        self.style = Some(style.clone());
        Ok(())
    }

    fn save(&mut self, output_path: &Path) -> Result<()> {
        self.saved_to = Some(output_path.to_path_buf());
        Ok(())
    }
}
