// src/filtering/binary.rs

use crate::constants::SNIFF_BUFFER_SIZE;
use std::{fs::File, io::Read, path::Path};

/// Checks whether a byte buffer looks binary: any NUL byte means binary.
///
/// # Examples
/// ```
/// use ccdoc::filtering::is_binary_buffer;
///
/// assert!(!is_binary_buffer(b"print('hello')\n"));
/// assert!(is_binary_buffer(b"ELF\0\x01\x02"));
/// assert!(!is_binary_buffer(b""));
/// ```
pub fn is_binary_buffer(buffer: &[u8]) -> bool {
    buffer.contains(&0)
}

/// Sniffs the head of a file for NUL bytes.
///
/// Reads at most the first 2048 bytes. A file that cannot be opened or read
/// is reported as binary, so it never becomes a candidate.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use ccdoc::filtering::is_binary;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let text_file = temp.path().join("a.py");
/// let binary_file = temp.path().join("b.bin");
///
/// fs::write(&text_file, "x = 1\n")?;
/// assert!(!is_binary(&text_file));
///
/// fs::write(&binary_file, b"binary\0data")?;
/// assert!(is_binary(&binary_file));
///
/// assert!(is_binary(&temp.path().join("missing.py")));
/// # Ok(())
/// # }
/// ```
pub fn is_binary(path: &Path) -> bool {
    match read_head(path) {
        Ok(head) => is_binary_buffer(&head),
        Err(e) => {
            log::debug!("Treating unreadable file {} as binary: {}", path.display(), e);
            true
        }
    }
}

fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(SNIFF_BUFFER_SIZE);
    file.take(SNIFF_BUFFER_SIZE as u64).read_to_end(&mut head)?;
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_plain_text() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("plain.py");
        fs::write(&file_path, "def main():\n    pass\n")?;
        assert!(!is_binary(&file_path));
        Ok(())
    }

    #[test]
    fn test_detect_gbk_text_is_not_binary() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("gbk.py");
        // "中文" in GBK; high bytes alone do not make a file binary.
        fs::write(&file_path, [0xD6, 0xD0, 0xCE, 0xC4, b'\n'])?;
        assert!(!is_binary(&file_path));
        Ok(())
    }

    #[test]
    fn test_detect_null_byte() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("binary_null.bin");
        fs::write(&file_path, b"Binary data with a \0 null byte.")?;
        assert!(is_binary(&file_path));
        Ok(())
    }

    #[test]
    fn test_null_byte_beyond_sniff_window_is_ignored() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("late_null.py");
        let mut content = vec![b'a'; SNIFF_BUFFER_SIZE];
        content.push(0);
        fs::write(&file_path, &content)?;
        assert!(!is_binary(&file_path));
        Ok(())
    }

    #[test]
    fn test_null_byte_at_window_edge_is_detected() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("edge_null.py");
        let mut content = vec![b'a'; SNIFF_BUFFER_SIZE - 1];
        content.push(0);
        fs::write(&file_path, &content)?;
        assert!(is_binary(&file_path));
        Ok(())
    }

    #[test]
    fn test_empty_file_is_text() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.py");
        fs::write(&file_path, "")?;
        assert!(!is_binary(&file_path));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_binary() {
        assert!(is_binary(Path::new("non_existent_file_for_sniffing.py")));
    }
}
