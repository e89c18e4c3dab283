mod common;

use assert_cmd::prelude::*;
use common::{ccdoc_cmd, create_file, read_docx_part};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_generates_document_in_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.py", "print('hi')  # greet\n\n# done\n");

    ccdoc_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 source files to"))
        .stdout(predicate::str::contains("code.docx"));

    let document = read_docx_part(&temp.path().join("code.docx"), "word/document.xml")?;
    assert!(document.contains("print('hi')"));
    assert!(!document.contains("greet"));
    assert!(!document.contains("done"));
    Ok(())
}

#[test]
fn test_docx_suffix_is_appended() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.py", "a = 1\n");

    ccdoc_cmd()
        .current_dir(temp.path())
        .args(["-i", "src", "-o", "listing", "-t", "Title Here"])
        .assert()
        .success();

    let out = temp.path().join("listing.docx");
    assert!(out.exists());
    let header = read_docx_part(&out, "word/header1.xml")?;
    assert!(header.contains("Title Here"));
    Ok(())
}

#[test]
fn test_dry_run_lists_files_and_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "b.py", "b = 1\n");
    create_file(temp.path(), "a.js", "a();\n");
    create_file(temp.path(), "notes.md", "# notes\n");

    ccdoc_cmd()
        .current_dir(temp.path())
        .args(["--dry-run", "-e", "py,js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Dry Run: Files that would be processed ---"))
        .stdout(predicate::str::contains("b.py"))
        .stdout(predicate::str::contains("a.js"))
        .stdout(predicate::str::contains("notes.md").not())
        .stdout(predicate::str::contains("--- End Dry Run: 2 file(s) ---"));

    assert!(!temp.path().join("code.docx").exists());
    Ok(())
}

#[test]
fn test_list_extensions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "a\n");
    create_file(temp.path(), "b.Rs", "b\n");
    create_file(temp.path(), "node_modules/c.ts", "c\n");

    ccdoc_cmd()
        .current_dir(temp.path())
        .arg("--list-extensions")
        .assert()
        .success()
        .stdout(predicate::eq("py\nrs\n"));
    Ok(())
}

#[test]
fn test_missing_root_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    ccdoc_cmd()
        .current_dir(temp.path())
        .args(["-i", "does_not_exist"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Source directory does not exist"))
        .stderr(predicate::str::contains("does_not_exist"));
    Ok(())
}

#[test]
fn test_invalid_font_size_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    ccdoc_cmd()
        .current_dir(temp.path())
        .args(["--font-size", "0.5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--font-size"));
    Ok(())
}

#[test]
fn test_unknown_encoding_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    ccdoc_cmd()
        .current_dir(temp.path())
        .args(["--encoding", "klingon-8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown encoding"));
    Ok(())
}

#[test]
fn test_no_matching_files_writes_header_only_document() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.rs", "fn main() {}\n");

    ccdoc_cmd()
        .current_dir(temp.path())
        .args(["-t", "Empty Run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 0 source files to"));

    let out = temp.path().join("code.docx");
    let header = read_docx_part(&out, "word/header1.xml")?;
    assert!(header.contains("Empty Run"));
    let document = read_docx_part(&out, "word/document.xml")?;
    assert!(!document.contains("fn main"));
    Ok(())
}

#[test]
fn test_previous_output_is_not_reingested() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "a = 1\n");

    for _ in 0..2 {
        ccdoc_cmd()
            .current_dir(temp.path())
            .args(["-e", "py,docx"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 1 source files"));
    }
    Ok(())
}
