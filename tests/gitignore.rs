mod common;

use ccdoc::config::ConfigBuilder;
use ccdoc::discovery::read_gitignore_excludes;
use ccdoc::{discover, CancellationToken};
use common::create_file;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_literal_entries_resolve_against_their_directory() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let root = temp.path();
    fs::create_dir_all(root.join("build"))?;
    create_file(root, "secret.txt", "s");
    create_file(
        root,
        ".gitignore",
        "build/\n*.log\n!keep.log\n# comment\nsecret.txt\n",
    );

    let excludes = read_gitignore_excludes(&[root.to_path_buf()]);
    assert_eq!(excludes, vec![root.join("build"), root.join("secret.txt")]);
    Ok(())
}

#[test]
fn test_gitignore_option_prunes_listed_paths() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, "app.py", "a = 1\n");
    create_file(root, "generated/models.py", "m = 1\n");
    create_file(root, "scratch.py", "s = 1\n");
    create_file(root, ".gitignore", "/generated/\nscratch.py\n*.pyc\n");

    let builder = ConfigBuilder::new()
        .root(root)
        .output_path(root.join("out.docx"));

    let without = discover(&builder.clone().build()?, &CancellationToken::new())?;
    assert_eq!(without.len(), 3);

    let with = discover(
        &builder.gitignore_excludes(true).build()?,
        &CancellationToken::new(),
    )?;
    let names: Vec<_> = with
        .iter()
        .filter_map(|f| f.path.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["app.py"]);
    Ok(())
}

#[test]
fn test_nested_gitignore_files_are_merged() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, ".gitignore", "logs\n");
    create_file(root, "logs/today.txt", "t");
    create_file(root, "web/.gitignore", "cache/\n");
    create_file(root, "web/cache/page.html", "<p/>");

    let mut excludes = read_gitignore_excludes(&[root.to_path_buf()]);
    excludes.sort();
    assert_eq!(excludes, vec![root.join("logs"), root.join("web/cache")]);
    Ok(())
}
