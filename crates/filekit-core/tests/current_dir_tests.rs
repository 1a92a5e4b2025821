//! Operations that resolve against the process working directory.
//!
//! Kept in its own test binary because it changes the current directory.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use filekit_core::ArchiveConfig;
use filekit_core::ExtractConfig;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_extract_with_empty_target_uses_current_dir() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let work = temp.path().join("work");
    fs::create_dir(&src).unwrap();
    fs::create_dir(&work).unwrap();

    let input = src.join("note.txt");
    fs::write(&input, b"unpacked here\n").unwrap();
    let zip_path = temp.path().join("notes.zip");
    filekit_core::create_archive(&zip_path, &[&input][..], &ArchiveConfig::default()).unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(&work).unwrap();
    let result = filekit_core::extract_archive(&zip_path, "", &ExtractConfig::default());
    env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert_eq!(report.files_extracted, 1);
    assert_eq!(fs::read(work.join("note.txt")).unwrap(), b"unpacked here\n");
}
