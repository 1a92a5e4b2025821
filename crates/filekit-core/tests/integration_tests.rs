//! Integration tests for filekit-core.
//!
//! These tests drive the public facade end to end against a real temporary
//! directory.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use filekit_core::ArchiveConfig;
use filekit_core::CompressionConfig;
use filekit_core::CopyOutcome;
use filekit_core::ErrorKind;
use filekit_core::ExtractConfig;
use filekit_core::Whence;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_read_checksum_scenario() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("t.txt");

    filekit_core::create_empty(&path).unwrap();
    filekit_core::write(&path, b"hello\n").unwrap();
    assert_eq!(filekit_core::read(&path, 5).unwrap(), b"hello");

    let first = filekit_core::checksum_file(&path).unwrap();
    let second = filekit_core::checksum_file(&path).unwrap();
    assert_eq!(first.md5, "b1946ac92492d2347c6235b4d2611184");
    assert_eq!(first, second);
    assert_eq!(filekit_core::md5_file(&path).unwrap(), first.md5);
}

#[test]
fn test_copy_to_new_path_preserves_content() {
    let temp = TempDir::new().unwrap();
    for (name, content) in [("empty", &b""[..]), ("small", b"abc"), ("line", b"hello\n")] {
        let src = temp.path().join(format!("{name}.src"));
        let dst = temp.path().join(format!("{name}.dst"));
        fs::write(&src, content).unwrap();

        let outcome = filekit_core::copy(&src, &dst).unwrap();
        assert_ne!(outcome, CopyOutcome::AlreadySame);
        assert_eq!(fs::read(&dst).unwrap(), content);
    }
}

#[test]
fn test_copy_onto_itself_and_hard_link_is_noop() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    fs::write(&a, b"keep me").unwrap();

    assert_eq!(filekit_core::copy(&a, &a).unwrap(), CopyOutcome::AlreadySame);
    assert_eq!(fs::read(&a).unwrap(), b"keep me");

    filekit_core::hard_link(&a, &b).unwrap();
    assert_eq!(filekit_core::copy(&a, &b).unwrap(), CopyOutcome::AlreadySame);
    assert_eq!(fs::read(&a).unwrap(), b"keep me");
    assert_eq!(fs::read(&b).unwrap(), b"keep me");
}

#[test]
fn test_copy_directory_leaves_destination_untouched() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dir");
    let dst = temp.path().join("dst");
    fs::create_dir(&dir).unwrap();

    let err = filekit_core::copy(&dir, &dst).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(!dst.exists());
}

#[test]
fn test_archive_roundtrip() {
    let temp = TempDir::new().unwrap();
    let src_dir = temp.path().join("src");
    fs::create_dir(&src_dir).unwrap();
    let one = src_dir.join("one.txt");
    let two = src_dir.join("two.bin");
    fs::write(&one, b"first file\n").unwrap();
    fs::write(&two, (0..=255u8).collect::<Vec<_>>()).unwrap();

    let zip_path = temp.path().join("out.zip");
    let report =
        filekit_core::create_archive(&zip_path, &[&one, &two][..], &ArchiveConfig::default()).unwrap();
    assert_eq!(report.files_added, 2);

    let target = temp.path().join("extracted");
    let report =
        filekit_core::extract_archive(&zip_path, &target, &ExtractConfig::default()).unwrap();
    assert_eq!(report.files_extracted, 2);

    assert_eq!(fs::read(target.join("one.txt")).unwrap(), fs::read(&one).unwrap());
    assert_eq!(fs::read(target.join("two.bin")).unwrap(), fs::read(&two).unwrap());

    let mut names: Vec<String> = filekit_core::list_archive(&zip_path)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    names.sort();
    assert_eq!(names, ["one.txt", "two.bin"]);
}

#[test]
fn test_gzip_roundtrip() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("data.txt");
    let gz = temp.path().join("data.txt.gz");
    let back = temp.path().join("data.back");
    let data = b"lorem ipsum dolor sit amet ".repeat(1000);
    fs::write(&src, &data).unwrap();

    filekit_core::compress_file(&src, &gz, &CompressionConfig::default()).unwrap();
    filekit_core::decompress_file(&gz, &back).unwrap();
    assert_eq!(fs::read(&back).unwrap(), data);
}

#[test]
fn test_seek_then_read() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("s.txt");
    filekit_core::write(&path, b"0123456789").unwrap();

    assert_eq!(filekit_core::seek(&path, 0, Whence::Start).unwrap(), 0);
    assert_eq!(filekit_core::read(&path, 3).unwrap(), b"012");

    let pos = filekit_core::seek(&path, 100, Whence::Start).unwrap();
    assert!(pos >= 10);
}

#[test]
fn test_stat_after_truncate_and_times() {
    use std::time::Duration;
    use std::time::SystemTime;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("f");
    filekit_core::create_empty(&path).unwrap();
    filekit_core::truncate(&path, 42).unwrap();

    let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
    filekit_core::set_times(&path, when, when).unwrap();

    let info = filekit_core::stat(&path).unwrap();
    assert_eq!(info.size, 42);
    assert!(info.is_file);
    assert_eq!(info.modified, when);
}

#[test]
fn test_rename_then_remove() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    filekit_core::write(&a, b"x").unwrap();

    filekit_core::rename(&a, &b).unwrap();
    assert!(!filekit_core::exists(&a).unwrap());
    assert!(filekit_core::exists(&b).unwrap());

    filekit_core::remove(&b).unwrap();
    assert_eq!(filekit_core::remove(&b).unwrap_err().kind(), ErrorKind::NotFound);
}
