//! Property-based tests for the content-preserving operations.
//!
//! These tests use proptest to generate arbitrary file contents and verify
//! that copy, gzip and zip never alter a single byte.

#![allow(clippy::expect_used)]

use filekit_core::ArchiveConfig;
use filekit_core::ArchiveMethod;
use filekit_core::CompressionConfig;
use filekit_core::CopyBuffer;
use filekit_core::ExtractConfig;
use filekit_core::NoopProgress;
use proptest::prelude::*;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// copy_with_buffer reproduces any input and reports its length.
    #[test]
    fn prop_copy_with_buffer_identity(data in prop::collection::vec(any::<u8>(), 0..200_000)) {
        let mut reader = Cursor::new(&data);
        let mut out = Vec::new();
        let mut buffer = CopyBuffer::new();
        let copied = filekit_core::copy_with_buffer(&mut reader, &mut out, &mut buffer, &mut NoopProgress)
            .expect("in-memory copy");
        prop_assert_eq!(copied, data.len() as u64);
        prop_assert_eq!(out, data);
    }

    /// Copying a file to a fresh path yields identical bytes.
    #[test]
    fn prop_copy_file_identity(data in prop::collection::vec(any::<u8>(), 0..20_000)) {
        let temp = TempDir::new().expect("temp dir");
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::write(&src, &data).expect("write source");

        filekit_core::copy(&src, &dst).expect("copy");
        prop_assert_eq!(fs::read(&dst).expect("read dst"), data);
    }

    /// gzip then gunzip is the identity at every level.
    #[test]
    fn prop_gzip_roundtrip(
        data in prop::collection::vec(any::<u8>(), 0..20_000),
        level in 0u32..=9,
    ) {
        let temp = TempDir::new().expect("temp dir");
        let src = temp.path().join("src");
        let gz = temp.path().join("src.gz");
        let back = temp.path().join("back");
        fs::write(&src, &data).expect("write source");

        let config = CompressionConfig::default().with_level(level);
        filekit_core::compress_file(&src, &gz, &config).expect("compress");
        filekit_core::decompress_file(&gz, &back).expect("decompress");
        prop_assert_eq!(fs::read(&back).expect("read back"), data);
    }

    /// Archive then extract reproduces each file under its own name.
    #[test]
    fn prop_archive_roundtrip(
        contents in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..4_000), 1..6),
        stored in any::<bool>(),
    ) {
        let temp = TempDir::new().expect("temp dir");
        let inputs: Vec<_> = contents
            .iter()
            .enumerate()
            .map(|(i, data)| {
                let path = temp.path().join(format!("file_{i}.dat"));
                fs::write(&path, data).expect("write input");
                path
            })
            .collect();

        let method = if stored { ArchiveMethod::Stored } else { ArchiveMethod::Deflated };
        let zip_path = temp.path().join("out.zip");
        let config = ArchiveConfig::default().with_method(method);
        filekit_core::create_archive(&zip_path, inputs.as_slice(), &config).expect("create");

        let target = temp.path().join("target");
        filekit_core::extract_archive(&zip_path, &target, &ExtractConfig::default()).expect("extract");
        for (i, data) in contents.iter().enumerate() {
            let extracted = fs::read(target.join(format!("file_{i}.dat"))).expect("read extracted");
            prop_assert_eq!(&extracted, data);
        }
    }

    /// The streamed MD5 always agrees with the multi-digest pass.
    #[test]
    fn prop_md5_paths_agree(data in prop::collection::vec(any::<u8>(), 0..150_000)) {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("f");
        fs::write(&path, &data).expect("write");

        let all = filekit_core::checksum_file(&path).expect("checksum");
        prop_assert_eq!(&all, &filekit_core::checksum_bytes(&data));
        prop_assert_eq!(filekit_core::md5_file(&path).expect("md5"), all.md5);
    }
}
