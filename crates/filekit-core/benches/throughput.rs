//! Benchmarks for streaming throughput.
//!
//! Measures checksum, copy and gzip speed across file sizes.

#![allow(clippy::unwrap_used)] // Allow unwrap in benchmarks for brevity

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use filekit_core::CompressionConfig;
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;

const SIZES: [usize; 3] = [4 * 1024, 1024 * 1024, 16 * 1024 * 1024];

fn write_fixture(temp: &TempDir, size: usize) -> PathBuf {
    let path = temp.path().join(format!("input_{size}.bin"));
    let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
    fs::write(&path, data).unwrap();
    path
}

fn bench_checksum(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let mut group = c.benchmark_group("checksum");

    for size in SIZES {
        let path = write_fixture(&temp, size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("all_digests", size), &path, |b, path| {
            b.iter(|| filekit_core::checksum_file(black_box(path)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("md5_only", size), &path, |b, path| {
            b.iter(|| filekit_core::md5_file(black_box(path)).unwrap());
        });
    }

    group.finish();
}

fn bench_copy_contents(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let mut group = c.benchmark_group("copy_contents");

    for size in SIZES {
        let path = write_fixture(&temp, size);
        let dst = temp.path().join(format!("copy_{size}.bin"));
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &path, |b, path| {
            b.iter(|| filekit_core::copy_contents(black_box(path), &dst).unwrap());
        });
    }

    group.finish();
}

fn bench_gzip(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let mut group = c.benchmark_group("gzip");
    group.sample_size(20);

    let size = SIZES[1];
    let path = write_fixture(&temp, size);
    let gz = temp.path().join("bench.gz");
    group.throughput(Throughput::Bytes(size as u64));

    for level in [1, 6, 9] {
        let config = CompressionConfig::default().with_level(level);
        group.bench_with_input(BenchmarkId::new("level", level), &config, |b, config| {
            b.iter(|| filekit_core::compress_file(&path, &gz, black_box(config)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_checksum, bench_copy_contents, bench_gzip);
criterion_main!(benches);
