//! Gzip commands.

use crate::cli::GunzipArgs;
use crate::cli::GzipArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use filekit_core::CompressionConfig;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

/// `notes.txt` -> `notes.txt.gz`
fn gz_name(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".gz");
    PathBuf::from(name)
}

/// `notes.txt.gz` -> `notes.txt`; `None` without a `.gz` suffix.
fn plain_name(path: &Path) -> Option<PathBuf> {
    let is_gz = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    is_gz.then(|| path.with_extension(""))
}

pub fn compress(args: &GzipArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| gz_name(&args.path));
    let config = CompressionConfig::default().with_level(args.level);
    let report = add_hint(filekit_core::compress_file(&args.path, &output, &config))?;
    formatter.format_compression_result("gzip", &output, &report)
}

pub fn decompress(args: &GunzipArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let Some(output) = args.output.clone().or_else(|| plain_name(&args.path)) else {
        bail!(
            "Cannot derive an output name for '{}'\n\
             HINT: The input has no .gz suffix; pass --output explicitly.",
            args.path.display()
        );
    };
    let report = add_hint(filekit_core::decompress_file(&args.path, &output))?;
    formatter.format_compression_result("gunzip", &output, &report)
}
