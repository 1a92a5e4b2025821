//! Zip commands: zip, unzip, ls-zip.

use crate::cli::ListZipArgs;
use crate::cli::UnzipArgs;
use crate::cli::ZipArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use filekit_core::ArchiveConfig;
use filekit_core::ArchiveMethod;
use filekit_core::ExtractConfig;
use filekit_core::NoopProgress;
use filekit_core::ProgressCallback;
use std::path::Path;

pub fn create(args: &ZipArgs, formatter: &dyn OutputFormatter, show_progress: bool) -> Result<()> {
    let config = if args.store {
        ArchiveConfig::default().with_method(ArchiveMethod::Stored)
    } else {
        ArchiveConfig::default().with_compression_level(args.compression_level)
    };

    // Use progress bar if TTY is detected (not quiet, not JSON, is terminal)
    let mut progress: Box<dyn ProgressCallback> = if show_progress {
        let total = args
            .files
            .iter()
            .filter_map(|f| filekit_core::stat(f).ok())
            .map(|info| info.size)
            .sum();
        Box::new(CliProgress::new(Some(total), "Archiving"))
    } else {
        Box::new(NoopProgress)
    };

    let report = add_hint(filekit_core::create_archive_with_progress(
        &args.output,
        args.files.as_slice(),
        &config,
        progress.as_mut(),
    ))?;
    drop(progress);

    formatter.format_archive_result(&args.output, &report)
}

pub fn extract(args: &UnzipArgs, formatter: &dyn OutputFormatter, show_progress: bool) -> Result<()> {
    let target = args
        .target_dir
        .as_deref()
        .unwrap_or_else(|| Path::new("."));
    let config =
        ExtractConfig::default().with_preserve_permissions(!args.no_preserve_permissions);

    let mut progress: Box<dyn ProgressCallback> = if show_progress {
        let total = filekit_core::list_archive(&args.archive)
            .map(|entries| entries.iter().map(|e| e.size).sum())
            .ok();
        Box::new(CliProgress::new(total, "Extracting"))
    } else {
        Box::new(NoopProgress)
    };

    let report = add_hint(filekit_core::extract_archive_with_progress(
        &args.archive,
        target,
        &config,
        progress.as_mut(),
    ))?;
    drop(progress);

    formatter.format_extraction_result(target, &report)
}

pub fn list(args: &ListZipArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let entries = add_hint(filekit_core::list_archive(&args.archive))?;
    formatter.format_archive_listing(&entries, args.long, args.human_readable)
}
