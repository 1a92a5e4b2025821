//! Zip archive creation, extraction, and listing.
//!
//! Archives are flat: each input file becomes one entry named after its
//! final path component. Extraction recreates whatever the archive holds,
//! directories included, below a target directory.

use std::collections::HashSet;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

use crate::ArchiveConfig;
use crate::ArchiveReport;
use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::FileError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::config::ArchiveMethod;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::error::at;
use crate::error::require_path;

/// Metadata of one entry in a zip archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name as stored.
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Stored unix mode, if any.
    pub mode: Option<u32>,
}

/// One validated input file.
struct Source {
    path: PathBuf,
    name: String,
    size: u64,
    mode: u32,
}

/// Maps a zip crate error onto the facade error for `path`.
fn zip_error(path: &Path) -> impl FnOnce(ZipError) -> FileError + '_ {
    move |err| match err {
        ZipError::Io(io) => FileError::io(path, io),
        other => FileError::InvalidFormat {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

/// Creates a zip archive at `zip_path` holding each of `files`.
///
/// Entries are named after the file name of each input; no directory
/// structure is kept. Inputs are validated before the output is touched.
///
/// # Errors
///
/// - `NotFound` if an input is missing
/// - `InvalidInput` if an input is not a regular file or two inputs share
///   a file name
/// - I/O errors while writing
///
/// # Examples
///
/// ```no_run
/// use filekit_core::ArchiveConfig;
/// use filekit_core::create_archive;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let report = create_archive("test.zip", &["a.txt", "b.txt"], &ArchiveConfig::default())?;
/// println!("Added {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn create_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    files: &[Q],
    config: &ArchiveConfig,
) -> Result<ArchiveReport> {
    create_archive_with_progress(zip_path, files, config, &mut NoopProgress)
}

/// Like [`create_archive`], reporting each entry to `progress`.
pub fn create_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    files: &[Q],
    config: &ArchiveConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    let zip_path = require_path(zip_path.as_ref())?;
    let sources = collect_sources(files)?;
    let output = File::create(zip_path).map_err(at(zip_path))?;
    write_archive(output, zip_path, &sources, config, progress)
}

fn collect_sources<Q: AsRef<Path>>(files: &[Q]) -> Result<Vec<Source>> {
    let mut seen = HashSet::new();
    let mut sources = Vec::with_capacity(files.len());

    for file in files {
        let path = require_path(file.as_ref())?;
        let meta = fs::metadata(path).map_err(at(path))?;
        if !meta.is_file() {
            return Err(FileError::invalid_input(path, "not a regular file"));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| FileError::invalid_input(path, "path has no file name"))?;
        if !seen.insert(name.clone()) {
            return Err(FileError::invalid_input(
                path,
                format!("duplicate entry name '{name}'"),
            ));
        }
        sources.push(Source {
            path: path.to_path_buf(),
            name,
            size: meta.len(),
            mode: source_mode(&meta),
        });
    }

    Ok(sources)
}

#[cfg(unix)]
fn source_mode(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn source_mode(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

fn base_options(config: &ArchiveConfig) -> SimpleFileOptions {
    match config.method {
        ArchiveMethod::Stored => {
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
        }
        ArchiveMethod::Deflated => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(config.compression_level),
    }
}

/// Writes `sources` into a zip container over any seekable writer.
fn write_archive<W: Write + Seek>(
    writer: W,
    zip_path: &Path,
    sources: &[Source],
    config: &ArchiveConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    let start = Instant::now();
    let mut zip = ZipWriter::new(writer);
    let mut report = ArchiveReport::new();
    let options = base_options(config);
    let mut buffer = CopyBuffer::new();
    let total = sources.len();

    for (idx, source) in sources.iter().enumerate() {
        progress.on_entry_start(&source.path, total, idx + 1);

        let entry_options = options
            .unix_permissions(source.mode)
            .large_file(source.size >= u64::from(u32::MAX));
        zip.start_file(source.name.as_str(), entry_options)
            .map_err(zip_error(zip_path))?;

        let mut input = File::open(&source.path).map_err(at(&source.path))?;
        let written = copy_with_buffer(&mut input, &mut zip, &mut buffer, progress)
            .map_err(at(&source.path))?;

        report.files_added += 1;
        report.bytes_written += written;
        progress.on_entry_complete(&source.path);
    }

    let mut writer = zip.finish().map_err(zip_error(zip_path))?;
    report.archive_size = writer.seek(SeekFrom::End(0)).map_err(at(zip_path))?;
    report.duration = start.elapsed();
    progress.on_complete();

    debug!(
        archive = %zip_path.display(),
        files = report.files_added,
        bytes = report.bytes_written,
        "archive created"
    );
    Ok(report)
}

/// Extracts every entry of `zip_path` below `target_dir`.
///
/// An empty `target_dir` means the current directory; a missing one is
/// created. Directory entries are recreated, file entries are
/// created or truncated. Stored mode bits are applied when
/// `config.preserve_permissions` is set (unix only); directory modes are
/// applied last so restrictive modes cannot block their own contents.
///
/// # Errors
///
/// - `InvalidInput` if an entry name is absolute or climbs out of the
///   target with `..`
/// - `InvalidFormat` if the archive is corrupt
/// - I/O errors while writing
///
/// # Examples
///
/// ```no_run
/// use filekit_core::ExtractConfig;
/// use filekit_core::extract_archive;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let report = extract_archive("test.zip", "out", &ExtractConfig::default())?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    target_dir: Q,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    extract_archive_with_progress(zip_path, target_dir, config, &mut NoopProgress)
}

/// Like [`extract_archive`], reporting each entry to `progress`.
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    target_dir: Q,
    config: &ExtractConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let zip_path = require_path(zip_path.as_ref())?;
    let target = resolve_target(target_dir.as_ref());

    let file = File::open(zip_path).map_err(at(zip_path))?;
    let archive = ZipArchive::new(file).map_err(zip_error(zip_path))?;
    fs::create_dir_all(target).map_err(at(target))?;
    extract_entries(archive, zip_path, target, config, progress)
}

/// An empty target means the current directory.
fn resolve_target(target: &Path) -> &Path {
    if target.as_os_str().is_empty() {
        Path::new(".")
    } else {
        target
    }
}

fn extract_entries<R: Read + Seek>(
    mut archive: ZipArchive<R>,
    zip_path: &Path,
    target: &Path,
    config: &ExtractConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let start = Instant::now();
    let mut report = ExtractionReport::new();
    let mut buffer = CopyBuffer::new();
    let mut dir_modes = Vec::new();
    let total = archive.len();

    for idx in 0..total {
        let mut entry = archive.by_index(idx).map_err(zip_error(zip_path))?;
        let relative = entry.enclosed_name().ok_or_else(|| {
            FileError::invalid_input(
                zip_path,
                format!("entry '{}' escapes the target directory", entry.name()),
            )
        })?;
        let out_path = target.join(&relative);
        let mode = entry.unix_mode().map(|m| m & 0o7777).filter(|m| *m != 0);
        progress.on_entry_start(&relative, total, idx + 1);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(at(&out_path))?;
            report.directories_created += 1;
            if let Some(mode) = mode {
                dir_modes.push((out_path, mode));
            }
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(at(parent))?;
            }
            let mut output = File::create(&out_path).map_err(at(&out_path))?;
            let written = copy_with_buffer(&mut entry, &mut output, &mut buffer, progress)
                .map_err(|e| match e.kind() {
                    std::io::ErrorKind::InvalidData => FileError::InvalidFormat {
                        path: zip_path.to_path_buf(),
                        reason: e.to_string(),
                    },
                    _ => FileError::io(&out_path, e),
                })?;
            drop(output);
            if config.preserve_permissions
                && let Some(mode) = mode
            {
                apply_mode(&out_path, mode)?;
            }
            report.files_extracted += 1;
            report.bytes_written += written;
        }

        progress.on_entry_complete(&relative);
    }

    if config.preserve_permissions {
        for (path, mode) in dir_modes.iter().rev() {
            apply_mode(path, *mode)?;
        }
    }

    report.duration = start.elapsed();
    progress.on_complete();
    debug!(
        archive = %zip_path.display(),
        target = %target.display(),
        files = report.files_extracted,
        dirs = report.directories_created,
        "archive extracted"
    );
    Ok(report)
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(at(path))
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// Lists the entries of a zip archive without extracting anything.
pub fn list_archive<P: AsRef<Path>>(zip_path: P) -> Result<Vec<ArchiveEntry>> {
    let zip_path = require_path(zip_path.as_ref())?;
    let file = File::open(zip_path).map_err(at(zip_path))?;
    let mut archive = ZipArchive::new(file).map_err(zip_error(zip_path))?;

    let mut entries = Vec::with_capacity(archive.len());
    for idx in 0..archive.len() {
        let entry = archive.by_index_raw(idx).map_err(zip_error(zip_path))?;
        entries.push(ArchiveEntry {
            name: entry.name().to_string(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
            is_dir: entry.is_dir(),
            mode: entry.unix_mode(),
        });
    }
    Ok(entries)
}
