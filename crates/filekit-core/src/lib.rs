//! Thin facade over everyday file operations with recoverable errors.
//!
//! `filekit-core` wraps the host file system (create, truncate, stat, copy,
//! link, permissions, times) together with a few content utilities: flat
//! zip archives, single-file gzip, streaming checksums, and HTTP download.
//! Every operation returns a [`Result`] whose [`FileError`] carries the
//! offending path and maps to one of five [`ErrorKind`]s.
//!
//! The library never prints. Diagnostics go through `tracing` and stay
//! silent unless the embedding program installs a subscriber.
//!
//! # Examples
//!
//! ```no_run
//! use filekit_core::CopyOutcome;
//! use filekit_core::checksum_file;
//! use filekit_core::copy;
//!
//! # fn main() -> Result<(), filekit_core::FileError> {
//! match copy("a.txt", "b.txt")? {
//!     CopyOutcome::AlreadySame => println!("same file"),
//!     CopyOutcome::HardLinked => println!("linked"),
//!     CopyOutcome::Copied { bytes } => println!("copied {bytes} bytes"),
//! }
//! println!("{}", checksum_file("b.txt")?.sha256);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod checksum;
pub mod compression;
pub mod config;
pub mod copy;
pub mod download;
pub mod error;
pub mod file;
pub mod info;
pub mod links;
pub mod permissions;
pub mod report;

#[cfg(test)]
pub(crate) mod test_utils;

pub use archive::ArchiveEntry;
pub use archive::create_archive;
pub use archive::create_archive_with_progress;
pub use archive::extract_archive;
pub use archive::extract_archive_with_progress;
pub use archive::list_archive;
pub use checksum::Checksums;
pub use checksum::checksum_bytes;
pub use checksum::checksum_file;
pub use checksum::md5_file;
pub use compression::compress_file;
pub use compression::decompress_file;
pub use config::ArchiveConfig;
pub use config::ArchiveMethod;
pub use config::CompressionConfig;
pub use config::DownloadConfig;
pub use config::ExtractConfig;
pub use copy::CopyBuffer;
pub use copy::CopyOutcome;
pub use copy::copy;
pub use copy::copy_contents;
pub use copy::copy_with_buffer;
pub use copy::copy_with_progress;
pub use download::download;
pub use download::download_with_progress;
pub use error::ErrorKind;
pub use error::FileError;
pub use error::Result;
pub use file::Whence;
pub use file::append;
pub use file::check_readable;
pub use file::check_writable;
pub use file::create_empty;
pub use file::exists;
pub use file::read;
pub use file::read_to_end;
pub use file::remove;
pub use file::rename;
pub use file::seek;
pub use file::truncate;
pub use file::with_temp_file;
pub use file::write;
pub use info::FileInfo;
pub use info::lstat;
pub use info::same_file;
pub use info::stat;
pub use links::hard_link;
pub use links::read_link;
pub use links::symlink;
pub use permissions::set_owner;
pub use permissions::set_permissions;
pub use permissions::set_times;
pub use report::ArchiveReport;
pub use report::CompressionReport;
pub use report::DownloadReport;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
