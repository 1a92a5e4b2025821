//! Error conversion utilities for CLI.
//!
//! Converts filekit-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use filekit_core::FileError;

/// Converts `FileError` to user-friendly anyhow error with a hint
pub fn convert_file_error(err: FileError) -> anyhow::Error {
    match err {
        FileError::NotFound { path } => {
            anyhow!(
                "No such file or directory: '{}'\n\
                 HINT: Check the path for typos, or create it first with 'filekit touch'.",
                path.display()
            )
        }
        FileError::PermissionDenied { path } => {
            anyhow!(
                "Permission denied: '{}'\n\
                 HINT: Check ownership and mode with 'filekit info', then adjust with 'filekit chmod'.",
                path.display()
            )
        }
        FileError::InvalidInput { path, reason } => {
            anyhow!(
                "Invalid input '{}': {}\n\
                 HINT: Only regular files are accepted by cp, zip and checksum.",
                path.display(),
                reason
            )
        }
        FileError::InvalidArgument { reason } => {
            anyhow!(
                "Invalid argument: {reason}\n\
                 HINT: Run the command with --help to see accepted values."
            )
        }
        FileError::AlreadyExists { path } => {
            anyhow!(
                "Target already exists: '{}'\n\
                 HINT: Remove it first with 'filekit rm' or choose another name.",
                path.display()
            )
        }
        FileError::InvalidFormat { path, reason } => {
            anyhow!(
                "Invalid format in '{}': {}\n\
                 HINT: The file may be corrupted, truncated, or not the expected type.",
                path.display(),
                reason
            )
        }
        FileError::Download { url, reason } => {
            anyhow!(
                "Download of '{url}' failed: {reason}\n\
                 HINT: Check the URL and your network; use --timeout to bound slow servers."
            )
        }
        err @ FileError::Io { .. } => anyhow::Error::from(err),
    }
}

/// Adds a hint to the error of a facade call
pub fn add_hint<T>(result: Result<T, FileError>) -> anyhow::Result<T> {
    result.map_err(convert_file_error)
}
