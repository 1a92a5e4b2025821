//! Error types for file operations.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `FileError`.
pub type Result<T> = std::result::Result<T, FileError>;

/// Coarse classification of a [`FileError`].
///
/// Every error maps to exactly one kind, so callers can decide retry, log
/// or abort policy without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path does not exist.
    NotFound,
    /// The caller lacks the rights for the operation.
    PermissionDenied,
    /// An argument or file type was not acceptable.
    InvalidInput,
    /// The target already exists.
    AlreadyExists,
    /// Any other I/O or transport failure.
    IoFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::InvalidInput => "invalid input",
            Self::AlreadyExists => "already exists",
            Self::IoFailure => "I/O failure",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during file operations.
#[derive(Error, Debug)]
pub enum FileError {
    /// Path does not exist.
    #[error("no such file or directory: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Access to the path was denied by the host.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The protected path.
        path: PathBuf,
    },

    /// Argument rejected before or after touching the file system.
    #[error("invalid input for {path}: {reason}")]
    InvalidInput {
        /// The offending path.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },

    /// Argument rejected without any path involved.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why it was rejected.
        reason: String,
    },

    /// The target path already exists.
    #[error("already exists: {path}")]
    AlreadyExists {
        /// The existing path.
        path: PathBuf,
    },

    /// Generic I/O failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being operated on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Archive or compressed stream is malformed.
    #[error("invalid format in {path}: {reason}")]
    InvalidFormat {
        /// The archive or stream path.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// HTTP transfer failed.
    #[error("download of {url} failed: {reason}")]
    Download {
        /// Requested URL.
        url: String,
        /// Transport or status message.
        reason: String,
    },
}

impl FileError {
    /// Classifies an `io::Error` raised while operating on `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filekit_core::ErrorKind;
    /// use filekit_core::FileError;
    /// use std::io;
    ///
    /// let err = FileError::io("missing.txt", io::Error::from(io::ErrorKind::NotFound));
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    pub fn io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            io::ErrorKind::InvalidInput => Self::InvalidInput {
                path,
                reason: err.to_string(),
            },
            _ => Self::Io { path, source: err },
        }
    }

    /// Shorthand for [`FileError::InvalidInput`].
    pub fn invalid_input(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Returns the coarse kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use filekit_core::ErrorKind;
    /// use filekit_core::FileError;
    ///
    /// let err = FileError::invalid_input("dir", "not a regular file");
    /// assert_eq!(err.kind(), ErrorKind::InvalidInput);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::InvalidInput { .. }
            | Self::InvalidArgument { .. }
            | Self::InvalidFormat { .. } => ErrorKind::InvalidInput,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::Io { .. } | Self::Download { .. } => ErrorKind::IoFailure,
        }
    }

    /// Returns the path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::InvalidInput { path, .. }
            | Self::AlreadyExists { path }
            | Self::Io { path, .. }
            | Self::InvalidFormat { path, .. } => Some(path),
            Self::InvalidArgument { .. } | Self::Download { .. } => None,
        }
    }
}

/// Returns an adapter for `map_err` that attaches `path` to an `io::Error`.
pub(crate) fn at(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |err| FileError::io(path, err)
}

/// Rejects empty paths, the only validation the facade performs itself.
pub(crate) fn require_path(path: &Path) -> Result<&Path> {
    if path.as_os_str().is_empty() {
        return Err(FileError::invalid_input(path, "path is empty"));
    }
    Ok(path)
}
