//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap_complete::Shell;
use filekit_core::Whence;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "filekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty file, truncating it if it exists
    Touch(PathArgs),
    /// Set the length of an existing file
    Truncate(TruncateArgs),
    /// Show file metadata
    Info(InfoArgs),
    /// Rename or move a file
    Mv(TwoPathArgs),
    /// Remove a file
    Rm(PathArgs),
    /// Check that a file is readable (and optionally writable)
    Check(CheckArgs),
    /// Change permission bits
    Chmod(ChmodArgs),
    /// Change owner and group ids
    Chown(ChownArgs),
    /// Set access and modification times
    SetTimes(SetTimesArgs),
    /// Create a hard link
    Link(TwoPathArgs),
    /// Create a symbolic link
    Symlink(TwoPathArgs),
    /// Copy a regular file
    Cp(CopyArgs),
    /// Report the position reached by a seek
    Seek(SeekArgs),
    /// Write content to a file
    Write(WriteArgs),
    /// Print file content
    Read(ReadArgs),
    /// Create a zip archive from files
    Zip(ZipArgs),
    /// Extract a zip archive
    Unzip(UnzipArgs),
    /// List zip archive entries
    LsZip(ListZipArgs),
    /// Gzip-compress a file
    Gzip(GzipArgs),
    /// Decompress a gzip file
    Gunzip(GunzipArgs),
    /// Compute file digests
    Checksum(ChecksumArgs),
    /// Download a URL into a file
    Download(DownloadArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct PathArgs {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(clap::Args)]
pub struct TwoPathArgs {
    /// Existing path
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// New path
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,
}

#[derive(clap::Args)]
pub struct TruncateArgs {
    /// File to resize
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// New size in bytes (suffixes K, M, G, T accepted)
    #[arg(value_name = "SIZE", value_parser = parse_byte_size)]
    pub size: u64,
}

#[derive(clap::Args)]
pub struct InfoArgs {
    /// File to inspect
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Describe a symlink itself instead of its target
    #[arg(short = 'P', long)]
    pub no_follow: bool,

    /// Also report whether PATH and OTHER are the same file
    #[arg(long, value_name = "OTHER")]
    pub same_as: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// File to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Also require write access
    #[arg(short, long)]
    pub write: bool,
}

#[derive(clap::Args)]
pub struct ChmodArgs {
    /// Octal permission bits, e.g. 644 or 0755
    #[arg(value_name = "MODE", value_parser = parse_octal_mode)]
    pub mode: u32,

    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(clap::Args)]
pub struct ChownArgs {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// New owner user id (unchanged if omitted)
    #[arg(long)]
    pub uid: Option<u32>,

    /// New group id (unchanged if omitted)
    #[arg(long)]
    pub gid: Option<u32>,
}

#[derive(clap::Args)]
pub struct SetTimesArgs {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Access time in seconds since the Unix epoch
    #[arg(value_name = "ATIME")]
    pub atime: u64,

    /// Modification time in seconds since the Unix epoch
    #[arg(value_name = "MTIME")]
    pub mtime: u64,
}

#[derive(clap::Args)]
pub struct CopyArgs {
    /// Regular file to copy
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination path
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Always stream the bytes instead of trying a hard link first
    #[arg(long)]
    pub contents: bool,
}

/// Origin of a seek offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeekOrigin {
    Start,
    Current,
    End,
}

impl From<SeekOrigin> for Whence {
    fn from(origin: SeekOrigin) -> Self {
        match origin {
            SeekOrigin::Start => Self::Start,
            SeekOrigin::Current => Self::Current,
            SeekOrigin::End => Self::End,
        }
    }
}

#[derive(clap::Args)]
pub struct SeekArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Signed byte offset
    #[arg(value_name = "OFFSET", allow_negative_numbers = true)]
    pub offset: i64,

    /// Origin the offset is relative to
    #[arg(long, value_enum, default_value = "start")]
    pub whence: SeekOrigin,
}

#[derive(clap::Args)]
pub struct WriteArgs {
    /// File to write
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Content to write (read from stdin if omitted)
    #[arg(value_name = "CONTENT")]
    pub content: Option<String>,

    /// Append to an existing file instead of replacing it
    #[arg(short, long)]
    pub append: bool,
}

#[derive(clap::Args)]
pub struct ReadArgs {
    /// File to read
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Read at most this many bytes from the start
    #[arg(short = 'n', long, value_name = "BYTES", value_parser = parse_byte_size)]
    pub len: Option<u64>,
}

#[derive(clap::Args)]
pub struct ZipArgs {
    /// Output archive path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Files to archive
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Deflate level (0-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(i64).range(0..=9))]
    pub compression_level: Option<i64>,

    /// Store entries without compression
    #[arg(long, conflicts_with = "compression_level")]
    pub store: bool,
}

#[derive(clap::Args)]
pub struct UnzipArgs {
    /// Archive to extract
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Target directory (default: current directory)
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Ignore permission bits stored in the archive
    #[arg(long)]
    pub no_preserve_permissions: bool,
}

#[derive(clap::Args)]
pub struct ListZipArgs {
    /// Archive to list
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Show detailed entry information
    #[arg(short, long)]
    pub long: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}

#[derive(clap::Args)]
pub struct GzipArgs {
    /// File to compress
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output path (default: PATH.gz)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Compression level (0-9)
    #[arg(short = 'l', long, default_value = "6", value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: u32,
}

#[derive(clap::Args)]
pub struct GunzipArgs {
    /// Gzip file to decompress
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output path (default: PATH without its .gz suffix)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ChecksumArgs {
    /// File to digest
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Compute only the MD5 digest
    #[arg(long)]
    pub md5_only: bool,
}

#[derive(clap::Args)]
pub struct DownloadArgs {
    /// URL to fetch
    #[arg(value_name = "URL")]
    pub url: String,

    /// Destination file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Whole-request timeout, e.g. 30s or 2m (none by default)
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}

/// Parse an octal permission mode such as `644`, `0755` or `0o600`.
fn parse_octal_mode(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let digits = s.strip_prefix("0o").unwrap_or(s);
    let mode = u32::from_str_radix(digits, 8).map_err(|_| format!("invalid octal mode: {s}"))?;
    if mode > 0o7777 {
        return Err(format!("mode out of range: {s}"));
    }
    Ok(mode)
}
