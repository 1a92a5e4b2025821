//! Subcommand implementations, one module per group of facade operations.

pub mod archive;
pub mod attrs;
pub mod checksum;
pub mod completion;
pub mod copy;
pub mod download;
pub mod files;
pub mod gzip;
pub mod info;
pub mod links;
