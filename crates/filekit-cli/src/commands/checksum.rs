//! Checksum command implementation.

use crate::cli::ChecksumArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn execute(args: &ChecksumArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    if args.md5_only {
        let md5 = add_hint(filekit_core::md5_file(&args.path))?;
        return formatter.format_md5(&args.path, &md5);
    }

    let sums = add_hint(filekit_core::checksum_file(&args.path))?;
    formatter.format_checksums(&args.path, &sums)
}
