//! Copy command implementation.

use crate::cli::CopyArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use anyhow::Result;
use filekit_core::CopyOutcome;

pub fn execute(args: &CopyArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let outcome = if args.contents {
        let bytes = add_hint(filekit_core::copy_contents(&args.source, &args.target))?;
        CopyOutcome::Copied { bytes }
    } else {
        add_hint(filekit_core::copy(&args.source, &args.target))?
    };

    formatter.format_copy_result(&args.source, &args.target, outcome)
}
