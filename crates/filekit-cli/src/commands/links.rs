//! Link commands.

use crate::cli::TwoPathArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn hard_link(args: &TwoPathArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::hard_link(&args.source, &args.target))?;
    formatter.format_success(
        "link",
        &format!(
            "Linked {} => {}",
            args.target.display(),
            args.source.display()
        ),
    );
    Ok(())
}

pub fn symlink(args: &TwoPathArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::symlink(&args.source, &args.target))?;
    formatter.format_success(
        "symlink",
        &format!(
            "Linked {} -> {}",
            args.target.display(),
            args.source.display()
        ),
    );
    Ok(())
}
