//! Info command implementation.

use crate::cli::InfoArgs;
use crate::error::add_hint;
use crate::output::InfoView;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn execute(args: &InfoArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let info = if args.no_follow {
        add_hint(filekit_core::lstat(&args.path))?
    } else {
        add_hint(filekit_core::stat(&args.path))?
    };

    let link_target = if info.is_symlink {
        Some(add_hint(filekit_core::read_link(&args.path))?)
    } else {
        None
    };

    let same_as = match &args.same_as {
        Some(other) => Some((
            other.as_path(),
            add_hint(filekit_core::same_file(&args.path, other))?,
        )),
        None => None,
    };

    formatter.format_file_info(&InfoView {
        path: &args.path,
        info: &info,
        link_target,
        same_as,
    })
}
