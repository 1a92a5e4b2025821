//! Basic file commands: touch, truncate, mv, rm, check, write, read, seek.

use crate::cli::CheckArgs;
use crate::cli::PathArgs;
use crate::cli::ReadArgs;
use crate::cli::SeekArgs;
use crate::cli::TruncateArgs;
use crate::cli::TwoPathArgs;
use crate::cli::WriteArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::io::Read;

pub fn touch(args: &PathArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::create_empty(&args.path))?;
    formatter.format_success("touch", &format!("Created {}", args.path.display()));
    Ok(())
}

pub fn truncate(args: &TruncateArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::truncate(&args.path, args.size))?;
    formatter.format_success(
        "truncate",
        &format!("Resized {} to {} bytes", args.path.display(), args.size),
    );
    Ok(())
}

pub fn rename(args: &TwoPathArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::rename(&args.source, &args.target))?;
    formatter.format_success(
        "mv",
        &format!(
            "Renamed {} -> {}",
            args.source.display(),
            args.target.display()
        ),
    );
    Ok(())
}

pub fn remove(args: &PathArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::remove(&args.path))?;
    formatter.format_success("rm", &format!("Removed {}", args.path.display()));
    Ok(())
}

pub fn check(args: &CheckArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::check_readable(&args.path))?;
    let access = if args.write {
        add_hint(filekit_core::check_writable(&args.path))?;
        "readable and writable"
    } else {
        "readable"
    };
    formatter.format_success("check", &format!("{} is {access}", args.path.display()));
    Ok(())
}

pub fn write(args: &WriteArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let content = match &args.content {
        Some(text) => text.clone().into_bytes(),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read content from stdin")?;
            buf
        }
    };

    if args.append {
        add_hint(filekit_core::append(&args.path, &content))?;
    } else {
        add_hint(filekit_core::write(&args.path, &content))?;
    }

    formatter.format_success(
        "write",
        &format!("Wrote {} bytes to {}", content.len(), args.path.display()),
    );
    Ok(())
}

pub fn read(args: &ReadArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let content = match args.len {
        Some(len) => {
            let len = usize::try_from(len).context("read length does not fit in memory")?;
            add_hint(filekit_core::read(&args.path, len))?
        }
        None => add_hint(filekit_core::read_to_end(&args.path))?,
    };
    formatter.format_content(&args.path, &content)
}

pub fn seek(args: &SeekArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let position = add_hint(filekit_core::seek(
        &args.path,
        args.offset,
        args.whence.into(),
    ))?;
    formatter.format_position(&args.path, position)
}
