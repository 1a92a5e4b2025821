//! Attribute commands: chmod, chown, set-times.

use crate::cli::ChmodArgs;
use crate::cli::ChownArgs;
use crate::cli::SetTimesArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

pub fn chmod(args: &ChmodArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_hint(filekit_core::set_permissions(&args.path, args.mode))?;
    formatter.format_success(
        "chmod",
        &format!("Mode of {} set to {:04o}", args.path.display(), args.mode),
    );
    Ok(())
}

pub fn chown(args: &ChownArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    if args.uid.is_none() && args.gid.is_none() {
        bail!("Nothing to change\nHINT: Pass --uid, --gid, or both.");
    }

    add_hint(filekit_core::set_owner(&args.path, args.uid, args.gid))?;

    let show = |id: Option<u32>| id.map_or_else(|| "unchanged".to_string(), |v| v.to_string());
    formatter.format_success(
        "chown",
        &format!(
            "Owner of {} set to uid {}, gid {}",
            args.path.display(),
            show(args.uid),
            show(args.gid)
        ),
    );
    Ok(())
}

pub fn set_times(args: &SetTimesArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let accessed = epoch_seconds(args.atime)?;
    let modified = epoch_seconds(args.mtime)?;
    add_hint(filekit_core::set_times(&args.path, accessed, modified))?;
    formatter.format_success(
        "set-times",
        &format!(
            "Times of {} set (modified {})",
            args.path.display(),
            humantime::format_rfc3339_seconds(modified)
        ),
    );
    Ok(())
}

fn epoch_seconds(secs: u64) -> Result<SystemTime> {
    match UNIX_EPOCH.checked_add(Duration::from_secs(secs)) {
        Some(time) => Ok(time),
        None => bail!(
            "Timestamp {secs} is out of range\nHINT: Pass seconds since the Unix epoch that this system can represent."
        ),
    }
}
