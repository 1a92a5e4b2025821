//! Download command implementation.

use crate::cli::DownloadArgs;
use crate::error::add_hint;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use filekit_core::DownloadConfig;
use filekit_core::NoopProgress;

pub fn execute(
    args: &DownloadArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let config = DownloadConfig::default().with_timeout(args.timeout);

    // The body length is only known once the response arrives, so a spinner
    // is used instead of a bar.
    let report = if show_progress {
        let mut progress = CliProgress::new(None, "Downloading");
        add_hint(filekit_core::download_with_progress(
            &args.output,
            &args.url,
            &config,
            &mut progress,
        ))?
    } else {
        add_hint(filekit_core::download_with_progress(
            &args.output,
            &args.url,
            &config,
            &mut NoopProgress,
        ))?
    };

    formatter.format_download_result(&args.url, &args.output, &report)
}
