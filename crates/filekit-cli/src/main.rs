//! filekit CLI - Command-line front end for everyday file operations.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use cli::Commands;
use output::OutputFormatter;
use progress::CliProgress;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `FILEKIT_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FILEKIT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "filekit_core={default_level},filekit={default_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    // Use progress bar if TTY is detected (not quiet, not JSON, is terminal)
    let show_progress = !cli.quiet && !cli.json && CliProgress::should_show();

    match &cli.command {
        Commands::Touch(args) => commands::files::touch(args, formatter),
        Commands::Truncate(args) => commands::files::truncate(args, formatter),
        Commands::Info(args) => commands::info::execute(args, formatter),
        Commands::Mv(args) => commands::files::rename(args, formatter),
        Commands::Rm(args) => commands::files::remove(args, formatter),
        Commands::Check(args) => commands::files::check(args, formatter),
        Commands::Chmod(args) => commands::attrs::chmod(args, formatter),
        Commands::Chown(args) => commands::attrs::chown(args, formatter),
        Commands::SetTimes(args) => commands::attrs::set_times(args, formatter),
        Commands::Link(args) => commands::links::hard_link(args, formatter),
        Commands::Symlink(args) => commands::links::symlink(args, formatter),
        Commands::Cp(args) => commands::copy::execute(args, formatter),
        Commands::Seek(args) => commands::files::seek(args, formatter),
        Commands::Write(args) => commands::files::write(args, formatter),
        Commands::Read(args) => commands::files::read(args, formatter),
        Commands::Zip(args) => commands::archive::create(args, formatter, show_progress),
        Commands::Unzip(args) => commands::archive::extract(args, formatter, show_progress),
        Commands::LsZip(args) => commands::archive::list(args, formatter),
        Commands::Gzip(args) => commands::gzip::compress(args, formatter),
        Commands::Gunzip(args) => commands::gzip::decompress(args, formatter),
        Commands::Checksum(args) => commands::checksum::execute(args, formatter),
        Commands::Download(args) => commands::download::execute(args, formatter, show_progress),
        Commands::Completion(args) => {
            commands::completion::execute(args);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match run(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}
