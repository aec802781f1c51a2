#![deny(unsafe_code)]

//! Demonstration binary for `lvlog`.
//!
//! Configures the process-wide logger from `--log-level` / `--log-file`,
//! then writes one line per severity. With `--fatal` it ends with a fatal
//! write, exiting with status 1.

use std::process::ExitCode;

use clap::Parser;
use lvlog::LogArgs;

/// Writes one line per severity through the lvlog facade.
#[derive(Parser, Debug)]
#[command(name = "lvlog-demo")]
#[command(about = "Writes one line per severity through the lvlog facade")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,

    /// Text appended to every demo line.
    #[arg(long, default_value = "demo message")]
    message: String,

    /// Finish with a fatal write instead of exiting normally.
    #[arg(long)]
    fatal: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    lvlog::init_from_args(&cli.log);

    #[cfg(feature = "tracing")]
    if let Err(error) = lvlog::init_tracing() {
        lvlog::warningf!("tracing bridge not installed: {error}");
    }

    lvlog::debugf!("debugf: {}", cli.message);
    lvlog::info!("info: ", cli.message);
    lvlog::warningf!("warningf: {}", cli.message);
    lvlog::error!("error: ", cli.message);

    #[cfg(feature = "tracing")]
    tracing::info!(via = "tracing", "{}", cli.message);

    if cli.fatal {
        lvlog::fatalf!("fatalf: {}", cli.message);
    }

    ExitCode::SUCCESS
}
