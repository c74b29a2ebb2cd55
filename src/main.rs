//! gap: switch git identities automatically based on the remote URL.
//!
//! This is the main entry point for the `gap` CLI. It parses arguments,
//! resolves the home-directory context, dispatches to the appropriate
//! command handler, and maps errors to exit codes.

mod cli;
mod commands;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod gitconfig;
pub mod paths;
pub mod pattern;
pub mod profile;
pub mod settings;
pub mod ssh;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::GapContext;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `GAP_LOG=debug`.
const LOG_ENV: &str = "GAP_LOG";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing();

    let result = GapContext::resolve().and_then(|ctx| commands::dispatch(&ctx, cli.command));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
