//! verdict: frequent and distinctive phrases in user reviews.
//!
//! Reads a review dataset, tokenizes each review for its language and ranks
//! the phrases that recur within a sentiment group or separate positive
//! reviews from negative ones.

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

/// Installs the stderr log subscriber.
///
/// Logging is off unless raised with `-v` (info) or `-vv` (debug). `RUST_LOG`
/// takes precedence over both.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "off",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
