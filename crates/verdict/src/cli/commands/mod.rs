//! Command implementations and dispatch.

pub mod config;
pub mod distinctive;
pub mod init;
pub mod ngrams;
pub mod status;
pub mod summary;
pub mod tokenize;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Ngrams(cmd) => ngrams::run(ctx, &cmd),
        Commands::Distinctive(cmd) => distinctive::run(ctx, &cmd),
        Commands::Tokenize(cmd) => tokenize::run(ctx, &cmd),
        Commands::Summary(cmd) => summary::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
    }
}
