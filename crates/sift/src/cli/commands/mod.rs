//! Command implementations and dispatch.

pub mod classify;
pub mod config;
pub mod demo;
pub mod evaluate;
pub mod ingest;
pub mod init;
pub mod interview;
pub mod onboard;
pub mod report;
pub mod screen;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Ingest(cmd) => ingest::run(ctx, &cmd),
        Commands::Match(cmd) => screen::run(ctx, &cmd),
        Commands::Report(cmd) => report::run(ctx, &cmd),
        Commands::Classify(cmd) => classify::run(ctx, &cmd),
        Commands::Demo(cmd) => demo::run(ctx, &cmd),
        Commands::Interview(cmd) => interview::run(&cmd),
        Commands::Onboard(cmd) => onboard::run(&cmd),
        Commands::Evaluate(cmd) => evaluate::run(&cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Status => status::run(ctx),
    }
}
