//! blockperm CLI: the `blockperm` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries reports (and JSON); logs go to stderr.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Decompose {
            matrix,
            system,
            max_dimension,
            realms,
            json,
        } => commands::decompose::run(commands::decompose::Args {
            matrix,
            system,
            max_dimension,
            realms,
            json,
        }),

        Commands::Permute {
            matrix,
            permutation,
            json,
        } => commands::permute::run(matrix, permutation, json),

        Commands::ZeroSets {
            matrix,
            max_dimension,
            json,
        } => commands::zero_sets::run(matrix, max_dimension, json),

        Commands::ParseSystem { input, json } => commands::parse_system::run(input, json),
    }
}
