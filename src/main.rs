//! Buildref - build identity resolution for from-source installs
//!
//! Resolves the repository, reference and version a build should use,
//! records what was actually built, and answers later whether the installed
//! build is stale relative to its upstream reference.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod descriptor;
mod error;
mod fetch;
mod git;
mod identity;
mod progress;
mod record;
mod resolve;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose || config::debug_env_enabled();

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(verbose, args),
        Commands::Record(args) => commands::record::run(verbose, args),
        Commands::Status(args) => commands::status::run(verbose, args),
        Commands::Info(args) => commands::info::run(verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
