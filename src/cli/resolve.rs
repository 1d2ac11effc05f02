use clap::Parser;

use super::OverrideArgs;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve with built-in defaults:\n    buildref resolve\n\n\
                  Resolve a fork's branch:\n    buildref resolve --repo https://github.com/acme/zsh --ref develop\n\n\
                  Pin to a commit:\n    buildref resolve --ref 95b9b6b9b6ad98e32ef46fffa808f0c23fe08450\n\n\
                  Machine-readable output:\n    buildref resolve --json")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,
}
