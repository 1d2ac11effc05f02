use std::path::PathBuf;

use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check an installed build:\n    buildref status --prefix /opt/tool\n\n\
                  Fail a pipeline on staleness:\n    buildref status --prefix /opt/tool --exit-code\n\n\
                  Machine-readable output:\n    buildref status --prefix /opt/tool --json")]
pub struct StatusArgs {
    /// Install root to check
    #[arg(long, value_name = "DIR")]
    pub prefix: PathBuf,

    /// Exit nonzero when the installed build is stale
    #[arg(long = "exit-code")]
    pub exit_code: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
