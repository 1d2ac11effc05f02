use std::path::PathBuf;

use clap::Parser;

use super::OverrideArgs;

/// Arguments for the info command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show what an install was built from:\n    buildref info --prefix /opt/tool\n\n\
                  Preview before a build (no record yet):\n    buildref info --prefix /opt/tool --ref develop")]
pub struct InfoArgs {
    /// Install root to read the record from
    #[arg(long, value_name = "DIR")]
    pub prefix: PathBuf,

    /// Fallback inputs when no record exists yet
    #[command(flatten)]
    pub overrides: OverrideArgs,
}
