use std::path::PathBuf;

use clap::Parser;

use super::OverrideArgs;

/// Arguments for the record command
#[derive(Parser, Debug)]
#[command(
    group = clap::ArgGroup::new("built_commit").required(true).args(["commit", "source_dir"]),
    after_help = "EXAMPLES:\n  \
                  Record from the checked-out build tree:\n    \
                  buildref record --prefix /opt/tool --source-dir ./build/src\n\n\
                  Record an explicit commit:\n    \
                  buildref record --prefix /opt/tool --commit 95b9b6b9b6ad98e32ef46fffa808f0c23fe08450"
)]
pub struct RecordArgs {
    /// Install root the build was installed under
    #[arg(long, value_name = "DIR")]
    pub prefix: PathBuf,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Commit hash that was actually built
    #[arg(long, value_name = "SHA")]
    pub commit: Option<String>,

    /// Checked-out source tree to read the built commit (HEAD) from
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,
}
