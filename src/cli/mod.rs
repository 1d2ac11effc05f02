//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - record: Record command arguments
//! - status: Status command arguments
//! - info: Info command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};

pub mod completions;
pub mod info;
pub mod record;
pub mod resolve;
pub mod status;

pub use completions::CompletionsArgs;
pub use info::InfoArgs;
pub use record::RecordArgs;
pub use resolve::ResolveArgs;
pub use status::StatusArgs;

use crate::config::Overrides;

/// Buildref - build identity resolution for from-source installs
///
/// Resolve the repository, reference and version a build should use, record
/// what was built, and check later whether upstream has moved on.
#[derive(Parser, Debug)]
#[command(
    name = "buildref",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build identity resolution and staleness tracking for from-source installs",
    long_about = "Buildref resolves a canonical build identity (repository, reference, version) \
                  for a source-controlled project, records it after a build, and answers later \
                  whether the installed build is stale relative to its upstream reference.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  buildref resolve                            \x1b[90m# Resolve repo/ref/version with defaults\x1b[0m\n   \
                  buildref resolve --ref develop              \x1b[90m# Resolve against a branch\x1b[0m\n   \
                  buildref record --prefix /opt/tool --source-dir ./src \x1b[90m# Record after a build\x1b[0m\n   \
                  buildref status --prefix /opt/tool          \x1b[90m# Has upstream moved?\x1b[0m\n   \
                  buildref info --prefix /opt/tool            \x1b[90m# Show recorded build info\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Surface swallowed remote failures as diagnostics on stderr
    /// (also enabled by setting BUILDREF_DEBUG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve repository, reference and version for a build
    Resolve(ResolveArgs),

    /// Record build identity under the install prefix
    Record(RecordArgs),

    /// Check whether the installed build is stale
    Status(StatusArgs),

    /// Show recorded build information
    Info(InfoArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Resolution inputs shared by the resolve, record and info commands.
///
/// Each option falls back to its `BUILDREF_*` environment variable, then to
/// the built-in default.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Repository to build from (URI or host:path form)
    #[arg(long, env = "BUILDREF_REPO", value_name = "URL")]
    pub repo: Option<String>,

    /// Branch, tag, or 40-char commit hash to build
    #[arg(long = "ref", env = "BUILDREF_REF", value_name = "REF")]
    pub reference: Option<String>,

    /// Version label (skips auto-detection)
    #[arg(long, env = "BUILDREF_VERSION", value_name = "VERSION")]
    pub version: Option<String>,

    /// Path of the version descriptor inside the source tree
    #[arg(
        long = "descriptor-path",
        env = "BUILDREF_DESCRIPTOR_PATH",
        value_name = "PATH"
    )]
    pub descriptor_path: Option<String>,
}

impl OverrideArgs {
    /// Combine the argument values with the global debug toggle
    pub fn into_overrides(self, debug: bool) -> Overrides {
        Overrides {
            repo: self.repo,
            reference: self.reference,
            version: self.version,
            descriptor_path: self.descriptor_path,
            debug,
        }
    }
}
