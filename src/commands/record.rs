//! Record command implementation
//!
//! Runs after a successful build: re-resolves the build parameters the same
//! way the build itself did, pairs them with the commit that was actually
//! compiled, and persists the record under the install prefix.

use console::style;

use crate::cli::RecordArgs;
use crate::error::{BuildrefError, Result};
use crate::fetch::RemoteFetcher;
use crate::git;
use crate::identity;
use crate::record::{self, InstalledBuildRecord};
use crate::resolve;

/// Run record command
pub fn run(verbose: bool, args: RecordArgs) -> Result<()> {
    if !args.prefix.is_dir() {
        return Err(BuildrefError::InvalidPrefix {
            path: args.prefix.display().to_string(),
        });
    }

    let overrides = args.overrides.clone().into_overrides(verbose);
    let fetcher = RemoteFetcher::new(overrides.descriptor_path());
    let params = resolve::resolve_build_params(&overrides, &fetcher);

    let Some(commit) = built_commit(&args) else {
        // A build without a resolvable commit is not an error; there is
        // just nothing trustworthy to compare against later.
        eprintln!("buildref: could not determine built commit, skipping record");
        return Ok(());
    };

    let record = InstalledBuildRecord::new(&params.repo, &params.reference, &params.version, &commit);
    record::record_build(&args.prefix, &record)?;

    println!(
        "{} {}",
        style("Recorded").green().bold(),
        identity::display_line(&params.repo, &params.reference, &params.version)
    );
    let short: String = commit.chars().take(8).collect();
    println!("  commit {} at {}", short, args.prefix.display());

    Ok(())
}

/// The commit that was actually built: explicit `--commit`, or HEAD of the
/// checked-out `--source-dir`. `None` when neither yields a usable hash.
fn built_commit(args: &RecordArgs) -> Option<String> {
    if let Some(commit) = &args.commit {
        let commit = commit.trim().to_string();
        return if commit.is_empty() { None } else { Some(commit) };
    }

    let source_dir = args.source_dir.as_ref()?;
    match git::head_commit(source_dir) {
        Ok(sha) => Some(sha),
        Err(e) => {
            eprintln!("buildref: {e}");
            None
        }
    }
}
