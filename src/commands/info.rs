//! Info command implementation
//!
//! Shows what an install was built from. Recorded values win over a fresh
//! resolution; before any record exists the command previews what a build
//! would use right now.

use console::style;

use crate::cli::InfoArgs;
use crate::config::{DEFAULT_REF, DEFAULT_REPO, DEFAULT_VERSION};
use crate::error::Result;
use crate::fetch::RemoteFetcher;
use crate::progress::Spinner;
use crate::record::RecordFile;
use crate::resolve;

/// Run info command
pub fn run(verbose: bool, args: InfoArgs) -> Result<()> {
    match RecordFile::load(&args.prefix) {
        Some(record) => print_recorded(&record),
        None => print_resolved(verbose, args),
    }
    Ok(())
}

fn print_recorded(record: &RecordFile) {
    println!("{}", style("Build information:").bold());
    println!("  Repository: {}", record.repo().unwrap_or(DEFAULT_REPO));
    println!("  Reference:  {}", record.reference().unwrap_or(DEFAULT_REF));
    println!("  Version:    {}", record.version().unwrap_or(DEFAULT_VERSION));
    if let Some(commit) = record.resolved_commit() {
        println!("  Commit:     {commit}");
    }
    if let Some(installed_at) = record.installed_at() {
        println!("  Installed:  {installed_at}");
    }
}

fn print_resolved(verbose: bool, args: InfoArgs) {
    let overrides = args.overrides.into_overrides(verbose);
    let fetcher = RemoteFetcher::new(overrides.descriptor_path());

    let spinner = Spinner::new("Resolving build parameters");
    let params = resolve::resolve_build_params(&overrides, &fetcher);
    spinner.finish();

    println!("{}", style("Build information (not yet recorded):").bold());
    println!("  Repository: {}", params.repo);
    println!("  Reference:  {}", params.reference);
    println!("  Version:    {}", params.version);
}
