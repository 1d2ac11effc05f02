//! Resolve command implementation

use console::style;
use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::fetch::RemoteFetcher;
use crate::identity::{self, BuildIdentity};
use crate::progress::Spinner;
use crate::resolve::{self, BuildParams};

/// Full resolution output, also the `--json` shape
#[derive(Debug, Serialize)]
struct Resolution {
    repo: String,
    reference: String,
    version: String,
    version_label: String,
    commit_suffix: Option<String>,
    download_name: String,
}

impl Resolution {
    fn new(params: BuildParams, identity: BuildIdentity) -> Self {
        let download_name = identity::download_name(&params.repo);
        Self {
            repo: params.repo,
            reference: params.reference,
            version: params.version,
            version_label: identity.label(),
            commit_suffix: identity.commit_suffix,
            download_name,
        }
    }
}

/// Run resolve command
pub fn run(verbose: bool, args: ResolveArgs) -> Result<()> {
    let overrides = args.overrides.into_overrides(verbose);
    let fetcher = RemoteFetcher::new(overrides.descriptor_path());

    let spinner = Spinner::new("Resolving build parameters");
    let params = resolve::resolve_build_params(&overrides, &fetcher);
    spinner.set_message("Resolving remote head");
    let identity = identity::compute_identity(&params.repo, &params.reference, &params.version);
    spinner.finish();

    let resolution = Resolution::new(params, identity);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    println!("{} {}", style("Repository:").bold(), resolution.repo);
    println!("{}  {}", style("Reference:").bold(), resolution.reference);
    println!("{}    {}", style("Version:").bold(), resolution.version_label);
    println!("{}   {}", style("Download:").bold(), resolution.download_name);
    println!();
    println!(
        "{}",
        identity::display_line(&resolution.repo, &resolution.reference, &resolution.version)
    );

    Ok(())
}
