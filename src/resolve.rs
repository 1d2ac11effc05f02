//! Build parameter resolution
//!
//! Decides the (repo, reference, version) triple for a run. Repo and ref
//! come from overrides or defaults. The version tries three tiers in order:
//! explicit override, auto-detection from the upstream descriptor, fixed
//! default. The result always carries a non-empty version; auto-detection
//! failures never escape this layer.

use serde::Serialize;

use crate::config::{DEFAULT_VERSION, Overrides};
use crate::descriptor;

/// Seam for descriptor retrieval so resolution is testable against
/// simulated remote outcomes.
pub trait DescriptorFetcher {
    /// Descriptor text at `reference` of `location`, or `None` on any failure
    fn fetch_descriptor(&self, location: &str, reference: &str) -> Option<String>;
}

/// A fully resolved set of build parameters
#[derive(Debug, Clone, Serialize)]
pub struct BuildParams {
    pub repo: String,
    pub reference: String,
    pub version: String,
}

/// Resolve repo, reference and version for this run.
///
/// Precedence per input: explicit override, then built-in default; for the
/// version, auto-detection sits between the two. Lower tiers never depend
/// on network success: a dead remote still resolves to the default version.
pub fn resolve_build_params(
    overrides: &Overrides,
    fetcher: &dyn DescriptorFetcher,
) -> BuildParams {
    let repo = overrides.repo().to_string();
    let reference = overrides.reference().to_string();

    let version = match overrides.version() {
        Some(version) => version.to_string(),
        None => detect_version(&repo, &reference, overrides, fetcher)
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
    };

    BuildParams {
        repo,
        reference,
        version,
    }
}

/// Auto-detect the version from the upstream descriptor file.
///
/// All fetch and parse failures collapse to `None`; with the debug toggle
/// set they are reported on stderr without changing the outcome.
fn detect_version(
    repo: &str,
    reference: &str,
    overrides: &Overrides,
    fetcher: &dyn DescriptorFetcher,
) -> Option<String> {
    let content = match fetcher.fetch_descriptor(repo, reference) {
        Some(content) => content,
        None => {
            if overrides.debug {
                eprintln!("buildref: version detection failed: no descriptor at {reference} of {repo}");
            }
            return None;
        }
    };

    let version = descriptor::parse_version(&content);
    if version.is_none() && overrides.debug {
        eprintln!("buildref: version detection failed: descriptor has no usable VERSION line");
    }
    version
}
