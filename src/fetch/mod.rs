//! Remote descriptor fetching
//!
//! Retrieves the version descriptor file from a repository at a given ref.
//! There is no protocol-agnostic "get file at ref" primitive across hosts,
//! so the strategy is picked per host family:
//!
//! - GitHub / GitLab expose raw-content endpoints over HTTPS
//! - SourceForge serves raw files through its web frontend
//! - everything else gets `git archive --remote`, then a depth-1 clone
//!
//! Every failure at this boundary is `None`. No retries, no caching: each
//! call is a fresh attempt against the remote.

mod fallback;
mod raw;

use crate::resolve::DescriptorFetcher;

/// Per-host fetch strategy, selected once per location.
///
/// Ordered pattern matching on the location string happens in
/// [`HostStrategy::for_location`]; fetching itself is variant dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStrategy {
    /// raw.githubusercontent.com raw-file endpoint
    GitHub { owner_repo: String },
    /// gitlab.com raw endpoint (the `/-/raw/` routing segment)
    GitLab { project_path: String },
    /// SourceForge web frontend, rewritten from the git.code.sf.net location
    SourceForge { web_url: String },
    /// Self-hosted or unknown: `git archive` probe, then shallow clone
    Generic { location: String },
    /// Known host whose project path could not be extracted; never fetches
    Unrecognized,
}

impl HostStrategy {
    /// Select the strategy for a repository location.
    pub fn for_location(location: &str) -> Self {
        if location.contains("github.com") {
            match owner_repo_from(location, "github.com") {
                Some(owner_repo) => HostStrategy::GitHub { owner_repo },
                None => HostStrategy::Unrecognized,
            }
        } else if location.contains("gitlab.com") {
            match project_path_from(location, "gitlab.com") {
                Some(project_path) => HostStrategy::GitLab { project_path },
                None => HostStrategy::Unrecognized,
            }
        } else if location.contains("git.code.sf.net") {
            HostStrategy::SourceForge {
                web_url: location.replace("git.code.sf.net", "sourceforge.net"),
            }
        } else {
            HostStrategy::Generic {
                location: location.to_string(),
            }
        }
    }

    /// Fetch the descriptor file at `reference`.
    pub fn fetch(&self, reference: &str, descriptor_path: &str) -> Option<String> {
        match self {
            HostStrategy::GitHub { owner_repo } => raw::http_get(&format!(
                "https://raw.githubusercontent.com/{owner_repo}/{reference}/{descriptor_path}"
            )),
            HostStrategy::GitLab { project_path } => raw::http_get(&format!(
                "https://gitlab.com/{project_path}/-/raw/{reference}/{descriptor_path}"
            )),
            HostStrategy::SourceForge { web_url } => raw::http_get(&format!(
                "{web_url}/ci/{reference}/tree/{descriptor_path}?format=raw"
            )),
            HostStrategy::Generic { location } => {
                fallback::fetch(location, reference, descriptor_path)
            }
            HostStrategy::Unrecognized => None,
        }
    }
}

/// Extract `owner/repo` after `host[:/]`, requiring exactly two path
/// segments (trailing `.git` stripped).
fn owner_repo_from(location: &str, host: &str) -> Option<String> {
    let rest = path_after_host(location, host)?;
    let rest = rest.trim_end_matches(".git");
    let (owner, repo) = rest.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some(format!("{owner}/{repo}"))
}

/// Extract the full project path after `host[:/]` (trailing `.git` stripped).
/// GitLab allows nested groups, so any non-empty remainder is accepted.
fn project_path_from(location: &str, host: &str) -> Option<String> {
    let rest = path_after_host(location, host)?;
    let rest = rest.trim_end_matches(".git");
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

fn path_after_host<'a>(location: &'a str, host: &str) -> Option<&'a str> {
    let idx = location.find(host)?;
    let rest = &location[idx + host.len()..];
    rest.strip_prefix('/')
        .or_else(|| rest.strip_prefix(':'))
        .map(|r| r.trim_end_matches('/'))
}

/// Fetcher over real remotes, carrying the descriptor path to request.
#[derive(Debug, Clone)]
pub struct RemoteFetcher {
    descriptor_path: String,
}

impl RemoteFetcher {
    pub fn new(descriptor_path: impl Into<String>) -> Self {
        Self {
            descriptor_path: descriptor_path.into(),
        }
    }
}

impl DescriptorFetcher for RemoteFetcher {
    fn fetch_descriptor(&self, location: &str, reference: &str) -> Option<String> {
        HostStrategy::for_location(location).fetch(reference, &self.descriptor_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_https_location() {
        let strategy = HostStrategy::for_location("https://github.com/acme/tool");
        assert_eq!(
            strategy,
            HostStrategy::GitHub {
                owner_repo: "acme/tool".to_string()
            }
        );
    }

    #[test]
    fn test_github_git_suffix_stripped() {
        let strategy = HostStrategy::for_location("https://github.com/acme/tool.git");
        assert_eq!(
            strategy,
            HostStrategy::GitHub {
                owner_repo: "acme/tool".to_string()
            }
        );
    }

    #[test]
    fn test_github_scp_style_location() {
        let strategy = HostStrategy::for_location("git@github.com:acme/tool.git");
        assert_eq!(
            strategy,
            HostStrategy::GitHub {
                owner_repo: "acme/tool".to_string()
            }
        );
    }

    #[test]
    fn test_github_extra_segments_unrecognized() {
        // Not an owner/repo location; the raw endpoint cannot be derived
        let strategy = HostStrategy::for_location("https://github.com/acme/tool/tree/main");
        assert_eq!(strategy, HostStrategy::Unrecognized);
    }

    #[test]
    fn test_gitlab_nested_groups() {
        let strategy = HostStrategy::for_location("https://gitlab.com/group/subgroup/tool.git");
        assert_eq!(
            strategy,
            HostStrategy::GitLab {
                project_path: "group/subgroup/tool".to_string()
            }
        );
    }

    #[test]
    fn test_sourceforge_domain_rewrite() {
        let strategy = HostStrategy::for_location("https://git.code.sf.net/p/zsh/code");
        assert_eq!(
            strategy,
            HostStrategy::SourceForge {
                web_url: "https://sourceforge.net/p/zsh/code".to_string()
            }
        );
    }

    #[test]
    fn test_generic_self_hosted() {
        let strategy = HostStrategy::for_location("https://git.example.org/tool.git");
        assert_eq!(
            strategy,
            HostStrategy::Generic {
                location: "https://git.example.org/tool.git".to_string()
            }
        );
    }

    #[test]
    fn test_generic_local_path() {
        let strategy = HostStrategy::for_location("/srv/git/tool");
        assert!(matches!(strategy, HostStrategy::Generic { .. }));
    }

    #[test]
    fn test_unrecognized_never_fetches() {
        assert_eq!(HostStrategy::Unrecognized.fetch("main", "Config/version.mk"), None);
    }
}
