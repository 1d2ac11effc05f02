//! Build identity
//!
//! Turns a resolved (repo, reference, version) triple into the stable
//! identity used for version labels and cache-safe download names. A
//! 40-char lowercase-hex reference is immutable and carries its own
//! identity; a branch name is pinned to the current remote head when the
//! remote answers, and degrades to the bare version when it does not.

use serde::Serialize;

use crate::git::refs;

/// Length of the commit prefix used in version labels
const SUFFIX_LEN: usize = 8;

/// Length of the location fingerprint used in download names
const FINGERPRINT_LEN: usize = 8;

/// True iff `reference` is a full commit hash: exactly 40 lowercase
/// hexadecimal characters. The sole discriminator between immutable and
/// moving references.
pub fn is_commit_reference(reference: &str) -> bool {
    reference.len() == 40
        && reference
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Current remote head of `reference`, or `None`.
///
/// Commit references cannot move, so they return `None` without any lookup.
/// Branch lookups go through `git ls-remote`; every failure (unreachable
/// remote, unknown ref, unparseable output) is `None`, never an error.
pub fn remote_head(repo: &str, reference: &str) -> Option<String> {
    if is_commit_reference(reference) {
        return None;
    }
    refs::ls_remote(repo, reference).ok()
}

/// Display/cache identity of a resolved build
#[derive(Debug, Clone, Serialize)]
pub struct BuildIdentity {
    pub version: String,
    pub commit_suffix: Option<String>,
}

impl BuildIdentity {
    /// Human-visible version label, e.g. `5.9-95b9b6b9` or bare `5.9`
    pub fn label(&self) -> String {
        match &self.commit_suffix {
            Some(suffix) => format!("{}-{}", self.version, suffix),
            None => self.version.clone(),
        }
    }
}

/// Compute the identity for a resolved triple.
///
/// Commit reference: suffix is the first 8 chars of the reference itself.
/// Branch reference: suffix is the first 8 chars of the current remote
/// head when resolvable, otherwise no suffix.
pub fn compute_identity(repo: &str, reference: &str, version: &str) -> BuildIdentity {
    let commit_suffix = if is_commit_reference(reference) {
        Some(reference[..SUFFIX_LEN].to_string())
    } else {
        remote_head(repo, reference).map(|head| head[..SUFFIX_LEN].to_string())
    };

    BuildIdentity {
        version: version.to_string(),
        commit_suffix,
    }
}

/// Fixed-width fingerprint of a repository location.
///
/// Computed from the location string alone so that two different
/// repositories never collide on a shared cache or download name.
pub fn repo_fingerprint(location: &str) -> String {
    blake3::hash(location.as_bytes()).to_hex()[..FINGERPRINT_LEN].to_string()
}

/// Cache-safe download name for a location, e.g. `code-3fa9c1d2`
pub fn download_name(location: &str) -> String {
    format!("{}-{}", repo_short_name(location), repo_fingerprint(location))
}

/// Last path segment of a location, trimmed of `.git` (falls back to "src")
fn repo_short_name(location: &str) -> &str {
    location
        .trim_end_matches('/')
        .trim_end_matches(".git")
        .rsplit(['/', ':'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("src")
}

/// Descriptive line combining version, repository and reference, e.g.
/// `5.9 (from zsh/code @ master)`
pub fn display_line(repo: &str, reference: &str, version: &str) -> String {
    let segments: Vec<&str> = repo
        .trim_end_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    let tail = match segments.len() {
        0 => repo.to_string(),
        1 => segments[0].to_string(),
        n => segments[n - 2..].join("/"),
    };
    format!("{version} (from {tail} @ {reference})")
}
