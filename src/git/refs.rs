//! Remote ref listing
//!
//! Uses `git ls-remote` so a branch can be resolved to its current head
//! without cloning anything.

use std::process::Command;

use crate::error::{BuildrefError, Result};

fn parse_sha_from_output(stdout: &str, git_ref: &str) -> Result<String> {
    let line = stdout
        .lines()
        .next()
        .ok_or_else(|| BuildrefError::GitRefResolveFailed {
            git_ref: git_ref.to_string(),
            reason: "git ls-remote returned no output".to_string(),
        })?;

    let sha = line
        .split_whitespace()
        .next()
        .ok_or_else(|| BuildrefError::GitRefResolveFailed {
            git_ref: git_ref.to_string(),
            reason: "could not parse ls-remote output".to_string(),
        })?;

    if sha.len() != 40 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BuildrefError::GitRefResolveFailed {
            git_ref: git_ref.to_string(),
            reason: format!("invalid SHA from ls-remote: {sha}"),
        });
    }

    Ok(sha.to_string())
}

/// Resolve a remote ref to its current SHA via `git ls-remote`.
///
/// Takes the first hash of the first matching line. Works against any
/// location git itself accepts (URLs, host:path, local paths), which also
/// makes it testable against local fixture repositories.
pub fn ls_remote(url: &str, git_ref: &str) -> Result<String> {
    let output = Command::new("git")
        .args(["ls-remote", "--exit-code", url, git_ref])
        .output()
        .map_err(|e| BuildrefError::GitRefResolveFailed {
            git_ref: git_ref.to_string(),
            reason: format!("git ls-remote failed: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BuildrefError::GitRefResolveFailed {
            git_ref: git_ref.to_string(),
            reason: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_sha_from_output(&stdout, git_ref)
}
