//! Local git plumbing
//!
//! This module handles:
//! - Shallow-cloning a single branch of a repository (descriptor fallback)
//! - Reading the HEAD commit of a checked-out build tree
//! - Authentication via git's native credential system
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Environment variables (GIT_SSH_COMMAND, etc.)

pub mod refs;

use std::path::Path;

use git2::{
    Cred, CredentialType, ErrorClass, FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder,
};

use crate::error::{BuildrefError, Result};

/// Normalize SCP-style locations (git@host:path) to ssh:// form.
///
/// libgit2 may have issues with SCP-style SSH URLs, so they are rewritten to
/// the explicit ssh:// format before cloning.
fn normalize_ssh_url(url: &str) -> std::borrow::Cow<'_, str> {
    if !url.starts_with("git@") || url.starts_with("ssh://") {
        return std::borrow::Cow::Borrowed(url);
    }

    if let Some(colon_pos) = url.find(':') {
        let host_part = &url[..colon_pos];
        let path_part = &url[colon_pos + 1..];
        let normalized_path = if path_part.starts_with('/') {
            path_part.to_string()
        } else {
            format!("/{}", path_part)
        };
        return std::borrow::Cow::Owned(format!("ssh://{}{}", host_part, normalized_path));
    }

    std::borrow::Cow::Borrowed(url)
}

fn is_local_url(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || Path::new(url).is_absolute()
}

/// Interpret a git2 error and provide a more user-friendly message
fn interpret_git_error(err: &git2::Error) -> String {
    let class = err.class();
    let message = err.message().to_lowercase();

    // More specific patterns first
    if message.contains("not found") || message.contains("404") {
        "Repository not found".to_string()
    } else if message.contains("too many redirects") || message.contains("authentication replays") {
        "Repository not found".to_string()
    } else if message.contains("authentication") || message.contains("credentials") {
        "Authentication failed".to_string()
    } else if message.contains("permission denied") || message.contains("access denied") {
        "Permission denied".to_string()
    } else if message.contains("connection")
        || message.contains("network")
        || message.contains("timeout")
        || message.contains("timed out")
    {
        "Network error".to_string()
    } else if class == ErrorClass::Http {
        if message.contains("certificate") {
            "Certificate error".to_string()
        } else if message.contains("ssl") {
            "SSL error".to_string()
        } else {
            format!("HTTP error: {}", err.message())
        }
    } else if class == ErrorClass::Ssh {
        format!("SSH error: {}", err.message())
    } else {
        err.message().to_string()
    }
}

/// Shallow-clone a single branch into `target`.
///
/// Depth-1 fetch to minimize transfer; branch refs only (a commit hash is
/// not a clonable branch, callers handle that case before getting here).
pub fn clone_branch_shallow(url: &str, branch: &str, target: &Path) -> Result<Repository> {
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);

    // Shallow fetch is not supported for local paths
    if !is_local_url(url) {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);
    builder.branch(branch);

    let url_to_clone = normalize_ssh_url(url);
    builder.clone(url_to_clone.as_ref(), target).map_err(|e| {
        let reason = interpret_git_error(&e);
        BuildrefError::GitCloneFailed {
            url: url.to_string(),
            reason,
        }
    })
}

/// Resolve the HEAD commit of a checked-out source tree to a full SHA.
///
/// Used after a build to record which commit was actually compiled.
pub fn head_commit(path: &Path) -> Result<String> {
    let repo = Repository::discover(path).map_err(|e| BuildrefError::GitOpenFailed {
        path: path.display().to_string(),
        reason: e.message().to_string(),
    })?;

    let commit = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .map_err(|e| BuildrefError::GitRefResolveFailed {
            git_ref: "HEAD".to_string(),
            reason: e.message().to_string(),
        })?;

    Ok(commit.id().to_string())
}

/// Set up authentication callbacks for git operations
///
/// This delegates authentication to git's native credential system:
/// - SSH keys from ~/.ssh/
/// - SSH agent
/// - Git credential helpers
/// - Username/password from environment
fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks) {
    callbacks.credentials(|url, username_from_url, allowed_types| {
        // Default credentials (for public repos) first
        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(username) = username_from_url {
                if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }

                let home = dirs::home_dir().unwrap_or_default();
                let ssh_dir = home.join(".ssh");

                for key_name in &["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let private_key = ssh_dir.join(key_name);
                    let public_key = ssh_dir.join(format!("{}.pub", key_name));

                    if private_key.exists() {
                        let public_key_path = if public_key.exists() {
                            Some(public_key.as_path())
                        } else {
                            None
                        };

                        if let Ok(cred) =
                            Cred::ssh_key(username, public_key_path, &private_key, None)
                        {
                            return Ok(cred);
                        }
                    }
                }
            }
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            if let Ok(config) = git2::Config::open_default() {
                if let Ok(cred) = Cred::credential_helper(&config, url, username_from_url) {
                    return Ok(cred);
                }
            }

            // Public HTTPS repos: empty credentials let the server answer
            if let Ok(cred) = Cred::userpass_plaintext("", "") {
                return Ok(cred);
            }

            if let Some(username) = username_from_url {
                if let Ok(cred) = Cred::userpass_plaintext(username, "") {
                    return Ok(cred);
                }
            }
        }

        Err(git2::Error::new(
            git2::ErrorCode::Auth,
            git2::ErrorClass::Http,
            "authentication failed",
        ))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo_with_commit(path: &Path) -> git2::Oid {
        let repo = Repository::init(path).unwrap();
        let sig = git2::Signature::now("Test", "test@test.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap()
    }

    #[test]
    fn test_head_commit() {
        let temp = TempDir::new().unwrap();
        let oid = init_repo_with_commit(temp.path());

        let sha = head_commit(temp.path()).unwrap();
        assert_eq!(sha, oid.to_string());
        assert_eq!(sha.len(), 40);
    }

    #[test]
    fn test_head_commit_nested_dir() {
        let temp = TempDir::new().unwrap();
        let oid = init_repo_with_commit(temp.path());

        let nested = temp.path().join("Src/Modules");
        std::fs::create_dir_all(&nested).unwrap();

        let sha = head_commit(&nested).unwrap();
        assert_eq!(sha, oid.to_string());
    }

    #[test]
    fn test_head_commit_not_a_repo() {
        let temp = TempDir::new().unwrap();
        let result = head_commit(temp.path());
        assert!(matches!(result, Err(BuildrefError::GitOpenFailed { .. })));
    }

    #[test]
    fn test_head_commit_empty_repo() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        // HEAD exists but points at an unborn branch
        let result = head_commit(temp.path());
        assert!(matches!(
            result,
            Err(BuildrefError::GitRefResolveFailed { .. })
        ));
    }

    #[test]
    fn test_normalize_ssh_url() {
        assert_eq!(
            normalize_ssh_url("git@github.com:user/repo.git"),
            "ssh://git@github.com/user/repo.git"
        );
        assert_eq!(
            normalize_ssh_url("ssh://git@github.com/user/repo.git"),
            "ssh://git@github.com/user/repo.git"
        );
        assert_eq!(
            normalize_ssh_url("https://github.com/user/repo.git"),
            "https://github.com/user/repo.git"
        );
        assert_eq!(
            normalize_ssh_url("git@github.com:/absolute/path/repo.git"),
            "ssh://git@github.com/absolute/path/repo.git"
        );
    }

    #[test]
    fn test_clone_branch_shallow_local_repo() {
        let src = TempDir::new().unwrap();
        init_repo_with_commit(src.path());

        // Local clones skip the shallow fetch option
        let target = TempDir::new().unwrap();
        let target_path = target.path().join("clone");
        let head_name = {
            let repo = Repository::open(src.path()).unwrap();
            repo.head().unwrap().shorthand().unwrap().to_string()
        };
        let result = clone_branch_shallow(
            src.path().to_str().unwrap(),
            &head_name,
            &target_path,
        );
        assert!(result.is_ok());
        assert!(target_path.join(".git").exists());
    }

    #[test]
    fn test_clone_branch_shallow_missing_branch() {
        let src = TempDir::new().unwrap();
        init_repo_with_commit(src.path());

        let target = TempDir::new().unwrap();
        let result = clone_branch_shallow(
            src.path().to_str().unwrap(),
            "no-such-branch",
            &target.path().join("clone"),
        );
        assert!(matches!(result, Err(BuildrefError::GitCloneFailed { .. })));
    }
}
