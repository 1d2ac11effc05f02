//! Generic-host descriptor fetch
//!
//! For hosts without a raw-content endpoint: ask the remote for the single
//! file via `git archive` first, and only if that yields nothing pay for a
//! depth-1 clone. The clone lands in a scoped temporary directory that is
//! removed on every exit path (TempDir RAII), success or failure.

use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::git;

/// Fetch `descriptor_path` at `reference` from a generic location.
pub fn fetch(location: &str, reference: &str, descriptor_path: &str) -> Option<String> {
    archive_at_ref(location, reference, descriptor_path)
        .or_else(|| shallow_clone_read(location, reference, descriptor_path))
}

/// `git archive --remote=<location> <ref> <path> | tar -xO`
///
/// Requests a single path at a ref without a full clone. Many hosts disable
/// the archive service; that shows up as a non-zero exit and yields `None`.
fn archive_at_ref(location: &str, reference: &str, descriptor_path: &str) -> Option<String> {
    let archive = Command::new("git")
        .args(["archive", &format!("--remote={location}"), reference, descriptor_path])
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !archive.status.success() || archive.stdout.is_empty() {
        return None;
    }

    let mut tar = Command::new("tar")
        .arg("-xO")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    tar.stdin.take()?.write_all(&archive.stdout).ok()?;
    let extracted = tar.wait_with_output().ok()?;
    if !extracted.status.success() {
        return None;
    }

    let content = String::from_utf8(extracted.stdout).ok()?;
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

/// Depth-1 clone of the branch into a scoped temp directory, then read the
/// descriptor from the checked-out tree.
fn shallow_clone_read(location: &str, reference: &str, descriptor_path: &str) -> Option<String> {
    let temp_dir = tempfile::TempDir::new_in(temp_dir_base()).ok()?;
    let checkout = temp_dir.path().join("checkout");

    git::clone_branch_shallow(location, reference, &checkout).ok()?;

    let content = fs::read_to_string(checkout.join(descriptor_path)).ok()?;
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
    // temp_dir dropped here, removing the clone
}

/// Absolute base for temp directories, so a relative TMPDIR (e.g.
/// `TMPDIR=tmp`) never creates clone directories under the current working
/// directory.
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}
