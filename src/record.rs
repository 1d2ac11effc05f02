//! Install record persistence and staleness
//!
//! After a successful build, a `COMMIT_INFO` file under the install prefix
//! captures what was built and from where. Later staleness checks only read
//! this file and ask the remote whether the recorded branch has moved.
//!
//! The flat `KEY=value` format is the durable contract between a build and
//! its later checks; records written by earlier installs keep working.
//!
//! Staleness fails closed: on a missing record, a commit-pinned install, or
//! any failed remote lookup the answer is "not outdated". A transient
//! network error must never produce a spurious rebuild prompt.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use crate::error::{BuildrefError, Result};
use crate::identity::{self, is_commit_reference};

/// Record file name under the install prefix
pub const RECORD_FILE: &str = "COMMIT_INFO";

const KEY_REPO: &str = "REPO";
const KEY_REF: &str = "REF";
const KEY_VERSION: &str = "VERSION";
const KEY_COMMIT: &str = "COMMIT";
const KEY_INSTALLED_AT: &str = "INSTALLED_AT";
const KEY_IS_COMMIT_REF: &str = "IS_COMMIT_REF";

/// Metadata persisted after a successful build
#[derive(Debug, Clone)]
pub struct InstalledBuildRecord {
    pub repo: String,
    pub reference: String,
    pub version: String,
    pub resolved_commit: String,
    pub installed_at: String,
    pub is_commit_ref: bool,
}

impl InstalledBuildRecord {
    /// Build a record stamped with the current UTC time.
    pub fn new(repo: &str, reference: &str, version: &str, resolved_commit: &str) -> Self {
        Self {
            repo: repo.to_string(),
            reference: reference.to_string(),
            version: version.to_string(),
            resolved_commit: resolved_commit.to_string(),
            installed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            is_commit_ref: is_commit_reference(reference),
        }
    }

    fn render(&self) -> String {
        format!(
            "{KEY_REPO}={}\n{KEY_REF}={}\n{KEY_VERSION}={}\n{KEY_COMMIT}={}\n\
             {KEY_INSTALLED_AT}={}\n{KEY_IS_COMMIT_REF}={}\n",
            self.repo,
            self.reference,
            self.version,
            self.resolved_commit,
            self.installed_at,
            self.is_commit_ref,
        )
    }
}

/// Write the record under `prefix`, replacing any prior record wholly.
pub fn record_build(prefix: &Path, record: &InstalledBuildRecord) -> Result<()> {
    let path = prefix.join(RECORD_FILE);
    fs::write(&path, record.render()).map_err(|e| BuildrefError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// A loaded record file, keyed access to whatever fields it carries.
///
/// Older or hand-edited records may miss keys; readers decide per key what
/// absence means instead of rejecting the file.
#[derive(Debug)]
pub struct RecordFile {
    fields: HashMap<String, String>,
}

impl RecordFile {
    /// Load the record under `prefix`, `None` when no record exists or it
    /// cannot be read.
    pub fn load(prefix: &Path) -> Option<Self> {
        let text = fs::read_to_string(prefix.join(RECORD_FILE)).ok()?;
        Some(Self::parse(&text))
    }

    fn parse(text: &str) -> Self {
        let mut fields = HashMap::new();
        for line in text.lines() {
            if let Some((key, value)) = line.trim().split_once('=') {
                fields.insert(key.to_string(), value.to_string());
            }
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn repo(&self) -> Option<&str> {
        self.get(KEY_REPO)
    }

    pub fn reference(&self) -> Option<&str> {
        self.get(KEY_REF)
    }

    pub fn version(&self) -> Option<&str> {
        self.get(KEY_VERSION)
    }

    pub fn resolved_commit(&self) -> Option<&str> {
        self.get(KEY_COMMIT)
    }

    pub fn installed_at(&self) -> Option<&str> {
        self.get(KEY_INSTALLED_AT)
    }

    pub fn is_commit_ref(&self) -> bool {
        self.get(KEY_IS_COMMIT_REF) == Some("true")
    }
}

/// Is the installed build stale relative to its upstream reference?
///
/// Re-runs the remote lookup recorded at install time and compares heads.
pub fn is_outdated(prefix: &Path, debug: bool) -> bool {
    is_outdated_with(prefix, identity::remote_head, debug)
}

/// Staleness state machine with an injected remote lookup.
///
/// - no record: not outdated (nothing to compare against)
/// - commit-pinned install: never outdated
/// - record missing repo/ref/commit: not outdated
/// - lookup failed: not outdated (uncertain information)
/// - otherwise: outdated iff the remote head differs from the recorded commit
pub fn is_outdated_with(
    prefix: &Path,
    lookup: impl Fn(&str, &str) -> Option<String>,
    debug: bool,
) -> bool {
    let Some(record) = RecordFile::load(prefix) else {
        return false;
    };

    if record.is_commit_ref() {
        return false;
    }

    let (Some(repo), Some(reference), Some(installed_commit)) =
        (record.repo(), record.reference(), record.resolved_commit())
    else {
        return false;
    };

    match lookup(repo, reference) {
        Some(remote_commit) => remote_commit != installed_commit,
        None => {
            if debug {
                eprintln!(
                    "buildref: staleness check could not reach {repo} @ {reference}, assuming current"
                );
            }
            false
        }
    }
}
