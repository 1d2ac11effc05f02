//! Common test utilities for buildref integration tests

use std::path::Path;

use assert_cmd::Command;
use git2::Repository;
use tempfile::TempDir;

/// Environment variables the binary consults; scrubbed from every spawned
/// command so ambient operator configuration cannot leak into tests.
const BUILDREF_ENV_VARS: &[&str] = &[
    "BUILDREF_REPO",
    "BUILDREF_REF",
    "BUILDREF_VERSION",
    "BUILDREF_DESCRIPTOR_PATH",
    "BUILDREF_DEBUG",
];

/// A buildref command with a clean BUILDREF_* environment
pub fn buildref() -> Command {
    let mut cmd = Command::cargo_bin("buildref").expect("buildref binary");
    for var in BUILDREF_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// A local upstream repository used in place of a remote
#[allow(dead_code)]
pub struct FixtureRepo {
    /// Temporary directory holding the repository
    pub temp: TempDir,
    /// Name of the default branch ("master" or "main" depending on git config)
    pub branch: String,
}

#[allow(dead_code)]
impl FixtureRepo {
    /// Create a repository with one commit, optionally containing a
    /// `Config/version.mk` descriptor.
    pub fn new(descriptor: Option<&str>) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let repo = Repository::init(temp.path()).expect("Failed to init repository");

        if let Some(content) = descriptor {
            let dir = temp.path().join("Config");
            std::fs::create_dir_all(&dir).expect("Failed to create Config dir");
            std::fs::write(dir.join("version.mk"), content).expect("Failed to write descriptor");
        }

        commit_all(&repo, "Initial commit");
        let branch = repo
            .head()
            .expect("HEAD")
            .shorthand()
            .expect("branch name")
            .to_string();

        Self { temp, branch }
    }

    /// Repository location as a string path (generic host strategy)
    pub fn location(&self) -> String {
        self.temp.path().display().to_string()
    }

    /// Current HEAD commit hash
    pub fn head(&self) -> String {
        let repo = Repository::open(self.temp.path()).expect("Failed to open repository");
        repo.head()
            .expect("HEAD")
            .peel_to_commit()
            .expect("HEAD commit")
            .id()
            .to_string()
    }

    /// Add a file and commit it, moving the branch head
    pub fn push_commit(&self, file_name: &str) -> String {
        std::fs::write(self.temp.path().join(file_name), "change").expect("Failed to write file");
        let repo = Repository::open(self.temp.path()).expect("Failed to open repository");
        commit_all(&repo, &format!("Add {file_name}"))
    }
}

fn commit_all(repo: &Repository, message: &str) -> String {
    let sig = git2::Signature::now("Test", "test@test.com").expect("signature");
    let tree_id = {
        let mut index = repo.index().expect("index");
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .expect("add_all");
        index.write().expect("index write");
        index.write_tree().expect("write_tree")
    };
    let tree = repo.find_tree(tree_id).expect("tree");

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("commit")
        .to_string()
}

/// A temporary install prefix
#[allow(dead_code)]
pub struct TestPrefix {
    pub temp: TempDir,
}

#[allow(dead_code)]
impl TestPrefix {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn location(&self) -> String {
        self.temp.path().display().to_string()
    }

    /// Read the persisted record file
    pub fn record_text(&self) -> String {
        std::fs::read_to_string(self.temp.path().join("COMMIT_INFO")).expect("record file")
    }

    pub fn has_record(&self) -> bool {
        self.temp.path().join("COMMIT_INFO").exists()
    }
}
