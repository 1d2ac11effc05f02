//! Error types for buildref
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Remote lookups (descriptor fetch, ls-remote) deliberately do NOT surface
//! these types at their boundaries: they collapse to `Option` so that network
//! or parse failures degrade to defaults instead of aborting a resolution.
//! The variants here cover the failures that are allowed to reach the user:
//! local git plumbing, record file IO, and argument problems.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for buildref operations
#[derive(Error, Diagnostic, Debug)]
pub enum BuildrefError {
    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(buildref::git::clone_failed),
        help("Check that the URL is correct and you have access to the repository")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Failed to resolve git ref '{git_ref}': {reason}")]
    #[diagnostic(code(buildref::git::ref_resolve_failed))]
    GitRefResolveFailed { git_ref: String, reason: String },

    #[error("Failed to open repository at {path}: {reason}")]
    #[diagnostic(
        code(buildref::git::open_failed),
        help("Pass --source-dir pointing at the checked-out build tree")
    )]
    GitOpenFailed { path: String, reason: String },

    // Install prefix / record errors
    #[error("Install prefix does not exist: {path}")]
    #[diagnostic(
        code(buildref::record::invalid_prefix),
        help("Pass --prefix pointing at the build's install root")
    )]
    InvalidPrefix { path: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(buildref::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Generic IO
    #[error("IO error: {message}")]
    #[diagnostic(code(buildref::io_error))]
    IoError { message: String },

    // Output serialization
    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(buildref::output::serialize_failed))]
    SerializeFailed { reason: String },
}

/// Result type alias using [`BuildrefError`]
pub type Result<T> = std::result::Result<T, BuildrefError>;

impl From<std::io::Error> for BuildrefError {
    fn from(err: std::io::Error) -> Self {
        BuildrefError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BuildrefError {
    fn from(err: serde_json::Error) -> Self {
        BuildrefError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}
