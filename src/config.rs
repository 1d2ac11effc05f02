//! Built-in defaults and environment-backed overrides
//!
//! Every resolution starts from the same three inputs: repository, reference
//! and version. Each can be overridden via a CLI option or its `BUILDREF_*`
//! environment variable (clap binds the two together); whatever is left
//! unset falls back to the defaults below.

/// Default upstream repository when no override is given
pub const DEFAULT_REPO: &str = "https://git.code.sf.net/p/zsh/code";

/// Default reference when no override is given
pub const DEFAULT_REF: &str = "master";

/// Last-resort version when neither an override nor auto-detection yields one
pub const DEFAULT_VERSION: &str = "5.9";

/// Path of the version descriptor file inside the upstream source tree
pub const DEFAULT_DESCRIPTOR_PATH: &str = "Config/version.mk";

/// Key whose value in the descriptor file is the version string
pub const DESCRIPTOR_KEY: &str = "VERSION";

/// Environment variable that enables diagnostic output for swallowed failures
pub const DEBUG_ENV: &str = "BUILDREF_DEBUG";

/// True when the [`DEBUG_ENV`] toggle is set to anything non-empty.
///
/// Read directly rather than bound through clap: operators set
/// `BUILDREF_DEBUG=1`, which is not a parseable bool flag value.
pub fn debug_env_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some_and(|v| !v.is_empty())
}

/// Resolution inputs gathered from CLI options and `BUILDREF_*` variables.
///
/// `None` fields fall through to the defaults (repo, ref, descriptor path)
/// or to auto-detection (version).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub repo: Option<String>,
    pub reference: Option<String>,
    pub version: Option<String>,
    pub descriptor_path: Option<String>,
    /// Surface otherwise-swallowed remote failures on stderr
    pub debug: bool,
}

impl Overrides {
    /// Repository to resolve against, falling back to [`DEFAULT_REPO`].
    ///
    /// Empty overrides count as unset so that `BUILDREF_REPO=` behaves like
    /// an absent variable.
    pub fn repo(&self) -> &str {
        non_empty(self.repo.as_deref()).unwrap_or(DEFAULT_REPO)
    }

    /// Reference to resolve against, falling back to [`DEFAULT_REF`]
    pub fn reference(&self) -> &str {
        non_empty(self.reference.as_deref()).unwrap_or(DEFAULT_REF)
    }

    /// Explicit version override, if one was given
    pub fn version(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    /// Descriptor path inside the source tree, falling back to
    /// [`DEFAULT_DESCRIPTOR_PATH`]
    pub fn descriptor_path(&self) -> &str {
        non_empty(self.descriptor_path.as_deref()).unwrap_or(DEFAULT_DESCRIPTOR_PATH)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let overrides = Overrides::default();
        assert_eq!(overrides.repo(), DEFAULT_REPO);
        assert_eq!(overrides.reference(), DEFAULT_REF);
        assert_eq!(overrides.version(), None);
        assert_eq!(overrides.descriptor_path(), DEFAULT_DESCRIPTOR_PATH);
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            repo: Some("https://github.com/acme/tool".to_string()),
            reference: Some("develop".to_string()),
            version: Some("2.0".to_string()),
            descriptor_path: Some("VERSION.mk".to_string()),
            debug: false,
        };
        assert_eq!(overrides.repo(), "https://github.com/acme/tool");
        assert_eq!(overrides.reference(), "develop");
        assert_eq!(overrides.version(), Some("2.0"));
        assert_eq!(overrides.descriptor_path(), "VERSION.mk");
    }

    #[test]
    fn test_empty_override_counts_as_unset() {
        let overrides = Overrides {
            repo: Some(String::new()),
            reference: Some("  ".to_string()),
            version: Some(String::new()),
            descriptor_path: None,
            debug: false,
        };
        assert_eq!(overrides.repo(), DEFAULT_REPO);
        assert_eq!(overrides.reference(), DEFAULT_REF);
        assert_eq!(overrides.version(), None);
    }
}
