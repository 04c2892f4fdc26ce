//! Multi-version build selection.
//!
//! The site is built once per whitelisted tag and branch by the external
//! multiversion framework; this module only carries the selection config
//! and builds the whitelist patterns the framework consumes. Tag and branch
//! whitelists are distinct fields and never overwrite each other.

use serde::Deserialize;

use crate::ConfigError;

/// `[versions]` section of the site configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Version tags to build. Empty means no tags are whitelisted.
    pub tags: Vec<String>,
    /// Branches to build. Empty means no branches are whitelisted.
    pub branches: Vec<String>,
    /// The version considered latest stable. Must appear in `tags` or
    /// `branches`.
    pub latest: Option<String>,
    /// Public name for the latest version (e.g. `stable`).
    pub rename_latest: Option<String>,
    /// Whitelist pattern for git remotes.
    pub remote_whitelist: Option<String>,
    /// Pattern matching refs that count as released versions.
    pub released_pattern: String,
    /// Format for per-version output directories.
    pub outputdir_format: String,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            branches: Vec::new(),
            latest: None,
            rename_latest: None,
            remote_whitelist: None,
            released_pattern: "^tags/.*$".to_owned(),
            outputdir_format: "{ref.name}".to_owned(),
        }
    }
}

impl VersionsConfig {
    /// Whitelist pattern for tags, or `None` when no tags are selected.
    #[must_use]
    pub fn tag_whitelist(&self) -> Option<String> {
        whitelist_regex(&self.tags)
    }

    /// Whitelist pattern for branches, or `None` when no branches are
    /// selected.
    #[must_use]
    pub fn branch_whitelist(&self) -> Option<String> {
        whitelist_regex(&self.branches)
    }

    /// Validate version selection consistency.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(latest) = &self.latest
            && !self.tags.contains(latest)
            && !self.branches.contains(latest)
        {
            return Err(ConfigError::Validation(format!(
                "versions.latest `{latest}` is not in versions.tags or versions.branches"
            )));
        }

        validate_pattern(&self.released_pattern, "versions.released_pattern")?;
        if let Some(remote) = &self.remote_whitelist {
            validate_pattern(remote, "versions.remote_whitelist")?;
        }

        Ok(())
    }
}

/// Check that a configured pattern is a valid regular expression.
fn validate_pattern(pattern: &str, field: &str) -> Result<(), ConfigError> {
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| ConfigError::Validation(format!("{field} is not a valid pattern: {e}")))
}

/// Build an anchored whitelist pattern from a list of ref names.
///
/// Names are matched literally, so regex metacharacters in version names
/// (like the dots in `scylla-3.10.2.x`) are escaped. An empty list yields
/// `None`: nothing is whitelisted.
#[must_use]
pub fn whitelist_regex(refs: &[String]) -> Option<String> {
    match refs {
        [] => None,
        [single] => Some(format!("^{}$", regex::escape(single))),
        many => {
            let joined = many
                .iter()
                .map(|r| regex::escape(r))
                .collect::<Vec<_>>()
                .join("|");
            Some(format!("^({joined})$"))
        }
    }
}
