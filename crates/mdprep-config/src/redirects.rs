//! Redirects file parsing.
//!
//! The site keeps a YAML mapping of old page paths to new ones; the
//! external framework emits an HTML stub per entry. This module only parses
//! and validates the mapping so a broken file fails the build early.

use std::collections::BTreeMap;
use std::path::Path;

use crate::ConfigError;

/// Load the redirects mapping from a YAML file.
///
/// The file is a flat mapping of old path → new path, e.g.:
///
/// ```yaml
/// getting-started/index: quickstart
/// api/old-page: api/new-page
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a YAML mapping of
/// strings, or contains an empty source or target path.
pub fn load_redirects(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_redirects(&content)
}

/// Parse redirects from YAML text.
pub(crate) fn parse_redirects(content: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let redirects: BTreeMap<String, String> = serde_yaml::from_str(content)?;

    for (from, to) in &redirects {
        if from.is_empty() || to.is_empty() {
            return Err(ConfigError::Validation(
                "redirects entries cannot have empty paths".to_owned(),
            ));
        }
        if from == to {
            return Err(ConfigError::Validation(format!(
                "redirect `{from}` points to itself"
            )));
        }
    }

    Ok(redirects)
}
