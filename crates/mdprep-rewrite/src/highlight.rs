//! Fence-language aliases for syntax highlighting.
//!
//! Some fence languages have no tokenizer of their own and borrow one from
//! a related language. `ditaa` diagram blocks, for instance, highlight well
//! enough with the shell tokenizer. The alias table maps the fence info
//! string to the tokenizer name the highlighter should actually use.

use std::collections::HashMap;

/// Mapping from fence language to highlighter tokenizer name.
///
/// Unknown languages resolve to themselves.
///
/// # Example
///
/// ```
/// use mdprep_rewrite::LanguageAliases;
///
/// let aliases = LanguageAliases::default();
/// assert_eq!(aliases.resolve("ditaa"), "bash");
/// assert_eq!(aliases.resolve("rust"), "rust");
/// ```
#[derive(Debug, Clone)]
pub struct LanguageAliases {
    aliases: HashMap<String, String>,
}

impl LanguageAliases {
    /// Built-in aliases plus extra entries from configuration.
    ///
    /// Configured entries override the built-in ones.
    #[must_use]
    pub fn with_aliases(extra: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut result = Self::default();
        result.aliases.extend(extra);
        result
    }

    /// Resolve a fence language to the tokenizer name to use.
    #[must_use]
    pub fn resolve<'a>(&'a self, language: &'a str) -> &'a str {
        self.aliases.get(language).map_or(language, String::as_str)
    }
}

impl Default for LanguageAliases {
    fn default() -> Self {
        Self {
            aliases: HashMap::from([("ditaa".to_owned(), "bash".to_owned())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_ditaa_alias() {
        let aliases = LanguageAliases::default();
        assert_eq!(aliases.resolve("ditaa"), "bash");
    }

    #[test]
    fn test_unknown_language_resolves_to_itself() {
        let aliases = LanguageAliases::default();
        assert_eq!(aliases.resolve("rust"), "rust");
        assert_eq!(aliases.resolve(""), "");
    }

    #[test]
    fn test_configured_alias() {
        let aliases =
            LanguageAliases::with_aliases([("plantuml".to_owned(), "text".to_owned())]);
        assert_eq!(aliases.resolve("plantuml"), "text");
        // Built-ins survive the merge
        assert_eq!(aliases.resolve("ditaa"), "bash");
    }

    #[test]
    fn test_configured_alias_overrides_builtin() {
        let aliases = LanguageAliases::with_aliases([("ditaa".to_owned(), "text".to_owned())]);
        assert_eq!(aliases.resolve("ditaa"), "text");
    }
}
