//! Ordered regex rewrite rules applied to document source.
//!
//! Rules are compiled once at startup and applied to every document before
//! parsing. Each rule is a global substitution over the current text, in
//! insertion order, so one rule's output feeds the next.

use regex::Regex;

/// A single compiled rewrite rule.
#[derive(Debug, Clone)]
struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

/// Error returned when a rewrite pattern fails to compile.
///
/// A malformed pattern is a configuration error; there is no recovery.
#[derive(Debug, thiserror::Error)]
#[error("invalid rewrite pattern `{pattern}`: {source}")]
pub struct RuleError {
    /// The pattern that failed to compile.
    pattern: String,
    source: regex::Error,
}

impl RuleError {
    /// The pattern that failed to compile.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// An ordered set of compiled rewrite rules.
///
/// Replacement strings may reference capture groups with `$1` or `${name}`.
/// Application is sequential: a later rule sees the output of earlier rules,
/// so ordering is part of the contract. Idempotence is not guaranteed when a
/// replacement can itself match a later pattern; authoring non-overlapping
/// rules is the caller's responsibility.
///
/// # Example
///
/// ```
/// use mdprep_rewrite::RuleSet;
///
/// let rules = RuleSet::compile([("foo", "bar"), ("bar", "baz")]).unwrap();
/// assert_eq!(rules.apply("foo"), "baz");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    /// Compile pattern→replacement pairs into a rule set.
    ///
    /// Patterns are compiled eagerly so configuration errors surface at
    /// startup rather than mid-build.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] for the first pattern that is not a valid
    /// regular expression.
    pub fn compile<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> Result<Self, RuleError>
    where
        P: AsRef<str>,
        R: Into<String>,
    {
        let mut rules = Vec::new();
        for (pattern, replacement) in pairs {
            let pattern = pattern.as_ref();
            let compiled = Regex::new(pattern).map_err(|source| RuleError {
                pattern: pattern.to_owned(),
                source,
            })?;
            rules.push(RewriteRule {
                pattern: compiled,
                replacement: replacement.into(),
            });
        }
        Ok(Self { rules })
    }

    /// Apply all rules to `text` and return the rewritten result.
    ///
    /// Each rule replaces every match in the current text; a rule with no
    /// matches is a no-op. An empty rule set returns the input unchanged.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_owned();
        for rule in &self.rules {
            if let std::borrow::Cow::Owned(rewritten) =
                rule.pattern.replace_all(&current, rule.replacement.as_str())
            {
                current = rewritten;
            }
        }
        current
    }

    /// Check whether the rule set contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
