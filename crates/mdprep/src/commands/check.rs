//! `mdprep check` command implementation.
//!
//! Loads and validates everything a build would use without writing any
//! output: the configuration file, the rewrite rules, and the redirects
//! mapping.

use std::path::PathBuf;

use clap::Args;
use mdprep_config::Config;
use mdprep_rewrite::{LanguageAliases, RuleSet};

use crate::commands::prepare::compile_excludes;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover mdprep.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if any part of the configuration is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;

        match &config.config_path {
            Some(path) => output.info(&format!("Configuration: {}", path.display())),
            None => output.warning("No mdprep.toml found, checking built-in defaults"),
        }

        output.info(&format!(
            "Project: {} ({})",
            config.site.project,
            config.site.release()
        ));
        output.info(&format!("Theme: {}", config.theme.name));

        let suffixes: Vec<_> = config.source_resolved.known_extensions().collect();
        output.info(&format!("Source suffixes: {}", suffixes.join(", ")));

        let rules = RuleSet::compile(config.replacement_pairs())?;
        output.info(&format!("Rewrite rules: {}", rules.len()));

        let excludes = compile_excludes(&config.source_resolved.exclude)?;
        output.info(&format!("Exclude patterns: {}", excludes.len()));

        let redirects = config.load_redirects()?;
        if config.redirects_file.is_some() {
            output.info(&format!("Redirects: {}", redirects.len()));
        }

        if !config.highlight.aliases.is_empty() {
            let aliases = LanguageAliases::with_aliases(config.highlight.aliases.clone());
            let rendered: Vec<String> = config
                .highlight
                .aliases
                .keys()
                .map(|lang| format!("{lang} -> {}", aliases.resolve(lang)))
                .collect();
            output.info(&format!("Highlight aliases: {}", rendered.join(", ")));
        }

        if let Some(tags) = config.versions.tag_whitelist() {
            output.info(&format!("Tag whitelist: {tags}"));
        }
        if let Some(branches) = config.versions.branch_whitelist() {
            output.info(&format!("Branch whitelist: {branches}"));
        }
        if let Some(latest) = &config.versions.latest {
            match &config.versions.rename_latest {
                Some(name) => output.info(&format!("Latest version: {latest} (as {name})")),
                None => output.info(&format!("Latest version: {latest}")),
            }
        }

        output.success("Configuration OK");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_config(content: &str) -> Result<(), CliError> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdprep.toml");
        std::fs::write(&path, content).unwrap();

        let args = CheckArgs {
            config: Some(path),
            verbose: false,
        };
        args.execute()
    }

    #[test]
    fn test_check_accepts_valid_config() {
        let result = check_config(
            r#"
[source]
exclude = ["_build", "**/_common/*"]

[[replacements]]
pattern = "foo"
replacement = "bar"
"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_rejects_invalid_exclude_glob() {
        let err = check_config("[source]\nexclude = [\"[\"]\n").unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("exclude"));
    }

    #[test]
    fn test_check_rejects_invalid_replacement_pattern() {
        let err = check_config(
            r#"
[[replacements]]
pattern = "(unclosed"
replacement = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Rule(_)));
    }
}
