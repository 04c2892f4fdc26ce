//! CLI error types.

use mdprep_config::ConfigError;
use mdprep_rewrite::RuleError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Rule(#[from] RuleError),

    #[error("{0}")]
    Validation(String),
}
