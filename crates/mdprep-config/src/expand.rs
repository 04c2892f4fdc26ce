//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a configuration
/// value.
///
/// `${VAR}` errors if the variable is unset; `${VAR:-default}` falls back
/// to the default. A value with no `${` reference at all is returned
/// unchanged, so literal dollar signs in plain URLs pass through; once a
/// value contains a braced reference, the expander also resolves any bare
/// `$VAR` in it. `field` names the config key for the error message.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: nothing to expand
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, MissingVar> {
        std::env::var(var).map(Some).map_err(|_| MissingVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Lookup failure carried out of the shellexpand context.
struct MissingVar {
    name: String,
}
