//! Site configuration for mdprep.
//!
//! Parses `mdprep.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base_url`

mod expand;
mod redirects;
mod versions;

pub use redirects::load_redirects;
pub use versions::{VersionsConfig, whitelist_regex};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override prepared-output directory.
    pub out_dir: Option<PathBuf>,
    /// Override the site base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdprep.toml";

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity (project name, version, base URL).
    pub site: SiteConfig,
    /// Source tree configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Theme selection and options, passed through to the renderer.
    pub theme: ThemeConfig,
    /// External-link shortcuts: shortcut name to URL template with one `%s`.
    pub extlinks: BTreeMap<String, String>,
    /// Redirects file (optional section).
    redirects: Option<RedirectsConfigRaw>,
    /// Multi-version build selection.
    pub versions: VersionsConfig,
    /// Source rewrite rules, applied in array order.
    replacements: Vec<Replacement>,
    /// Syntax highlighting options.
    pub highlight: HighlightConfig,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved redirects file path (set after loading).
    #[serde(skip)]
    pub redirects_file: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project name shown by the renderer.
    pub project: String,
    /// Short version (X.Y).
    pub version: String,
    /// Full release string, including any alpha/beta/rc suffix.
    /// Defaults to `version` when unset.
    pub release: Option<String>,
    /// Author string for generated output.
    pub author: String,
    /// Root URL of the published site.
    pub base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            project: "Documentation".to_owned(),
            version: "0.1.0".to_owned(),
            release: None,
            author: String::new(),
            base_url: None,
        }
    }
}

impl SiteConfig {
    /// Full release string, falling back to the short version.
    #[must_use]
    pub fn release(&self) -> &str {
        self.release.as_deref().unwrap_or(&self.version)
    }
}

/// Raw source configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    dir: Option<String>,
    out_dir: Option<String>,
    suffixes: Option<BTreeMap<String, String>>,
    exclude: Option<Vec<String>>,
}

/// Resolved source tree configuration with absolute paths.
#[derive(Debug)]
pub struct SourceConfig {
    /// Source directory for markup files.
    pub dir: PathBuf,
    /// Directory the prepared tree is written to.
    pub out_dir: PathBuf,
    /// Source suffix to parser name, e.g. `.md` to `markdown`.
    pub suffixes: BTreeMap<String, String>,
    /// Glob patterns excluded from the source walk.
    pub exclude: Vec<String>,
}

impl SourceConfig {
    /// The markup extensions the pipeline recognizes (suffix map keys).
    pub fn known_extensions(&self) -> impl Iterator<Item = &str> {
        self.suffixes.keys().map(String::as_str)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs"),
            out_dir: PathBuf::from(".mdprep/prepared"),
            suffixes: default_suffixes(),
            exclude: vec!["_build".to_owned()],
        }
    }
}

fn default_suffixes() -> BTreeMap<String, String> {
    BTreeMap::from([
        (".md".to_owned(), "markdown".to_owned()),
        (".rst".to_owned(), "restructuredtext".to_owned()),
    ])
}

/// Theme selection and options.
///
/// These are pass-through values consumed by the rendering framework; mdprep
/// only validates and forwards them.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name.
    pub name: String,
    /// Navigation links shown in the site header.
    pub header_links: Vec<HeaderLink>,
    /// Repository for the "report an issue" link (owner/name).
    pub github_issues_repository: Option<String>,
    /// Whether the sidebar shows the index entry.
    pub show_sidebar_index: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "basic".to_owned(),
            header_links: Vec::new(),
            github_issues_repository: None,
            show_sidebar_index: true,
        }
    }
}

/// A labeled link in the site header.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HeaderLink {
    /// Display label.
    pub label: String,
    /// Link target.
    pub url: String,
}

/// Raw redirects configuration.
#[derive(Debug, Deserialize)]
struct RedirectsConfigRaw {
    file: String,
}

/// A single source rewrite rule from the `[[replacements]]` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Replacement {
    /// Regular expression pattern.
    pub pattern: String,
    /// Replacement template; may reference capture groups.
    pub replacement: String,
}

/// Syntax highlighting configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Extra fence-language aliases merged over the built-in ones.
    pub aliases: BTreeMap<String, String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// YAML parsing error (redirects file).
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdprep.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.source_resolved.dir.clone_from(source_dir);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.source_resolved.out_dir.clone_from(out_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = Some(base_url.clone());
        }
    }

    /// Rewrite rules as (pattern, replacement) pairs in application order.
    pub fn replacement_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.replacements
            .iter()
            .map(|r| (r.pattern.as_str(), r.replacement.as_str()))
    }

    /// Load the redirects mapping named by the `[redirects]` section.
    ///
    /// Returns an empty mapping when no redirects file is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file is missing or malformed.
    pub fn load_redirects(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        match &self.redirects_file {
            Some(path) => redirects::load_redirects(path),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            source: SourceConfigRaw::default(),
            theme: ThemeConfig::default(),
            extlinks: BTreeMap::new(),
            redirects: None,
            versions: VersionsConfig::default(),
            replacements: Vec::new(),
            highlight: HighlightConfig::default(),
            source_resolved: SourceConfig {
                dir: base.join("docs"),
                out_dir: base.join(".mdprep/prepared"),
                suffixes: default_suffixes(),
                exclude: vec!["_build".to_owned()],
            },
            redirects_file: None,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid
    /// values. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_source()?;
        self.validate_extlinks()?;
        self.versions.validate()?;
        Ok(())
    }

    /// Validate site identity.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.project, "site.project")?;
        require_non_empty(&self.site.version, "site.version")?;
        if let Some(base_url) = &self.site.base_url {
            require_non_empty(base_url, "site.base_url")?;
            require_http_url(base_url, "site.base_url")?;
        }
        Ok(())
    }

    /// Validate the source suffix map.
    fn validate_source(&self) -> Result<(), ConfigError> {
        if self.source_resolved.suffixes.is_empty() {
            return Err(ConfigError::Validation(
                "source.suffixes cannot be empty".to_owned(),
            ));
        }
        for (suffix, parser) in &self.source_resolved.suffixes {
            if !suffix.starts_with('.') || suffix.len() < 2 {
                return Err(ConfigError::Validation(format!(
                    "source.suffixes key `{suffix}` must be an extension starting with `.`"
                )));
            }
            require_non_empty(parser, "source.suffixes value")?;
        }
        Ok(())
    }

    /// Validate external-link shortcut templates.
    fn validate_extlinks(&self) -> Result<(), ConfigError> {
        for (shortcut, template) in &self.extlinks {
            if template.matches("%s").count() != 1 {
                return Err(ConfigError::Validation(format!(
                    "extlinks.{shortcut} must contain exactly one `%s` placeholder"
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.site.base_url {
            self.site.base_url = Some(expand::expand_env(base_url, "site.base_url")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.source_resolved = SourceConfig {
            dir: resolve(self.source.dir.as_deref(), "docs"),
            out_dir: resolve(self.source.out_dir.as_deref(), ".mdprep/prepared"),
            suffixes: self
                .source
                .suffixes
                .clone()
                .unwrap_or_else(default_suffixes),
            exclude: self
                .source
                .exclude
                .clone()
                .unwrap_or_else(|| vec!["_build".to_owned()]),
        };

        self.redirects_file = self
            .redirects
            .as_ref()
            .map(|r| config_dir.join(&r.file));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.project, "Documentation");
        assert_eq!(config.source_resolved.dir, PathBuf::from("/test/docs"));
        assert_eq!(
            config.source_resolved.out_dir,
            PathBuf::from("/test/.mdprep/prepared")
        );
        assert_eq!(config.source_resolved.suffixes[".md"], "markdown");
        assert_eq!(config.source_resolved.suffixes[".rst"], "restructuredtext");
        assert!(config.theme.show_sidebar_index);
        assert!(config.redirects_file.is_none());
        assert_eq!(config.replacement_pairs().count(), 0);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.project, "Documentation");
        assert_eq!(config.site.release(), "0.1.0");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
project = "Scylla Java Driver"
version = "3.7"
release = "3.7.1"
author = "Scylla Project Contributors"
base_url = "https://java-driver.docs.scylladb.com"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.project, "Scylla Java Driver");
        assert_eq!(config.site.version, "3.7");
        assert_eq!(config.site.release(), "3.7.1");
        assert_eq!(
            config.site.base_url.as_deref(),
            Some("https://java-driver.docs.scylladb.com")
        );
    }

    #[test]
    fn test_parse_theme_config() {
        let toml = r#"
[theme]
name = "scylladb"
github_issues_repository = "scylladb/java-driver"
show_sidebar_index = true

[[theme.header_links]]
label = "Scylla University"
url = "https://university.scylladb.com/"

[[theme.header_links]]
label = "ScyllaDB Home"
url = "https://www.scylladb.com/"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.name, "scylladb");
        assert_eq!(
            config.theme.github_issues_repository.as_deref(),
            Some("scylladb/java-driver")
        );
        assert_eq!(config.theme.header_links.len(), 2);
        assert_eq!(config.theme.header_links[0].label, "Scylla University");
    }

    #[test]
    fn test_parse_replacements_preserve_order() {
        let toml = r#"
[[replacements]]
pattern = "foo"
replacement = "bar"

[[replacements]]
pattern = "bar"
replacement = "baz"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let pairs: Vec<_> = config.replacement_pairs().collect();
        assert_eq!(pairs, vec![("foo", "bar"), ("bar", "baz")]);
    }

    #[test]
    fn test_parse_extlinks() {
        let toml = r#"
[extlinks]
manager = "/operating-scylla/manager/%s/"
monitor = "/operating-scylla/monitoring/%s/"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.extlinks["manager"], "/operating-scylla/manager/%s/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_versions() {
        let toml = r#"
[versions]
branches = ["scylla-3.7.2.x", "scylla-3.10.2.x"]
latest = "scylla-3.10.2.x"
rename_latest = "stable"
remote_whitelist = "^origin$"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.versions.tag_whitelist().is_none());
        assert_eq!(
            config.versions.branch_whitelist().unwrap(),
            r"^(scylla\-3\.7\.2\.x|scylla\-3\.10\.2\.x)$"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[source]
dir = "docs/source"
out_dir = "build/prepared"
exclude = ["_build", "**/_common/*"]

[redirects]
file = "_utils/redirections.yaml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.source_resolved.dir,
            PathBuf::from("/project/docs/source")
        );
        assert_eq!(
            config.source_resolved.out_dir,
            PathBuf::from("/project/build/prepared")
        );
        assert_eq!(
            config.source_resolved.exclude,
            vec!["_build".to_owned(), "**/_common/*".to_owned()]
        );
        assert_eq!(
            config.redirects_file,
            Some(PathBuf::from("/project/_utils/redirections.yaml"))
        );
    }

    #[test]
    fn test_known_extensions() {
        let config = Config::default_with_base(Path::new("/test"));
        let extensions: Vec<_> = config.source_resolved.known_extensions().collect();
        assert_eq!(extensions, vec![".md", ".rst"]);
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.source_resolved.dir, PathBuf::from("/custom/docs"));
        // Unchanged
        assert_eq!(
            config.source_resolved.out_dir,
            PathBuf::from("/test/.mdprep/prepared")
        );
    }

    #[test]
    fn test_apply_cli_settings_out_dir_and_base_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            out_dir: Some(PathBuf::from("/custom/out")),
            base_url: Some("https://docs.example.com".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.source_resolved.out_dir, PathBuf::from("/custom/out"));
        assert_eq!(
            config.site.base_url.as_deref(),
            Some("https://docs.example.com")
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.source_resolved.dir, before.source_resolved.dir);
        assert_eq!(config.site.base_url, before.site.base_url);
    }

    #[test]
    fn test_expand_env_vars_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MDPREP_TEST_BASE", "https://docs.example.com");
        }

        let toml = r#"
[site]
base_url = "${MDPREP_TEST_BASE}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(
            config.site.base_url.as_deref(),
            Some("https://docs.example.com")
        );

        unsafe {
            std::env::remove_var("MDPREP_TEST_BASE");
        }
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(msg.contains(s), "Expected error to contain '{s}', got: {msg}");
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_project() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.project = String::new();
        assert_validation_error(&config, &["site.project", "empty"]);
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = Some("ftp://docs.example.com".to_owned());
        assert_validation_error(&config, &["site.base_url", "http"]);
    }

    #[test]
    fn test_validate_extlink_missing_placeholder() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config
            .extlinks
            .insert("manager".to_owned(), "/manager/".to_owned());
        assert_validation_error(&config, &["extlinks.manager", "%s"]);
    }

    #[test]
    fn test_validate_extlink_double_placeholder() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config
            .extlinks
            .insert("bad".to_owned(), "/%s/%s/".to_owned());
        assert_validation_error(&config, &["extlinks.bad"]);
    }

    #[test]
    fn test_validate_suffix_without_dot() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config
            .source_resolved
            .suffixes
            .insert("md".to_owned(), "markdown".to_owned());
        assert_validation_error(&config, &["source.suffixes", "md"]);
    }

    #[test]
    fn test_validate_empty_suffix_map() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.source_resolved.suffixes.clear();
        assert_validation_error(&config, &["source.suffixes", "empty"]);
    }

    #[test]
    fn test_validate_versions_latest_unknown() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.versions.latest = Some("v9".to_owned());
        assert_validation_error(&config, &["versions.latest"]);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/mdprep.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdprep.toml");
        std::fs::write(
            &path,
            r#"
[source]
dir = "docs/source"

[[replacements]]
pattern = 'https://docs\.datastax\.com/en/drivers/java/(.*?)/'
replacement = "https://java-driver.docs.scylladb.com/latest/api/"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.source_resolved.dir, dir.path().join("docs/source"));
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.replacement_pairs().count(), 1);
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdprep.toml");
        std::fs::write(&path, "[site\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_redirects_unconfigured() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.load_redirects().unwrap().is_empty());
    }

    #[test]
    fn test_load_redirects_from_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("_utils")).unwrap();
        std::fs::write(
            dir.path().join("_utils/redirections.yaml"),
            "getting-started/index: quickstart\n",
        )
        .unwrap();
        let path = dir.path().join("mdprep.toml");
        std::fs::write(&path, "[redirects]\nfile = \"_utils/redirections.yaml\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        let redirects = config.load_redirects().unwrap();
        assert_eq!(redirects["getting-started/index"], "quickstart");
    }

    #[test]
    fn test_parse_highlight_aliases() {
        let toml = r#"
[highlight.aliases]
plantuml = "text"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.highlight.aliases["plantuml"], "text");
    }
}
