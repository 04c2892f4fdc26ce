//! `mdprep prepare` command implementation.
//!
//! Walks the documentation source tree, applies the configured rewrite
//! rules to every recognized markup file, and writes the rewritten tree to
//! the output directory for the rendering framework to consume. One
//! document's failure does not abort the others; the command fails at the
//! end if any document failed.

use std::path::{Path, PathBuf};

use clap::Args;
use glob::Pattern;
use ignore::WalkBuilder;
use mdprep_config::{CliSettings, Config, SourceConfig};
use mdprep_rewrite::{RuleSet, SourceDocument};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the prepare command.
#[derive(Args)]
pub(crate) struct PrepareArgs {
    /// Path to configuration file (default: auto-discover mdprep.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the prepared tree (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output (per-document logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl PrepareArgs {
    /// Execute the prepare command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any document could not be
    /// prepared.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            out_dir: self.out_dir,
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let rules = RuleSet::compile(config.replacement_pairs())?;
        let excludes = compile_excludes(&config.source_resolved.exclude)?;

        let source_dir = &config.source_resolved.dir;
        if !source_dir.is_dir() {
            return Err(CliError::Validation(format!(
                "source directory {} does not exist",
                source_dir.display()
            )));
        }

        output.info(&format!("Source directory: {}", source_dir.display()));
        output.info(&format!(
            "Output directory: {}",
            config.source_resolved.out_dir.display()
        ));
        output.info(&format!("Rewrite rules: {}", rules.len()));

        let report = prepare_tree(&config.source_resolved, &rules, &excludes, &output);

        if report.failed > 0 {
            output.warning(&format!(
                "Prepared {} document(s), {} failed",
                report.prepared, report.failed
            ));
            return Err(CliError::Validation(format!(
                "{} document(s) failed to prepare",
                report.failed
            )));
        }

        output.success(&format!("Prepared {} document(s)", report.prepared));
        Ok(())
    }
}

/// Counts from a tree walk.
#[derive(Debug, Default)]
struct PrepareReport {
    prepared: usize,
    failed: usize,
}

/// Walk the source tree and rewrite every recognized document.
///
/// One document's failure does not stop the walk: the failure is reported,
/// counted, and the remaining documents are still prepared.
fn prepare_tree(
    source: &SourceConfig,
    rules: &RuleSet,
    excludes: &[Pattern],
    output: &Output,
) -> PrepareReport {
    let mut report = PrepareReport::default();

    for entry in WalkBuilder::new(&source.dir).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                output.warning(&format!("skipping unreadable entry: {err}"));
                report.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        // Walk roots are always prefixes of their entries
        let Ok(relative) = path.strip_prefix(&source.dir) else {
            continue;
        };
        if !has_known_suffix(relative, source) || is_excluded(relative, excludes) {
            continue;
        }

        match prepare_document(path, relative, &source.out_dir, rules) {
            Ok(()) => {
                tracing::info!(document = %relative.display(), "prepared");
                report.prepared += 1;
            }
            Err(err) => {
                output.error(&format!("{}: {err}", relative.display()));
                report.failed += 1;
            }
        }
    }

    report
}

/// Rewrite a single document and write it under the output directory.
fn prepare_document(
    path: &Path,
    relative: &Path,
    out_dir: &Path,
    rules: &RuleSet,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(path)?;

    let mut document = SourceDocument::new(relative, text);
    document.rewrite(rules);

    let destination = out_dir.join(relative);
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&destination, document.into_text())?;

    Ok(())
}

/// Compile the configured exclude globs.
///
/// Also used by `check` so an invalid pattern fails validation instead of
/// surfacing mid-walk.
pub(crate) fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>, CliError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                CliError::Validation(format!("invalid exclude pattern `{p}`: {e}"))
            })
        })
        .collect()
}

/// Check whether a relative path matches any exclude pattern.
///
/// A pattern excludes a file when it matches the path itself or any of its
/// parent directories, so a plain `_build` entry excludes the whole tree
/// under `_build/`.
fn is_excluded(relative: &Path, excludes: &[Pattern]) -> bool {
    excludes
        .iter()
        .any(|pattern| relative.ancestors().any(|p| pattern.matches_path(p)))
}

/// Check whether the file carries one of the configured markup suffixes.
fn has_known_suffix(relative: &Path, source: &SourceConfig) -> bool {
    let Some(name) = relative.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    source
        .known_extensions()
        .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix))
}
