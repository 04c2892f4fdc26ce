//! Source-text rewriting for the documentation preprocessing pipeline.
//!
//! This crate owns the transformations applied to raw document source before
//! it reaches the markdown parser:
//!
//! - [`RuleSet`]: ordered regex pattern→replacement rules applied as
//!   sequential global substitutions.
//! - [`SourceDocument`]: a document path plus its mutable text payload.
//! - [`LinkResolver`] / [`PermalinkResolver`]: link-destination
//!   normalization, invoked by the host parser via composition.
//! - [`LanguageAliases`]: fence-language aliases for the syntax highlighter.
//!
//! # Example
//!
//! ```
//! use mdprep_rewrite::RuleSet;
//!
//! let rules = RuleSet::compile([
//!     (r"https://docs\.example\.com/v(\d+)/", "https://docs.example.com/latest/"),
//! ])
//! .unwrap();
//!
//! let rewritten = rules.apply("See https://docs.example.com/v2/api.");
//! assert_eq!(rewritten, "See https://docs.example.com/latest/api.");
//! ```

mod document;
mod highlight;
mod links;
mod rules;

pub use document::SourceDocument;
pub use highlight::LanguageAliases;
pub use links::{LinkResolver, PermalinkResolver, resolve_links};
pub use rules::{RuleError, RuleSet};
