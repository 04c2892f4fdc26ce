//! Source document passed through the rewrite stage.

use std::path::{Path, PathBuf};

use crate::rules::RuleSet;

/// A single markup file in flight through the preprocessing pipeline.
///
/// The text payload is produced by the file-reading stage, rewritten in
/// place exactly once, then handed to the parser. The path identifies the
/// document and is never altered by rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    text: String,
}

impl SourceDocument {
    /// Create a document from its source path and raw text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Document path within the source tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current text payload.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text payload with the rewritten form.
    pub fn rewrite(&mut self, rules: &RuleSet) {
        self.text = rules.apply(&self.text);
    }

    /// Consume the document and return its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rewrite_replaces_text_in_place() {
        let rules = RuleSet::compile([("draft", "final")]).unwrap();
        let mut doc = SourceDocument::new("guide/intro.md", "This is a draft.");

        doc.rewrite(&rules);

        assert_eq!(doc.text(), "This is a final.");
    }

    #[test]
    fn test_rewrite_keeps_path() {
        let rules = RuleSet::compile([("intro", "outro")]).unwrap();
        let mut doc = SourceDocument::new("guide/intro.md", "intro text");

        doc.rewrite(&rules);

        // Only the payload changes; the document identity does not.
        assert_eq!(doc.path(), Path::new("guide/intro.md"));
        assert_eq!(doc.text(), "outro text");
    }

    #[test]
    fn test_into_text() {
        let doc = SourceDocument::new("a.md", "payload");
        assert_eq!(doc.into_text(), "payload");
    }
}
