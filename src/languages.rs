//! File-type resolution from a static extension-to-language document.
//!
//! The document is loaded once at startup and never mutated afterwards; every
//! query cycle reads it concurrently without coordination. Matching follows
//! the document verbatim: extensions carry a leading dot and compare
//! case-sensitively.

use serde::Deserialize;

/// One entry of the language document.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    /// Leading-dot suffixes such as `".rs"`. Some entries in the document
    /// omit the array entirely; those never match anything.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// The loaded document, in original order. First matching entry wins.
#[derive(Debug, Clone, Default)]
pub struct LanguageMap {
    entries: Vec<LanguageEntry>,
}

impl LanguageMap {
    #[must_use]
    pub fn new(entries: Vec<LanguageEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the language label for one filename.
    ///
    /// The suffix after the last `.` is looked up with a leading dot; a
    /// filename without a dot resolves to nothing.
    #[must_use]
    pub fn label_for(&self, filename: &str) -> Option<&str> {
        let (_, ext) = filename.rsplit_once('.')?;
        let suffix = format!(".{ext}");
        self.entries
            .iter()
            .find(|entry| entry.extensions.iter().any(|known| *known == suffix))
            .map(|entry| entry.name.as_str())
    }

    /// Distinct language labels for a set of filenames, first-seen order.
    ///
    /// Filenames that resolve to nothing contribute nothing; a fully
    /// unresolvable set yields an empty list, never an error.
    #[must_use]
    pub fn labels_for<'a, I>(&self, filenames: I) -> Vec<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut labels: Vec<&str> = Vec::new();
        for filename in filenames {
            if let Some(label) = self.label_for(filename) {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> LanguageMap {
        LanguageMap::new(vec![
            LanguageEntry {
                name: "Python".to_string(),
                extensions: vec![".py".to_string()],
            },
            LanguageEntry {
                name: "JavaScript".to_string(),
                extensions: vec![".js".to_string(), ".mjs".to_string()],
            },
            LanguageEntry {
                name: "Metadata".to_string(),
                extensions: Vec::new(),
            },
        ])
    }

    #[test]
    fn resolves_by_last_suffix() {
        let map = sample_map();
        assert_eq!(map.label_for("script.py"), Some("Python"));
        assert_eq!(map.label_for("bundle.min.js"), Some("JavaScript"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let map = sample_map();
        assert_eq!(map.label_for("a.py"), Some("Python"));
        assert_eq!(map.label_for("b.PY"), None);
    }

    #[test]
    fn no_dot_resolves_to_nothing() {
        let map = sample_map();
        assert_eq!(map.label_for("Makefile"), None);
        assert_eq!(map.label_for("trailing."), None);
    }

    #[test]
    fn duplicate_extensions_collapse_to_one_label() {
        let map = sample_map();
        let labels = map.labels_for(["a.py", "b.PY", "c.py"]);
        assert_eq!(labels, vec!["Python"]);
    }

    #[test]
    fn labels_keep_first_seen_order() {
        let map = sample_map();
        let labels = map.labels_for(["index.js", "tool.py", "other.mjs"]);
        assert_eq!(labels, vec!["JavaScript", "Python"]);
    }

    #[test]
    fn labels_are_deterministic() {
        let map = sample_map();
        let names = ["index.js", "tool.py", "README"];
        assert_eq!(map.labels_for(names), map.labels_for(names));
    }

    #[test]
    fn entries_without_extensions_decode_and_never_match() {
        let entries: Vec<LanguageEntry> = serde_json::from_str(
            r#"[
                {"name": "Text", "type": "prose"},
                {"name": "Rust", "extensions": [".rs"]}
            ]"#,
        )
        .expect("decode entries");
        let map = LanguageMap::new(entries);
        assert_eq!(map.label_for("main.rs"), Some("Rust"));
        assert_eq!(map.label_for("notes.txt"), None);
    }
}
