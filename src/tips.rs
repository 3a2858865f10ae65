//! Tips data model and expansion tracking.
//!
//! This module provides:
//!
//! - `Tip`: one read-only instructional record (title, description, optional code/preview)
//! - `TipSection`: the sections an expanded tip shows, in display order
//! - `ExpansionState`: the set of tip indices currently expanded
//! - Loading tips from a user-supplied JSON file
//!
//! Tips never change after they are loaded. The list is handed to its owner at
//! construction time and only the expansion set is mutated afterwards.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// A single tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub description: String,
    /// Snippet shown verbatim in a monospaced block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Pre-rendered markup shown in the result preview panel
    #[serde(
        default,
        rename = "resultHtml",
        skip_serializing_if = "Option::is_none"
    )]
    pub result_html: Option<String>,
}

/// A block of an expanded tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipSection<'a> {
    Description(&'a str),
    ResultPreview(&'a str),
    Code(&'a str),
}

impl Tip {
    /// Sections of the expanded view, in display order.
    ///
    /// The description is always present. The preview and code blocks are
    /// independent of each other and only appear when their field is set.
    pub fn sections(&self) -> Vec<TipSection<'_>> {
        let mut sections = vec![TipSection::Description(&self.description)];
        if let Some(ref html) = self.result_html {
            sections.push(TipSection::ResultPreview(html));
        }
        if let Some(ref code) = self.code {
            sections.push(TipSection::Code(code));
        }
        sections
    }
}

/// Errors that can occur while loading tips
#[derive(Error, Debug)]
pub enum TipsError {
    #[error("Failed to read tips file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tips file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Tips file {0} contains no tips")]
    Empty(String),
}

/// Load tips from a JSON file containing an array of tips
pub fn load_tips_file(path: &Path) -> Result<Vec<Tip>, TipsError> {
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| TipsError::Read {
        path: path_str.clone(),
        source,
    })?;

    let tips: Vec<Tip> = serde_json::from_str(&content).map_err(|source| TipsError::Parse {
        path: path_str.clone(),
        source,
    })?;

    if tips.is_empty() {
        return Err(TipsError::Empty(path_str));
    }

    Ok(tips)
}

/// Indices of the tips currently shown expanded.
///
/// Every member is a valid index into the list it was created for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: BTreeSet<usize>,
    len: usize,
}

impl ExpansionState {
    /// Create an empty expansion set for a list of `len` tips
    pub fn new(len: usize) -> Self {
        Self {
            open: BTreeSet::new(),
            len,
        }
    }

    /// Flip membership of `index`. Returns whether the tip is now expanded.
    ///
    /// Indices outside the list are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::debug!("Ignoring toggle of out-of-range tip {}", index);
            return false;
        }

        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn expand_all(&mut self) {
        self.open.extend(0..self.len);
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    /// Number of expanded tips
    pub fn count(&self) -> usize {
        self.open.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }
}

/// Reduce pre-rendered markup to readable plain text for the preview panel.
///
/// Block-level closing tags and `<br>` become line breaks, every other tag is
/// dropped, and the common character entities are decoded.
pub fn strip_markup(html: &str) -> String {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    static TAGS: OnceLock<Regex> = OnceLock::new();

    let breaks = BREAKS.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</(p|div|h[1-6]|li|pre|tr)>").unwrap_or_else(|e| {
            panic!("Invalid break pattern: {}", e);
        })
    });
    let tags = TAGS.get_or_init(|| {
        Regex::new(r"<[^>]*>").unwrap_or_else(|e| panic!("Invalid tag pattern: {}", e))
    });

    let text = breaks.replace_all(html, "\n");
    let text = tags.replace_all(&text, "");
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tip(code: Option<&str>, result_html: Option<&str>) -> Tip {
        Tip {
            title: "Title".to_string(),
            description: "Description".to_string(),
            code: code.map(String::from),
            result_html: result_html.map(String::from),
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut state = ExpansionState::new(5);
        for i in 0..5 {
            let before = state.is_expanded(i);
            state.toggle(i);
            assert_ne!(state.is_expanded(i), before);
            state.toggle(i);
            assert_eq!(state.is_expanded(i), before);
        }

        state.toggle(3);
        state.toggle(3);
        state.toggle(3);
        assert!(state.is_expanded(3));
    }

    #[test]
    fn test_toggle_is_independent_per_index() {
        let mut state = ExpansionState::new(4);
        state.toggle(1);

        assert!(state.toggle(2));
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(1));
        assert!(state.is_expanded(2));

        assert!(!state.toggle(2));
        assert!(state.is_expanded(1));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut state = ExpansionState::new(2);
        assert!(!state.toggle(2));
        assert!(!state.toggle(usize::MAX));
        assert_eq!(state.count(), 0);

        let mut empty = ExpansionState::new(0);
        assert!(!empty.toggle(0));
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut state = ExpansionState::new(3);
        state.toggle(1);
        state.expand_all();
        assert_eq!(state.iter().collect::<Vec<_>>(), vec![0, 1, 2]);

        state.collapse_all();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_sections_code_without_preview() {
        let t = tip(Some("let x = 1;"), None);
        assert_eq!(
            t.sections(),
            vec![
                TipSection::Description("Description"),
                TipSection::Code("let x = 1;")
            ]
        );
    }

    #[test]
    fn test_sections_description_only() {
        let t = tip(None, None);
        assert_eq!(t.sections(), vec![TipSection::Description("Description")]);
    }

    #[test]
    fn test_sections_preview_before_code() {
        let t = tip(Some("<b>hi</b>"), Some("<b>hi</b>"));
        let sections = t.sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1], TipSection::ResultPreview("<b>hi</b>"));
        assert_eq!(sections[2], TipSection::Code("<b>hi</b>"));
    }

    #[test]
    fn test_deserialize_camel_case_preview() {
        let json = r#"[{"title":"A","description":"B","resultHtml":"<p>C</p>","extra":1}]"#;
        let tips: Vec<Tip> = serde_json::from_str(json).unwrap();
        assert_eq!(tips[0].result_html.as_deref(), Some("<p>C</p>"));
        assert!(tips[0].code.is_none());
    }

    #[test]
    fn test_load_tips_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title":"T","description":"D","code":"x"}}]"#).unwrap();

        let tips = load_tips_file(file.path()).unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].code.as_deref(), Some("x"));
    }

    #[test]
    fn test_load_tips_file_errors() {
        let missing = load_tips_file(Path::new("/nonexistent/tips.json"));
        assert!(matches!(missing, Err(TipsError::Read { .. })));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{"title": "not an array"}}"#).unwrap();
        assert!(matches!(load_tips_file(bad.path()), Err(TipsError::Parse { .. })));

        let mut empty = tempfile::NamedTempFile::new().unwrap();
        write!(empty, "[]").unwrap();
        assert!(matches!(load_tips_file(empty.path()), Err(TipsError::Empty(_))));
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<h1>Getting started</h1><p>Welcome to the guide.</p>"),
            "Getting started\nWelcome to the guide."
        );
        assert_eq!(
            strip_markup("<p>city = <strong>unknown</strong></p>"),
            "city = unknown"
        );
        assert_eq!(strip_markup("a &lt;b&gt; &amp; c"), "a <b> & c");
        assert_eq!(strip_markup("line<br/>break"), "line\nbreak");
    }
}
