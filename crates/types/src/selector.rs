//! Selector tokens: the catalog of known tokens and the resolved-token model.
//!
//! A selector is a single line such as `$string && !$user` where every
//! space-delimited segment is either a known catalog entry or free text (for
//! example a custom field name). The catalog is fixed for the lifetime of the
//! process and is shared by the engine, the TUI and the CLI.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Grammatical role of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A data-category placeholder such as `$string` or `$user`.
    Value,
    /// A logical operator usable between value tokens.
    Boolean,
}

/// A single catalog entry offered as an autocomplete candidate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    /// Exact text representing this token.
    pub literal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Suggestion {
    pub fn value(literal: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: SuggestionKind::Value,
            literal: literal.into(),
            description: Some(description.into()),
        }
    }

    pub fn boolean(literal: impl Into<String>) -> Self {
        Self {
            kind: SuggestionKind::Boolean,
            literal: literal.into(),
            description: None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.kind == SuggestionKind::Boolean
    }
}

/// One segment of a field value after catalog lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "token", rename_all = "lowercase")]
pub enum ResolvedToken {
    /// The segment matched a catalog literal exactly.
    Matched(Suggestion),
    /// Free text kept as typed; may be empty.
    Raw(String),
}

impl ResolvedToken {
    pub fn literal(&self) -> &str {
        match self {
            ResolvedToken::Matched(suggestion) => &suggestion.literal,
            ResolvedToken::Raw(text) => text,
        }
    }

    pub fn kind(&self) -> Option<SuggestionKind> {
        match self {
            ResolvedToken::Matched(suggestion) => Some(suggestion.kind),
            ResolvedToken::Raw(_) => None,
        }
    }

    pub fn is_empty_raw(&self) -> bool {
        matches!(self, ResolvedToken::Raw(text) if text.is_empty())
    }
}

/// Joins resolved tokens back into the external single-string form.
pub fn join_literals(tokens: &[ResolvedToken]) -> String {
    tokens.iter().map(ResolvedToken::literal).collect::<Vec<_>>().join(" ")
}

static STANDARD_CATALOG: Lazy<SelectorCatalog> = Lazy::new(|| {
    SelectorCatalog::new(vec![
        Suggestion::value("$string", "Any string value"),
        Suggestion::value("$number", "Any integer or float value"),
        Suggestion::value("$datetime", "Timestamps and dates"),
        Suggestion::value("$array", "Any JSON array value"),
        Suggestion::value("$object", "Any JSON object"),
        Suggestion::value("$error", "An exception instance"),
        Suggestion::value("$stacktrace", "A stacktrace instance"),
        Suggestion::value("$frame", "A stacktrace frame"),
        Suggestion::value("$http", "HTTP request context"),
        Suggestion::value("$user", "User context"),
        Suggestion::value("$message", "The event message"),
        Suggestion::value("$thread", "A thread instance"),
        Suggestion::value("$breadcrumb", "A breadcrumb"),
        Suggestion::value("$span", "A trace span"),
        Suggestion::value("$sdk", "SDK name and version information"),
        Suggestion::boolean("&&"),
        Suggestion::boolean("||"),
        Suggestion::boolean("!"),
    ])
});

/// Ordered list of known selector tokens.
///
/// Kind subsets are computed once at construction so suggestion rules can
/// hand out the full value or boolean list without filtering on each keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorCatalog {
    entries: Vec<Suggestion>,
    value_entries: Vec<Suggestion>,
    boolean_entries: Vec<Suggestion>,
}

impl SelectorCatalog {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        let (boolean_entries, value_entries): (Vec<_>, Vec<_>) = entries.iter().cloned().partition(Suggestion::is_boolean);
        Self {
            entries,
            value_entries,
            boolean_entries,
        }
    }

    /// The process-wide catalog of data-privacy selectors.
    pub fn standard() -> &'static SelectorCatalog {
        &STANDARD_CATALOG
    }

    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    pub fn value_entries(&self) -> &[Suggestion] {
        &self.value_entries
    }

    pub fn boolean_entries(&self) -> &[Suggestion] {
        &self.boolean_entries
    }

    /// First entry whose literal equals `literal` exactly (case-sensitive).
    pub fn find(&self, literal: &str) -> Option<&Suggestion> {
        self.entries.iter().find(|entry| entry.literal == literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_values_before_booleans() {
        let catalog = SelectorCatalog::standard();
        assert_eq!(catalog.entries().len(), 18);
        assert_eq!(catalog.value_entries().len(), 15);
        let booleans: Vec<&str> = catalog.boolean_entries().iter().map(|s| s.literal.as_str()).collect();
        assert_eq!(booleans, vec!["&&", "||", "!"]);
        assert_eq!(catalog.entries()[0].literal, "$string");
        assert!(catalog.entries()[..15].iter().all(|s| s.kind == SuggestionKind::Value));
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let catalog = SelectorCatalog::standard();
        assert_eq!(catalog.find("$user").map(|s| s.kind), Some(SuggestionKind::Value));
        assert!(catalog.find("$USER").is_none());
        assert!(catalog.find("$use").is_none());
    }

    #[test]
    fn resolved_token_literal_and_kind() {
        let matched = ResolvedToken::Matched(Suggestion::boolean("||"));
        let raw = ResolvedToken::Raw("custom.field".into());
        assert_eq!(matched.literal(), "||");
        assert_eq!(matched.kind(), Some(SuggestionKind::Boolean));
        assert_eq!(raw.literal(), "custom.field");
        assert_eq!(raw.kind(), None);
        assert!(ResolvedToken::Raw(String::new()).is_empty_raw());
        assert!(!raw.is_empty_raw());
    }

    #[test]
    fn join_literals_uses_single_spaces() {
        let tokens = vec![
            ResolvedToken::Matched(Suggestion::value("$string", "Any string value")),
            ResolvedToken::Matched(Suggestion::boolean("&&")),
            ResolvedToken::Raw(String::new()),
        ];
        assert_eq!(join_literals(&tokens), "$string && ");
        assert_eq!(join_literals(&[]), "");
    }

    #[test]
    fn resolved_token_serializes_tagged() {
        let json = serde_json::to_value(ResolvedToken::Raw("x".into())).expect("serialize token");
        assert_eq!(json, serde_json::json!({"type": "raw", "token": "x"}));
        let matched = serde_json::to_value(ResolvedToken::Matched(Suggestion::boolean("!"))).expect("serialize token");
        assert_eq!(matched["token"]["kind"], "boolean");
        assert!(matched["token"].get("description").is_none());
    }
}
