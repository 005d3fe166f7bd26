use datascrub_types::{ResolvedToken, SelectorCatalog, Suggestion, SuggestionKind};

/// Tokenizer and suggestion rules for selector values.
///
/// Stateless; every operation is total and recomputes from scratch, so the
/// field state can call it on each keystroke.
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// Split `raw` on single spaces and resolve each segment against the catalog.
    ///
    /// Empty segments are kept, so `""` yields `[Raw("")]` and a trailing space
    /// yields a trailing `Raw("")`.
    pub fn resolve_tokens(catalog: &SelectorCatalog, raw: &str) -> Vec<ResolvedToken> {
        raw.split(' ')
            .map(|segment| match catalog.find(segment) {
                Some(entry) => ResolvedToken::Matched(entry.clone()),
                None => ResolvedToken::Raw(segment.to_string()),
            })
            .collect()
    }

    /// Suggestions for the token being edited (the last one).
    ///
    /// Rules, first match wins:
    /// - nothing resolved: nothing to suggest;
    /// - the token before the last one is a boolean operator: every value entry;
    /// - the last token is a fresh empty segment after other tokens: every boolean entry;
    /// - otherwise every entry whose literal contains the lower-cased last token.
    pub fn compute_suggestions(catalog: &SelectorCatalog, resolved: &[ResolvedToken]) -> Vec<Suggestion> {
        let Some((last, preceding)) = resolved.split_last() else {
            return Vec::new();
        };

        if preceding.last().and_then(ResolvedToken::kind) == Some(SuggestionKind::Boolean) {
            return catalog.value_entries().to_vec();
        }

        if !preceding.is_empty() && last.is_empty_raw() {
            return catalog.boolean_entries().to_vec();
        }

        let query = last.literal().to_lowercase();
        catalog
            .entries()
            .iter()
            .filter(|entry| entry.literal.contains(&query))
            .cloned()
            .collect()
    }

    /// Replace the token at `index` with `suggestion`.
    ///
    /// An out-of-range index targets the last token; an empty sequence becomes
    /// the single selected token.
    pub fn apply_suggestion_selection(resolved: &[ResolvedToken], suggestion: &Suggestion, index: usize) -> Vec<ResolvedToken> {
        let mut tokens = resolved.to_vec();
        let selected = ResolvedToken::Matched(suggestion.clone());
        match tokens.len() {
            0 => tokens.push(selected),
            len => tokens[index.min(len - 1)] = selected,
        }
        tokens
    }
}
