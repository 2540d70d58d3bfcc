//! Journal-name resolution against the CASSI abbreviation table.

use bibtidy_model::AbbrevTable;

/// Result of resolving one journal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalOutcome {
    /// Already normalized, or nothing safe to change.
    Unchanged,
    /// Resolved to a new value.
    Replaced(String),
    /// No match; caller should warn and leave the value alone.
    Unresolved,
}

/// Resolve a journal name to its CASSI abbreviation.
///
/// Exact matches are tried before any heuristic so an already-correct value
/// is never touched. The fallback substitutes abbreviations for uppercase
/// tokens that are themselves table keys (acronym-style names), and commits
/// only when the whole value matches a known full name ignoring case.
/// Anything else degrades to `Unresolved` rather than guessing.
pub fn normalize_journal(value: &str, table: &AbbrevTable) -> JournalOutcome {
    if table.is_abbreviation(value) {
        return JournalOutcome::Unchanged;
    }
    if let Some(abbreviation) = table.get(value) {
        return JournalOutcome::Replaced(abbreviation.to_string());
    }
    let substituted = substitute_tokens(value, table);
    if let Some(abbreviation) = table.get_ci(value) {
        if substituted != value {
            return JournalOutcome::Replaced(substituted);
        }
        return JournalOutcome::Replaced(abbreviation.to_string());
    }
    if table.get(&substituted).is_none() {
        return JournalOutcome::Unresolved;
    }
    JournalOutcome::Unchanged
}

/// Replace each word token whose uppercase form is a table key with the
/// corresponding abbreviation; delimiters pass through verbatim.
fn substitute_tokens(value: &str, table: &AbbrevTable) -> String {
    let mut out = String::with_capacity(value.len());
    for (is_word, token) in split_word_tokens(value) {
        match table.get(&token.to_uppercase()) {
            Some(abbreviation) if is_word => out.push_str(abbreviation),
            _ => out.push_str(token),
        }
    }
    out
}

/// Split into alternating word/non-word spans, where word characters are
/// ASCII alphanumerics and underscore.
fn split_word_tokens(value: &str) -> Vec<(bool, &str)> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (idx, ch) in value.char_indices() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        match current {
            Some(kind) if kind == is_word => {}
            Some(kind) => {
                tokens.push((kind, &value[start..idx]));
                start = idx;
                current = Some(is_word);
            }
            None => current = Some(is_word),
        }
    }
    if let Some(kind) = current {
        tokens.push((kind, &value[start..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_split_alternates() {
        let tokens = split_word_tokens("J. Chem.");
        assert_eq!(
            tokens,
            vec![(true, "J"), (false, ". "), (true, "Chem"), (false, ".")]
        );
    }

    #[test]
    fn token_substitution_uses_uppercase_keys() {
        let table = AbbrevTable::from_pairs([("JCTC", "J. Chem. Theory Comput.")]);
        assert_eq!(
            substitute_tokens("jctc", &table),
            "J. Chem. Theory Comput."
        );
    }
}
