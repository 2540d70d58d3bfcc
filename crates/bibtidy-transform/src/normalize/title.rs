//! Title-case conversion with configurable word overrides.

use bibtidy_model::TitleConfig;

/// Standard English small words kept lowercase inside titles, applied in
/// addition to the configured lower-word set.
const SMALL_WORDS: [&str; 19] = [
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "of", "on", "or", "the",
    "to", "v", "via", "vs",
];

/// Convert a title to title case, word by word.
///
/// Override priority per word: never-modify set, always-uppercase set,
/// always-lowercase set (the built-in small words plus the configured
/// additions), all-caps-input recapitalization, then the default rule
/// (capitalize all-lowercase words, preserve internal capitals). Words
/// carrying braces are protected spans and pass through untouched. The first
/// and last word are always capitalized, minor-word status notwithstanding.
pub fn title_case(input: &str, config: &TitleConfig) -> String {
    let all_caps = is_all_caps(input);
    let words: Vec<&str> = input.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(index, word)| cased_word(word, index == 0 || index == last, all_caps, config))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cased_word(word: &str, edge: bool, all_caps: bool, config: &TitleConfig) -> String {
    if config.ignore_words.contains(word) {
        return word.to_string();
    }
    if word.contains('{') || word.contains('}') {
        return word.to_string();
    }
    let core = word.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());
    if config.upper_words.contains(&core.to_uppercase()) {
        return word.to_uppercase();
    }
    let core_lower = core.to_lowercase();
    let is_minor =
        SMALL_WORDS.contains(&core_lower.as_str()) || config.lower_words.contains(&core_lower);
    if is_minor && !edge {
        return word.to_lowercase();
    }
    if all_caps || is_minor {
        return capitalize(&word.to_lowercase());
    }
    if word.chars().any(char::is_uppercase) {
        word.to_string()
    } else {
        capitalize(word)
    }
}

/// Uppercase the first alphabetic character, leaving the rest as given.
fn capitalize(word: &str) -> String {
    let mut done = false;
    word.chars()
        .map(|ch| {
            if !done && ch.is_alphabetic() {
                done = true;
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

/// True when the input has letters and none of them are lowercase.
fn is_all_caps(input: &str) -> bool {
    input.chars().any(char::is_alphabetic) && !input.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps_detection() {
        assert!(is_all_caps("DNA REPAIR IN 2020"));
        assert!(!is_all_caps("DNA Repair"));
        assert!(!is_all_caps("123 456"));
    }

    #[test]
    fn capitalize_skips_leading_punctuation() {
        assert_eq!(capitalize("(and"), "(And");
        assert_eq!(capitalize("word"), "Word");
    }
}
