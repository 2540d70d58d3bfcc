//! Configuration options for normalization and output.
//!
//! Everything configurable is an explicit structure handed to the driver and
//! the writer at call time; there is no ambient process-wide state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Word sets steering title casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleConfig {
    /// Words left exactly as authored (codified technical terms).
    pub ignore_words: BTreeSet<String>,
    /// Words forced to full uppercase (acronyms), stored uppercased.
    pub upper_words: BTreeSet<String>,
    /// Minor words forced to lowercase (prepositions, articles,
    /// conjunctions), stored lowercased. First and last word of a title are
    /// still capitalized.
    pub lower_words: BTreeSet<String>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            ignore_words: to_set(["ff19SB"]),
            upper_words: to_set(["DNA", "RNA"]),
            lower_words: to_set(["for", "or", "and", "a", "the", "along", "is"]),
        }
    }
}

impl TitleConfig {
    /// Extend the word sets, normalizing case the way each set expects.
    pub fn with_extra_words<I, J, K>(mut self, ignore: I, upper: J, lower: K) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
        K: IntoIterator<Item = String>,
    {
        self.ignore_words.extend(ignore);
        self.upper_words
            .extend(upper.into_iter().map(|word| word.to_uppercase()));
        self.lower_words
            .extend(lower.into_iter().map(|word| word.to_lowercase()));
        self
    }
}

/// Options for re-serializing the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Fields written first, in this order; remaining fields follow
    /// alphabetically.
    pub field_order: Vec<String>,
    /// Case-insensitive field names deleted from every record before output.
    pub remove_fields: BTreeSet<String>,
    /// Drop comment blocks instead of emitting them at the top of the output.
    pub strip_comments: bool,
    /// Sort entries by citation key instead of preserving input order.
    pub sort_by_key: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            // ACS-style ordering within each entry.
            field_order: [
                "author", "title", "journal", "year", "volume", "number", "pages", "doi",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            remove_fields: to_set([
                "abstract",
                "eprint",
                "file",
                "pmid",
                "pdf",
                "mendeley-groups",
            ]),
            strip_comments: true,
            sort_by_key: false,
        }
    }
}

impl OutputConfig {
    pub fn with_field_order(mut self, order: Vec<String>) -> Self {
        self.field_order = order.into_iter().map(|name| name.to_lowercase()).collect();
        self
    }

    pub fn with_remove_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.remove_fields = fields
            .into_iter()
            .map(|name| name.to_lowercase())
            .collect();
        self
    }

    pub fn with_strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }

    pub fn with_sort_by_key(mut self, sort: bool) -> Self {
        self.sort_by_key = sort;
        self
    }
}

fn to_set<const N: usize>(words: [&str; N]) -> BTreeSet<String> {
    words.into_iter().map(str::to_string).collect()
}
