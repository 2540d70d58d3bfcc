//! Non-fatal diagnostics emitted while normalizing records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a normalization warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    UnresolvedJournal,
    MalformedDoi,
    IncompleteAuthors,
    MissingDoi,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UnresolvedJournal => "unresolved journal",
            Self::MalformedDoi => "malformed doi",
            Self::IncompleteAuthors => "incomplete authors",
            Self::MissingDoi => "missing doi",
        };
        f.write_str(label)
    }
}

/// A diagnostic tied to one record. Emitting a warning never mutates the
/// record and never halts the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// Citation key of the offending record.
    pub key: String,
    /// Field the warning refers to, when one applies.
    pub field: Option<String>,
    /// Human-readable description including the offending value.
    pub message: String,
}

impl Warning {
    pub fn unresolved_journal(key: impl Into<String>, value: &str) -> Self {
        Self {
            kind: WarningKind::UnresolvedJournal,
            key: key.into(),
            field: Some("journal".to_string()),
            message: format!("journal abbreviation for '{value}' is unknown; check CASSI directly"),
        }
    }

    pub fn malformed_doi(key: impl Into<String>, value: &str) -> Self {
        Self {
            kind: WarningKind::MalformedDoi,
            key: key.into(),
            field: Some("doi".to_string()),
            message: format!("DOI '{value}' does not start with '10'; confirm the identifier"),
        }
    }

    pub fn incomplete_authors(key: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::IncompleteAuthors,
            key: key.into(),
            field: Some("author".to_string()),
            message: "author list contains 'and others' and may be incomplete".to_string(),
        }
    }

    pub fn missing_doi(key: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MissingDoi,
            key: key.into(),
            field: None,
            message: "record has no doi field".to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry `{}`: {}", self.key, self.message)
    }
}
