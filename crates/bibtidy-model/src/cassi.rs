//! CASSI abbreviation table.
//!
//! Maps full publication names to their standardized abbreviations. The
//! table is one-to-one name -> abbreviation; several name variants may be
//! loaded that map to the same abbreviation, so a value that is already an
//! abbreviation counts as normalized.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Read-only lookup table from publication name to abbreviation.
///
/// Built once per run from tabular input; duplicate source rows with the
/// same name silently overwrite (last wins).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbrevTable {
    /// Full publication name, case-sensitive as authored -> abbreviation.
    entries: BTreeMap<String, String>,
    /// Uppercased name -> name as authored, for case-insensitive resolution.
    upper_index: BTreeMap<String, String>,
    /// All abbreviation values, for the already-normalized check.
    abbreviations: BTreeSet<String>,
}

impl AbbrevTable {
    /// Build a table from (name, abbreviation) pairs, last wins on duplicates.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (name, abbreviation) in pairs {
            entries.insert(name.into(), abbreviation.into());
        }
        let upper_index = entries
            .keys()
            .map(|name| (name.to_uppercase(), name.clone()))
            .collect();
        let abbreviations = entries.values().cloned().collect();
        Self {
            entries,
            upper_index,
            abbreviations,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact full-name lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Case-insensitive full-name lookup.
    pub fn get_ci(&self, name: &str) -> Option<&str> {
        self.upper_index
            .get(&name.to_uppercase())
            .and_then(|name| self.get(name))
    }

    /// True when the value is already one of the table's abbreviations.
    pub fn is_abbreviation(&self, value: &str) -> bool {
        self.abbreviations.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AbbrevTable {
        AbbrevTable::from_pairs([(
            "Journal of Chemical Theory and Computation",
            "J. Chem. Theory Comput.",
        )])
    }

    #[test]
    fn exact_and_case_insensitive_lookup() {
        let table = table();
        assert_eq!(
            table.get("Journal of Chemical Theory and Computation"),
            Some("J. Chem. Theory Comput.")
        );
        assert_eq!(table.get("JOURNAL OF CHEMICAL THEORY AND COMPUTATION"), None);
        assert_eq!(
            table.get_ci("JOURNAL OF CHEMICAL THEORY AND COMPUTATION"),
            Some("J. Chem. Theory Comput.")
        );
        assert!(table.is_abbreviation("J. Chem. Theory Comput."));
        assert!(!table.is_abbreviation("Nature"));
    }

    #[test]
    fn duplicate_names_last_wins() {
        let table = AbbrevTable::from_pairs([("Nature", "Nat."), ("Nature", "Nature")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Nature"), Some("Nature"));
    }
}
