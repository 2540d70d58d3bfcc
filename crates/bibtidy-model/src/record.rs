//! Bibliographic records and the in-memory record store.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{BibError, Result};

/// A single bibliographic entry: citation key, entry type, and named fields.
///
/// Field names are case-insensitive and stored lowercased, matching the
/// homogenization the parser applies. Values are kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Citation key, unique within a store (e.g., "leddin2022").
    pub key: String,
    /// Entry type without the leading `@` (e.g., "article", "software").
    pub entry_type: String,
    /// Lowercased field name -> field value.
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entry_type: entry_type.into().to_lowercase(),
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_lowercase(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(&name.to_lowercase())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_lowercase())
    }

    /// Materialized list of field names, for mutation while visiting.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }
}

/// Ordered collection of records, preserving input order.
///
/// Citation keys are unique; inserting a duplicate is a fatal condition
/// surfaced at parse time. Comment blocks found outside entries are carried
/// alongside so the writer can optionally re-emit them. Serialize-only: the
/// internal key set would not survive a deserialize round trip.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordStore {
    pub records: Vec<Record>,
    pub comments: Vec<String>,
    #[serde(skip)]
    keys: BTreeSet<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, rejecting duplicate citation keys.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if !self.keys.insert(record.key.clone()) {
            return Err(BibError::DuplicateKey(record.key));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn push_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Record> {
        self.records.iter_mut()
    }
}
