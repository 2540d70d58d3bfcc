//! Field pruning: drop administrative fields from every record.

use std::collections::BTreeSet;

use tracing::debug;

use bibtidy_model::RecordStore;

/// Remove the configured field names (case-insensitive) from every record.
/// Absent fields are a no-op. Returns the number of fields removed.
pub fn prune_fields(store: &mut RecordStore, remove: &BTreeSet<String>) -> usize {
    let mut removed = 0usize;
    for record in store.iter_mut() {
        for name in remove {
            if record.remove(name).is_some() {
                removed += 1;
            }
        }
    }
    debug!(field_count = removed, "pruning complete");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibtidy_model::Record;

    #[test]
    fn pruning_is_idempotent_and_tolerates_absent_fields() {
        let mut store = RecordStore::new();
        let mut record = Record::new("a1", "article");
        record.set("abstract", "long text");
        record.set("title", "Kept");
        store.push(record).unwrap();

        let remove: BTreeSet<String> = ["Abstract".to_string(), "pmid".to_string()]
            .into_iter()
            .collect();
        assert_eq!(prune_fields(&mut store, &remove), 1);
        assert_eq!(prune_fields(&mut store, &remove), 0);
        let record = &store.records[0];
        assert!(!record.has_field("abstract"));
        assert_eq!(record.get("title"), Some("Kept"));
    }
}
