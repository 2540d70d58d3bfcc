//! Serialization and store behavior tests for the record model.

use bibtidy_model::{OutputConfig, Record, RecordStore, TitleConfig, Warning};

#[test]
fn store_preserves_input_order() {
    let mut store = RecordStore::new();
    store.push(Record::new("zeta", "article")).unwrap();
    store.push(Record::new("alpha", "article")).unwrap();
    let keys: Vec<&str> = store.iter().map(|record| record.key.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn warning_serializes() {
    let warning = Warning::unresolved_journal("smith2021", "Unknown Obscure Serial");
    let json = serde_json::to_string(&warning).expect("serialize warning");
    let round: Warning = serde_json::from_str(&json).expect("deserialize warning");
    assert_eq!(round.key, "smith2021");
    assert_eq!(round.field.as_deref(), Some("journal"));
    assert!(round.message.contains("Unknown Obscure Serial"));
}

#[test]
fn warning_display_names_the_record() {
    let warning = Warning::missing_doi("smith2021");
    assert_eq!(warning.to_string(), "entry `smith2021`: record has no doi field");
}

#[test]
fn default_output_config_matches_acs_order() {
    let config = OutputConfig::default();
    assert_eq!(config.field_order.first().map(String::as_str), Some("author"));
    assert_eq!(config.field_order.last().map(String::as_str), Some("doi"));
    assert!(config.remove_fields.contains("mendeley-groups"));
    assert!(config.strip_comments);
    assert!(!config.sort_by_key);
}

#[test]
fn title_config_extra_words_are_case_normalized() {
    let config = TitleConfig::default().with_extra_words(
        ["ff14SB".to_string()],
        ["nmr".to_string()],
        ["Via".to_string()],
    );
    assert!(config.ignore_words.contains("ff14SB"));
    assert!(config.upper_words.contains("NMR"));
    assert!(config.lower_words.contains("via"));
}
