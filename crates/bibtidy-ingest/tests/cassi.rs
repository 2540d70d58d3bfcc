//! Abbreviation CSV loading tests.

use std::io::Write;

use bibtidy_ingest::load_abbrev_table;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file
}

#[test]
fn loads_table_with_coden_column_ignored() {
    let file = write_csv(
        "Abbreviation,PubTitle,CODEN\n\
         J. Chem. Theory Comput.,Journal of Chemical Theory and Computation,JCTCCE\n\
         J. Phys. Chem. B,Journal of Physical Chemistry B,JPCBFK\n",
    );
    let table = load_abbrev_table(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get("Journal of Physical Chemistry B"),
        Some("J. Phys. Chem. B")
    );
}

#[test]
fn header_match_is_case_insensitive_and_order_free() {
    let file = write_csv("pubtitle,abbreviation\nNature Chemistry,Nat. Chem.\n");
    let table = load_abbrev_table(file.path()).unwrap();
    assert_eq!(table.get("Nature Chemistry"), Some("Nat. Chem."));
}

#[test]
fn duplicate_names_last_wins() {
    let file = write_csv(
        "PubTitle,Abbreviation\n\
         Nature,Nat.\n\
         Nature,Nature\n",
    );
    let table = load_abbrev_table(file.path()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("Nature"), Some("Nature"));
}

#[test]
fn blank_rows_are_skipped() {
    let file = write_csv("PubTitle,Abbreviation\nNature,Nat.\n,\n  ,Nat. 2\n");
    let table = load_abbrev_table(file.path()).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn missing_required_column_is_an_error() {
    let file = write_csv("Title,Abbreviation\nNature,Nat.\n");
    let error = load_abbrev_table(file.path()).unwrap_err();
    assert!(error.to_string().contains("PubTitle"));
}
