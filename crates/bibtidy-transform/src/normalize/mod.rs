//! Normalization driver: dispatch each field to its normalizer and collect
//! warnings across the whole store.

pub mod author;
pub mod doi;
pub mod journal;
pub mod pages;
pub mod title;

use tracing::debug;

use bibtidy_model::{AbbrevTable, Record, RecordStore, TitleConfig, Warning};

use crate::normalize::doi::DoiOutcome;
use crate::normalize::journal::JournalOutcome;

/// Closed set of field dispositions, resolved once per field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Journal,
    Title,
    Doi,
    Pages,
    Author,
    /// Unrecognized fields pass through untouched.
    Other,
}

impl FieldKind {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "journal" => Self::Journal,
            "title" => Self::Title,
            "doi" => Self::Doi,
            "pages" => Self::Pages,
            "author" => Self::Author,
            _ => Self::Other,
        }
    }
}

/// Counters for the run summary.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub warnings: Vec<Warning>,
    pub journals_replaced: usize,
    pub titles_rewritten: usize,
    pub dois_rewritten: usize,
    pub pages_rewritten: usize,
}

/// Normalize every field of every record in place.
///
/// Warnings never halt the pass; uncertain cases leave the value unchanged.
pub fn normalize_store(
    store: &mut RecordStore,
    table: &AbbrevTable,
    titles: &TitleConfig,
) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    for record in store.iter_mut() {
        normalize_record(record, table, titles, &mut report);
    }
    debug!(
        journals_replaced = report.journals_replaced,
        titles_rewritten = report.titles_rewritten,
        dois_rewritten = report.dois_rewritten,
        pages_rewritten = report.pages_rewritten,
        warning_count = report.warnings.len(),
        "normalization complete"
    );
    report
}

fn normalize_record(
    record: &mut Record,
    table: &AbbrevTable,
    titles: &TitleConfig,
    report: &mut NormalizeReport,
) {
    // Materialize the field list so mutation never races the iteration.
    for name in record.field_names() {
        let Some(value) = record.get(&name).map(str::to_string) else {
            continue;
        };
        match FieldKind::from_name(&name) {
            FieldKind::Journal => match journal::normalize_journal(&value, table) {
                JournalOutcome::Replaced(replacement) => {
                    record.set(&name, replacement);
                    report.journals_replaced += 1;
                }
                JournalOutcome::Unresolved => {
                    report
                        .warnings
                        .push(Warning::unresolved_journal(record.key.as_str(), &value));
                }
                JournalOutcome::Unchanged => {}
            },
            FieldKind::Title => {
                let cased = title::title_case(&value, titles);
                if cased != value {
                    record.set(&name, cased);
                    report.titles_rewritten += 1;
                }
            }
            FieldKind::Doi => match doi::normalize_doi(&value) {
                DoiOutcome::Rewritten(bare) => {
                    record.set(&name, bare);
                    report.dois_rewritten += 1;
                }
                DoiOutcome::Malformed => {
                    report
                        .warnings
                        .push(Warning::malformed_doi(record.key.as_str(), &value));
                }
                DoiOutcome::Unchanged => {}
            },
            FieldKind::Pages => {
                if let Some(range) = pages::normalize_pages(&value) {
                    record.set(&name, range);
                    report.pages_rewritten += 1;
                }
            }
            FieldKind::Author => {
                if author::author_list_incomplete(&value) {
                    report
                        .warnings
                        .push(Warning::incomplete_authors(record.key.as_str()));
                }
            }
            FieldKind::Other => {}
        }
    }
    if !record.has_field("doi") {
        report.warnings.push(Warning::missing_doi(record.key.as_str()));
    }
}
