//! CASSI abbreviation table loading from CSV.
//!
//! The source file carries a header row with at least `PubTitle` and
//! `Abbreviation` columns (matched case-insensitively, any column order).
//! An optional `CODEN` column is ignored.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use bibtidy_model::AbbrevTable;

const NAME_COLUMN: &str = "PubTitle";
const ABBREVIATION_COLUMN: &str = "Abbreviation";

/// Load the abbreviation table from a CSV file.
///
/// Duplicate publication names overwrite earlier rows (last wins); rows with
/// an empty name or abbreviation are skipped.
pub fn load_abbrev_table(path: &Path) -> Result<AbbrevTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read abbreviation csv: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("read csv header: {}", path.display()))?
        .clone();
    let Some(name_idx) = find_column(&headers, NAME_COLUMN) else {
        bail!("abbreviation csv is missing required column `{NAME_COLUMN}`");
    };
    let Some(abbreviation_idx) = find_column(&headers, ABBREVIATION_COLUMN) else {
        bail!("abbreviation csv is missing required column `{ABBREVIATION_COLUMN}`");
    };

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read csv record: {}", path.display()))?;
        let name = cell(&record, name_idx);
        let abbreviation = cell(&record, abbreviation_idx);
        if name.is_empty() || abbreviation.is_empty() {
            continue;
        }
        pairs.push((name.to_string(), abbreviation.to_string()));
    }

    let table = AbbrevTable::from_pairs(pairs);
    debug!(
        source = %path.display(),
        entry_count = table.len(),
        "abbreviation table loaded"
    );
    Ok(table)
}

fn find_column(headers: &StringRecord, want: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| normalize_cell(header).eq_ignore_ascii_case(want))
}

fn cell<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    normalize_cell(record.get(index).unwrap_or(""))
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}
