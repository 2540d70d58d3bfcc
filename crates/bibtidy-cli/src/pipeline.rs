//! Pipeline stage functions for the `clean` command.
//!
//! Each stage is a plain function over the record store so the command
//! driver stays a readable sequence: ingest, normalize, prune, output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use bibtidy_ingest::{load_abbrev_table, parse_file};
use bibtidy_model::{AbbrevTable, OutputConfig, RecordStore, TitleConfig};
use bibtidy_output::write_file;
use bibtidy_transform::{NormalizeReport, normalize_store, prune_fields};

/// Inputs loaded during the ingest stage.
pub struct IngestResult {
    pub table: AbbrevTable,
    pub store: RecordStore,
}

/// Load the abbreviation table and parse the bibliography.
pub fn ingest(bib_path: &Path, cassi_path: &Path) -> Result<IngestResult> {
    let table = load_abbrev_table(cassi_path)
        .with_context(|| format!("load abbreviation table: {}", cassi_path.display()))?;
    let store = parse_file(bib_path)
        .with_context(|| format!("parse bibliography: {}", bib_path.display()))?;
    Ok(IngestResult { table, store })
}

/// Normalize every record in place, returning counters and warnings.
pub fn normalize(
    store: &mut RecordStore,
    table: &AbbrevTable,
    titles: &TitleConfig,
) -> NormalizeReport {
    normalize_store(store, table, titles)
}

/// Delete the configured clutter fields from every record.
pub fn prune(store: &mut RecordStore, config: &OutputConfig) -> usize {
    prune_fields(store, &config.remove_fields)
}

/// Write the cleaned bibliography, unless this is a dry run.
pub fn output(
    path: &Path,
    store: &RecordStore,
    config: &OutputConfig,
    dry_run: bool,
) -> Result<Option<PathBuf>> {
    if dry_run {
        debug!(output = %path.display(), "dry run, skipping write");
        return Ok(None);
    }
    write_file(path, store, config)?;
    Ok(Some(path.to_path_buf()))
}
