//! BibTeX output.
//!
//! Renders a record store back to BibTeX text: two-space indent, braced
//! values, configured fields first and the rest alphabetically, entries
//! separated by a blank line. Comments, when kept, are emitted together at
//! the top of the output.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use bibtidy_model::{OutputConfig, Record, RecordStore};

/// Render the store to BibTeX text.
pub fn render_store(store: &RecordStore, config: &OutputConfig) -> String {
    let mut out = String::new();
    if !config.strip_comments {
        for comment in &store.comments {
            out.push_str(comment);
            out.push_str("\n\n");
        }
    }
    let mut ordered: Vec<&Record> = store.iter().collect();
    if config.sort_by_key {
        ordered.sort_by(|a, b| a.key.cmp(&b.key));
    }
    for (index, record) in ordered.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_record(&mut out, record, &config.field_order);
    }
    out
}

/// Render the store and write it to a file as one whole-file operation.
pub fn write_file(path: &Path, store: &RecordStore, config: &OutputConfig) -> Result<()> {
    let rendered = render_store(store, config);
    std::fs::write(path, rendered)
        .with_context(|| format!("write bibliography: {}", path.display()))?;
    debug!(
        output = %path.display(),
        record_count = store.len(),
        "bibliography written"
    );
    Ok(())
}

fn render_record(out: &mut String, record: &Record, field_order: &[String]) {
    let mut lines = Vec::new();
    let mut written: BTreeSet<String> = BTreeSet::new();
    for name in field_order {
        let name = name.to_lowercase();
        if let Some(value) = record.get(&name) {
            lines.push(format!("  {name} = {{{value}}}"));
            written.insert(name);
        }
    }
    // Fields outside the configured order follow alphabetically.
    for (name, value) in &record.fields {
        if !written.contains(name) {
            lines.push(format!("  {name} = {{{value}}}"));
        }
    }
    if lines.is_empty() {
        out.push_str(&format!("@{}{{{}}}\n", record.entry_type, record.key));
    } else {
        out.push_str(&format!(
            "@{}{{{},\n{}\n}}\n",
            record.entry_type,
            record.key,
            lines.join(",\n")
        ));
    }
}
