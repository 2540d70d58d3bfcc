use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span, warn};

use bibtidy_model::{OutputConfig, TitleConfig};

use crate::cli::CleanArgs;
use crate::pipeline::{IngestResult, ingest, normalize, output, prune};
use crate::summary::apply_table_style;
use crate::types::CleanResult;

pub fn run_defaults() -> Result<()> {
    let config = OutputConfig::default();
    let titles = TitleConfig::default();
    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    apply_table_style(&mut table);
    table.add_row(vec!["field order".to_string(), config.field_order.join(", ")]);
    table.add_row(vec![
        "removed fields".to_string(),
        join_set(&config.remove_fields),
    ]);
    table.add_row(vec![
        "lowercase words".to_string(),
        join_set(&titles.lower_words),
    ]);
    table.add_row(vec![
        "uppercase words".to_string(),
        join_set(&titles.upper_words),
    ]);
    table.add_row(vec![
        "ignored words".to_string(),
        join_set(&titles.ignore_words),
    ]);
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let clean_span = info_span!("clean", input = %args.input.display());
    let _clean_guard = clean_span.enter();

    // =========================================================================
    // Stage 1: Ingest - Load the abbreviation table and the bibliography
    // =========================================================================
    let ingest_start = Instant::now();
    let IngestResult { table, mut store } = ingest(&args.input, &args.cassi)?;
    info!(
        record_count = store.len(),
        comment_count = store.comments.len(),
        abbreviation_count = table.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let titles = TitleConfig::default().with_extra_words(
        args.ignore_word.clone(),
        args.upper_word.clone(),
        args.lower_word.clone(),
    );
    let mut config = OutputConfig::default()
        .with_strip_comments(!args.keep_comments)
        .with_sort_by_key(args.sort);
    if !args.field_order.is_empty() {
        config = config.with_field_order(args.field_order.clone());
    }
    if !args.remove_field.is_empty() {
        config = config.with_remove_fields(args.remove_field.iter().cloned());
    }

    // =========================================================================
    // Stage 2: Normalize - Per-field rewriting and diagnostics
    // =========================================================================
    let normalize_start = Instant::now();
    let report = normalize(&mut store, &table, &titles);
    for warning in &report.warnings {
        warn!(entry = %warning.key, kind = %warning.kind, "{warning}");
    }
    info!(
        journals_replaced = report.journals_replaced,
        titles_rewritten = report.titles_rewritten,
        dois_rewritten = report.dois_rewritten,
        pages_rewritten = report.pages_rewritten,
        warning_count = report.warnings.len(),
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalization complete"
    );

    // =========================================================================
    // Stage 3: Prune - Drop reference-manager clutter fields
    // =========================================================================
    let fields_pruned = if args.no_prune {
        0
    } else {
        prune(&mut store, &config)
    };

    // =========================================================================
    // Stage 4: Output - Re-serialize the cleaned bibliography
    // =========================================================================
    let output_path = resolve_output_path(args);
    let written = output(&output_path, &store, &config, args.dry_run)?;
    if let Some(path) = &written {
        info!(output = %path.display(), record_count = store.len(), "bibliography written");
    }

    Ok(CleanResult {
        input: args.input.clone(),
        output: written,
        records: store.len(),
        comments: store.comments.len(),
        journals_replaced: report.journals_replaced,
        titles_rewritten: report.titles_rewritten,
        dois_rewritten: report.dois_rewritten,
        pages_rewritten: report.pages_rewritten,
        fields_pruned,
        warnings: report.warnings,
        dry_run: args.dry_run,
    })
}

/// Default output lands next to the input with a `_clean` suffix.
fn resolve_output_path(args: &CleanArgs) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    let stem = args
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("bibliography");
    args.input.with_file_name(format!("{stem}_clean.bib"))
}

fn join_set(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn clean_args(argv: &[&str]) -> CleanArgs {
        CleanArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn output_defaults_to_clean_suffix_next_to_input() {
        let args = clean_args(&["clean", "refs/paper.bib", "--cassi", "cassi.csv"]);
        assert_eq!(
            resolve_output_path(&args),
            PathBuf::from("refs/paper_clean.bib")
        );
    }

    #[test]
    fn explicit_output_path_wins() {
        let args = clean_args(&[
            "clean",
            "paper.bib",
            "--cassi",
            "cassi.csv",
            "-o",
            "out.bib",
        ]);
        assert_eq!(resolve_output_path(&args), PathBuf::from("out.bib"));
    }
}
