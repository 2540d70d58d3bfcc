//! End-to-end tests for the `clean` command.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use bibtidy_cli::cli::CleanArgs;
use bibtidy_cli::commands::run_clean;
use bibtidy_model::WarningKind;

const CASSI_CSV: &str = "\
Abbreviation,PubTitle,CODEN
J. Chem. Theory Comput.,Journal of Chemical Theory and Computation,JCTC9
J. Phys. Chem. B,Journal of Physical Chemistry B,JPCBFK
";

const BIB_INPUT: &str = r#"% exported library

@article{good2021,
  author = {Smith, J. and Jones, K.},
  title = {binding free energy for DNA},
  journal = {Journal of Chemical Theory and Computation},
  year = {2021},
  pages = {100-110},
  doi = {https://doi.org/10.1021/acs.jctc.1c00001},
  mendeley-groups = {Papers},
}

@article{bad2020,
  author = {Lee, H. and others},
  journal = {Unknown Obscure Serial},
  year = {2020},
  doi = {xyz123},
}
"#;

fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let cassi = dir.join("cassi.csv");
    let bib = dir.join("refs.bib");
    fs::write(&cassi, CASSI_CSV).unwrap();
    fs::write(&bib, BIB_INPUT).unwrap();
    (bib, cassi)
}

fn parse_args(argv: &[&str]) -> CleanArgs {
    CleanArgs::try_parse_from(argv).unwrap()
}

#[test]
fn clean_normalizes_and_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let (bib, cassi) = write_inputs(dir.path());
    let args = parse_args(&[
        "clean",
        bib.to_str().unwrap(),
        "--cassi",
        cassi.to_str().unwrap(),
    ]);

    let result = run_clean(&args).unwrap();

    assert_eq!(result.records, 2);
    assert_eq!(result.journals_replaced, 1);
    assert_eq!(result.dois_rewritten, 1);
    assert_eq!(result.pages_rewritten, 1);
    assert_eq!(result.fields_pruned, 1);

    let kinds: Vec<WarningKind> = result.warnings.iter().map(|warning| warning.kind).collect();
    assert!(kinds.contains(&WarningKind::UnresolvedJournal));
    assert!(kinds.contains(&WarningKind::MalformedDoi));
    assert!(kinds.contains(&WarningKind::IncompleteAuthors));
    assert!(!kinds.contains(&WarningKind::MissingDoi));

    let output = result.output.expect("output written");
    assert_eq!(output, dir.path().join("refs_clean.bib"));
    let cleaned = fs::read_to_string(output).unwrap();
    assert!(cleaned.contains("journal = {J. Chem. Theory Comput.}"));
    assert!(cleaned.contains("title = {Binding Free Energy for DNA}"));
    assert!(cleaned.contains("doi = {10.1021/acs.jctc.1c00001}"));
    assert!(cleaned.contains("pages = {100--110}"));
    assert!(!cleaned.contains("mendeley-groups"));
    // Problem record is emitted unchanged.
    assert!(cleaned.contains("journal = {Unknown Obscure Serial}"));
    assert!(cleaned.contains("doi = {xyz123}"));
    // Comments are stripped by default.
    assert!(!cleaned.contains("% exported library"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let (bib, cassi) = write_inputs(dir.path());
    let args = parse_args(&[
        "clean",
        bib.to_str().unwrap(),
        "--cassi",
        cassi.to_str().unwrap(),
        "--dry-run",
    ]);

    let result = run_clean(&args).unwrap();

    assert!(result.dry_run);
    assert!(result.output.is_none());
    assert!(!dir.path().join("refs_clean.bib").exists());
}

#[test]
fn keep_comments_and_sort_are_honored() {
    let dir = TempDir::new().unwrap();
    let (bib, cassi) = write_inputs(dir.path());
    let out = dir.path().join("sorted.bib");
    let args = parse_args(&[
        "clean",
        bib.to_str().unwrap(),
        "--cassi",
        cassi.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--keep-comments",
        "--sort",
    ]);

    run_clean(&args).unwrap();

    let cleaned = fs::read_to_string(out).unwrap();
    assert!(cleaned.starts_with("% exported library"));
    let bad = cleaned.find("@article{bad2020").unwrap();
    let good = cleaned.find("@article{good2021").unwrap();
    assert!(bad < good);
}

#[test]
fn no_prune_keeps_clutter_fields() {
    let dir = TempDir::new().unwrap();
    let (bib, cassi) = write_inputs(dir.path());
    let args = parse_args(&[
        "clean",
        bib.to_str().unwrap(),
        "--cassi",
        cassi.to_str().unwrap(),
        "--no-prune",
    ]);

    let result = run_clean(&args).unwrap();

    assert_eq!(result.fields_pruned, 0);
    let cleaned = fs::read_to_string(result.output.unwrap()).unwrap();
    assert!(cleaned.contains("mendeley-groups = {Papers}"));
}

#[test]
fn missing_cassi_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let (bib, _) = write_inputs(dir.path());
    let args = parse_args(&[
        "clean",
        bib.to_str().unwrap(),
        "--cassi",
        dir.path().join("absent.csv").to_str().unwrap(),
    ]);

    assert!(run_clean(&args).is_err());
}
