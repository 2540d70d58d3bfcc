use std::path::PathBuf;

use bibtidy_model::Warning;

/// Outcome of one `clean` run, feeding the terminal summary.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Written output path; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub records: usize,
    pub comments: usize,
    pub journals_replaced: usize,
    pub titles_rewritten: usize,
    pub dois_rewritten: usize,
    pub pages_rewritten: usize,
    pub fields_pruned: usize,
    pub warnings: Vec<Warning>,
    pub dry_run: bool,
}
