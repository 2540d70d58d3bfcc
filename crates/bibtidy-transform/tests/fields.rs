//! DOI, page-range, and author normalizer tests.

use bibtidy_transform::normalize::author::author_list_incomplete;
use bibtidy_transform::normalize::doi::{DoiOutcome, normalize_doi};
use bibtidy_transform::normalize::pages::normalize_pages;
use proptest::prelude::proptest;

#[test]
fn dx_prefix_is_checked_before_plain_resolver() {
    assert_eq!(
        normalize_doi("https://dx.doi.org/10.1000/1"),
        DoiOutcome::Rewritten("10.1000/1".to_string())
    );
    assert_eq!(
        normalize_doi("https://doi.org/10.1000/1"),
        DoiOutcome::Rewritten("10.1000/1".to_string())
    );
}

#[test]
fn doi_outcomes_cover_all_cases() {
    assert_eq!(
        normalize_doi("https://doi.org/10.1021/acs.jctc.1c00001"),
        DoiOutcome::Rewritten("10.1021/acs.jctc.1c00001".to_string())
    );
    assert_eq!(normalize_doi("10.1021/xyz"), DoiOutcome::Unchanged);
    assert_eq!(normalize_doi("xyz123"), DoiOutcome::Malformed);
}

#[test]
fn page_ranges_use_en_dashes() {
    assert_eq!(normalize_pages("100-110"), Some("100--110".to_string()));
    assert_eq!(normalize_pages("100 110"), Some("100--110".to_string()));
    assert_eq!(normalize_pages("100--110"), None);
}

#[test]
fn author_check_never_fires_on_complete_lists() {
    assert!(!author_list_incomplete("Case, D. A. and Aktulga, H. M."));
    assert!(author_list_incomplete("Case, D. A. and others"));
}

fn apply_pages(value: &str) -> String {
    normalize_pages(value).unwrap_or_else(|| value.to_string())
}

proptest! {
    // Applying the page normalizer twice never differs from applying it once.
    #[test]
    fn page_normalization_is_idempotent(value in "[0-9 eA-Z-]{0,12}") {
        let once = apply_pages(&value);
        let twice = apply_pages(&once);
        assert_eq!(once, twice);
    }
}
