//! DOI cleanup: strip resolver URL prefixes, flag malformed identifiers.

/// The `dx.` host variant must be checked before the plain resolver prefix.
const DX_RESOLVER_PREFIX: &str = "https://dx.doi.org/";
const RESOLVER_PREFIX: &str = "https://doi.org/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoiOutcome {
    /// Resolver prefix stripped.
    Rewritten(String),
    /// Already a bare, well-formed identifier.
    Unchanged,
    /// Does not look like a DOI; caller should warn and leave it alone.
    Malformed,
}

pub fn normalize_doi(value: &str) -> DoiOutcome {
    if let Some(bare) = value.strip_prefix(DX_RESOLVER_PREFIX) {
        return DoiOutcome::Rewritten(bare.to_string());
    }
    if let Some(bare) = value.strip_prefix(RESOLVER_PREFIX) {
        return DoiOutcome::Rewritten(bare.to_string());
    }
    if !value.starts_with("10") {
        return DoiOutcome::Malformed;
    }
    DoiOutcome::Unchanged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_resolver_prefixes() {
        assert_eq!(
            normalize_doi("https://doi.org/10.1021/acs.jctc.1c00001"),
            DoiOutcome::Rewritten("10.1021/acs.jctc.1c00001".to_string())
        );
        assert_eq!(
            normalize_doi("https://dx.doi.org/10.1021/xyz"),
            DoiOutcome::Rewritten("10.1021/xyz".to_string())
        );
    }

    #[test]
    fn bare_doi_is_unchanged() {
        assert_eq!(normalize_doi("10.1021/xyz"), DoiOutcome::Unchanged);
    }

    #[test]
    fn non_doi_is_flagged() {
        assert_eq!(normalize_doi("xyz123"), DoiOutcome::Malformed);
    }
}
