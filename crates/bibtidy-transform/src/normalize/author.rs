//! Author-list diagnostics. Pure check, never mutates.

/// True when the list was truncated with "and others" (any casing).
pub fn author_list_incomplete(value: &str) -> bool {
    value.to_lowercase().contains("and others")
}

#[cfg(test)]
mod tests {
    use super::author_list_incomplete;

    #[test]
    fn detects_truncated_lists() {
        assert!(author_list_incomplete("Smith, J. and others"));
        assert!(author_list_incomplete("Smith, J. AND OTHERS"));
        assert!(!author_list_incomplete("Smith, J. and Jones, K."));
    }
}
