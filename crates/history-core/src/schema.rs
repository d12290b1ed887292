/// The fixed 8-column header every valid journey-history export carries.
pub const EXPECTED_HEADER: [&str; 8] = [
    "Date",
    "Start Time",
    "End Time",
    "Journey/Action",
    "Charge",
    "Credit",
    "Balance",
    "Note",
];

// ── SchemaValidator ───────────────────────────────────────────────────────────

/// Validates a raw table's column header against [`EXPECTED_HEADER`].
pub struct SchemaValidator;

impl SchemaValidator {
    /// Returns `true` iff `header` equals the expected schema, in exact
    /// order. No partial or reordered match is accepted.
    pub fn validate<S: AsRef<str>>(header: &[S]) -> bool {
        header.len() == EXPECTED_HEADER.len()
            && header
                .iter()
                .zip(EXPECTED_HEADER.iter())
                .all(|(actual, expected)| actual.as_ref() == *expected)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_exact_header() {
        assert!(SchemaValidator::validate(&EXPECTED_HEADER));
    }

    #[test]
    fn test_validate_owned_strings() {
        let header: Vec<String> = EXPECTED_HEADER.iter().map(|s| s.to_string()).collect();
        assert!(SchemaValidator::validate(&header));
    }

    #[test]
    fn test_validate_rejects_reordered_columns() {
        let header = [
            "Start Time",
            "Date",
            "End Time",
            "Journey/Action",
            "Charge",
            "Credit",
            "Balance",
            "Note",
        ];
        assert!(!SchemaValidator::validate(&header));
    }

    #[test]
    fn test_validate_rejects_partial_header() {
        let header = ["Date", "Start Time", "End Time"];
        assert!(!SchemaValidator::validate(&header));
    }

    #[test]
    fn test_validate_rejects_extra_column() {
        let mut header: Vec<&str> = EXPECTED_HEADER.to_vec();
        header.push("Zone");
        assert!(!SchemaValidator::validate(&header));
    }

    #[test]
    fn test_validate_rejects_case_mismatch() {
        let header = [
            "date",
            "Start Time",
            "End Time",
            "Journey/Action",
            "Charge",
            "Credit",
            "Balance",
            "Note",
        ];
        assert!(!SchemaValidator::validate(&header));
    }

    #[test]
    fn test_validate_empty_header() {
        let header: [&str; 0] = [];
        assert!(!SchemaValidator::validate(&header));
    }
}
