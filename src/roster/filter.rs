//! Query filter
//!
//! Narrows an identifier list by branch name and/or year selector. Values
//! that are not in the corresponding table are ignored rather than rejected.

use super::tables::{BRANCHES, YEARS};

/// Optional filters taken from the query string
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdentifierQuery {
    /// Branch name, matched case-insensitively against `BRANCHES` values
    pub branch: Option<String>,
    /// Year selector, a key of `YEARS`
    pub year: Option<String>,
}

impl IdentifierQuery {
    /// Branch code for the requested branch name, if it names a known branch
    pub fn branch_code(&self) -> Option<&'static str> {
        let name = self.branch.as_deref()?.to_lowercase();
        BRANCHES.code_for(&name)
    }

    /// Admission year for the requested selector, if it is a known selector
    pub fn year_prefix(&self) -> Option<&'static str> {
        YEARS.get(self.year.as_deref()?)
    }
}

/// Apply `query` to `ids`, keeping the original order.
///
/// The branch filter matches the code anywhere in the identifier, not only
/// at the branch position (chars 4..6).
pub fn filter_identifiers(ids: Vec<String>, query: &IdentifierQuery) -> Vec<String> {
    let branch_code = query.branch_code();
    let year_prefix = query.year_prefix();

    ids.into_iter()
        .filter(|id| branch_code.map_or(true, |code| id.contains(code)))
        .filter(|id| year_prefix.map_or(true, |year| id.starts_with(year)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<String> {
        [
            "2021A7PS0001P",
            "2022AAPS0456G",
            "2021A3PS0100H",
            "2020B4A70789H",
            "2023A1PS0042P",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    fn query(branch: Option<&str>, year: Option<&str>) -> IdentifierQuery {
        IdentifierQuery {
            branch: branch.map(ToString::to_string),
            year: year.map(ToString::to_string),
        }
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        assert_eq!(filter_identifiers(fixture(), &query(None, None)), fixture());
    }

    #[test]
    fn test_branch_filter_case_insensitive() {
        let ids = filter_identifiers(fixture(), &query(Some("CS"), None));
        assert_eq!(ids, vec!["2021A7PS0001P", "2020B4A70789H"]);
        for id in &ids {
            assert!(id.contains("A7"));
        }
    }

    #[test]
    fn test_branch_filter_matches_code_anywhere() {
        // "2020B4A70789H" has branch B4 (math) but contains "A7" at chars 6..8
        let ids = filter_identifiers(fixture(), &query(Some("cs"), None));
        assert!(ids.contains(&"2020B4A70789H".to_string()));
    }

    #[test]
    fn test_invalid_branch_is_ignored() {
        let ids = filter_identifiers(fixture(), &query(Some("astronomy"), None));
        assert_eq!(ids, fixture());
    }

    #[test]
    fn test_year_filter() {
        let ids = filter_identifiers(fixture(), &query(None, Some("4")));
        assert_eq!(ids, vec!["2021A7PS0001P", "2021A3PS0100H"]);
        for id in &ids {
            assert_eq!(&id[..4], "2021");
        }
    }

    #[test]
    fn test_invalid_year_is_ignored() {
        assert_eq!(filter_identifiers(fixture(), &query(None, Some("9"))), fixture());
        assert_eq!(filter_identifiers(fixture(), &query(None, Some("2021"))), fixture());
    }

    #[test]
    fn test_filters_compose() {
        let ids = filter_identifiers(fixture(), &query(Some("eee"), Some("4")));
        assert_eq!(ids, vec!["2021A3PS0100H"]);

        let ids = filter_identifiers(fixture(), &query(Some("ece"), Some("4")));
        assert!(ids.is_empty());
    }

    #[test]
    fn test_query_helpers() {
        assert_eq!(query(Some("Mechanical"), None).branch_code(), Some("A4"));
        assert_eq!(query(Some("unknown"), None).branch_code(), None);
        assert_eq!(query(None, Some("1")).year_prefix(), Some("2024"));
        assert_eq!(query(None, None).year_prefix(), None);
    }
}
