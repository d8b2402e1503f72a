//! Record resolver
//!
//! Decodes an identifier by fixed character positions:
//!
//! | chars   | field        |
//! |---------|--------------|
//! | 0..4    | year         |
//! | 4..6    | branch code  |
//! | 8..12   | uid          |
//! | last    | campus code  |
//!
//! Nothing is validated. Positions past the end of the string produce
//! shorter or empty fields and unknown codes decode to `"unknown"`.

use serde::Serialize;

use super::tables::{BRANCHES, CAMPUSES, UNKNOWN, YEARS};
use super::LookupError;

/// Email domain suffix appended after the campus name
pub const EMAIL_DOMAIN: &str = "bits-pilani.ac.in";

/// Decoded view of one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: String,
    /// Year selector code (key of `YEARS`), not the 4-digit year
    pub year: String,
    pub branch: String,
    pub campus: String,
    pub uid: String,
    pub email: String,
}

impl Record {
    /// Decode `id` without checking that it exists anywhere
    pub fn decode(id: &str) -> Self {
        let year = char_slice(id, 0, 4);
        let branch_code = char_slice(id, 4, 6);
        let uid = char_slice(id, 8, 12);
        let campus_code = id.chars().last().map(String::from).unwrap_or_default();

        let campus = CAMPUSES.get(&campus_code).unwrap_or(UNKNOWN);

        Self {
            id: id.to_string(),
            year: YEARS.code_for(year).unwrap_or(UNKNOWN).to_string(),
            branch: BRANCHES.get(branch_code).unwrap_or(UNKNOWN).to_string(),
            campus: campus.to_string(),
            uid: uid.to_string(),
            email: format!("f{year}{uid}@{campus}.{EMAIL_DOMAIN}"),
        }
    }
}

/// Resolve `id` against `ids`, failing when it is not listed
pub fn resolve_record(id: &str, ids: &[String]) -> Result<Record, LookupError> {
    if ids.iter().any(|candidate| candidate == id) {
        Ok(Record::decode(id))
    } else {
        Err(LookupError::IdNotFound(id.to_string()))
    }
}

/// Character-indexed substring `[start, end)`, clamped to the string length
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    let from = byte_at(start);
    let to = byte_at(end).max(from);
    &s[from..to]
}
