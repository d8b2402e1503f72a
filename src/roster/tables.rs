//! Static code tables
//!
//! Each table is an ordered list of `(code, value)` pairs fixed at build time.
//! Forward lookup goes code → value; reverse lookup goes value → code and
//! returns the first code carrying that value.

/// Immutable code → value table
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Value stored under `code`
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, v)| *v)
    }

    /// First code whose value equals `value`
    pub fn code_for(&self, value: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(c, _)| *c)
    }
}

/// Branch code → lowercase branch name
pub static BRANCHES: CodeTable = CodeTable::new(&[
    ("A1", "chemical"),
    ("A2", "civil"),
    ("A3", "eee"),
    ("A4", "mechanical"),
    ("A5", "bpharm"),
    ("A6", "???"),
    ("A7", "cs"),
    ("A8", "eni"),
    ("AA", "ece"),
    ("AB", "manu"),
    ("B1", "bio"),
    ("B2", "chem"),
    ("B3", "eco"),
    ("B4", "math"),
    ("B5", "phy"),
]);

/// Campus code → campus name
pub static CAMPUSES: CodeTable = CodeTable::new(&[
    ("P", "pilani"),
    ("G", "goa"),
    ("H", "hyderabad"),
]);

/// Year selector → 4-digit admission year
pub static YEARS: CodeTable = CodeTable::new(&[
    ("1", "2024"),
    ("2", "2023"),
    ("3", "2022"),
    ("4", "2021"),
    ("5", "2020"),
]);

/// Placeholder for codes missing from a table
pub const UNKNOWN: &str = "unknown";
