// Roster error types
// Every variant is surfaced to clients as a 404

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Lookup failure for the `/data` endpoint
#[derive(Error, Debug)]
pub enum LookupError {
    /// The identifier file could not be read
    #[error("File Not Found")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested identifier is not in the (filtered) list
    #[error("ID Not Found")]
    IdNotFound(String),
}

impl LookupError {
    /// Reason phrase sent back to the client
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "File Not Found",
            Self::IdNotFound(_) => "ID Not Found",
        }
    }
}
