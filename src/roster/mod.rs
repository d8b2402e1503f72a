//! Roster domain module
//!
//! Everything that knows what an identifier means:
//! - Static code tables (branch, campus, year selector)
//! - Reading the identifier list from disk
//! - Branch/year filtering
//! - Decoding one identifier into a `Record`

mod error;
pub mod filter;
pub mod record;
pub mod source;
pub mod tables;

pub use error::LookupError;
pub use filter::{filter_identifiers, IdentifierQuery};
pub use record::{resolve_record, Record};
pub use source::read_identifiers;
