//! Request handler module
//!
//! Routes `/data` to the roster lookup and answers everything else with 404.

pub mod data;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
