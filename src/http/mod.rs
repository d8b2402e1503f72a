//! HTTP protocol layer module
//!
//! Response builders, decoupled from the roster lookup logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_json_response, build_not_found_response,
    build_text_response,
};
