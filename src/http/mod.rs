//! HTTP protocol layer module
//!
//! Response-building helpers decoupled from endpoint logic.

pub mod response;

// Re-export commonly used builders
pub use response::{apply_cors, build_html_response, build_preflight_response, json_response};
