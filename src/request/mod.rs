//! Request layer - turns operator text into a concrete request
//!
//! Resolution runs first (raw text -> key/value maps), then building
//! (maps + endpoint declaration -> URL and headers).

pub mod builder;
pub mod resolver;

pub use builder::build_request;
pub use resolver::{parse_headers, resolve_params};
