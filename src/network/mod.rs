//! Network layer - HTTP invocation and response formatting

pub mod client;
pub mod format;

pub use client::{HttpInvoker, Invocation, Invoker};
