//! # api-term
//!
//! Browse the endpoints declared by an OpenAPI document and invoke them
//! from the terminal.
//!
//! ## Features
//! - Endpoint catalog from OpenAPI files and URLs (JSON or YAML)
//! - Query parameters as `key=value&...` or a single bare value
//! - Headers as `Key: value; Other=value`
//! - Global query parameters merged into every request
//! - Pretty-printed JSON responses
//!
//! ## Architecture
//! - UI Layer (Ratatui) - draws the state, never mutates it
//! - App Layer (State machine) - `(state, event) -> effect`
//! - Request/Network Layer - resolve, build, invoke, format

pub mod app;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod request;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::{CliArgs, Config};
pub use error::{RequestError, TransportError};
pub use messages::{Effect, UiEvent};
pub use models::{ApiRequest, Catalog, Endpoint, Parameter, ParameterLocation};
pub use network::{HttpInvoker, Invoker};
