//! Error types for request construction and transport

use thiserror::Error;

/// Failure while turning resolved values into a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("missing required parameter: {0}")]
    MissingRequiredParam(String),
}

/// Network-level failure; no status code was received
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("error reading body: {0}")]
    Body(String),
    #[error("request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Status code reported alongside a transport failure
    pub const STATUS: u16 = 0;
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            TransportError::Body(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}
