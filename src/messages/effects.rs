//! Effects - side effects requested by a state transition
//!
//! Transitions never perform I/O themselves. The actor executes the returned
//! effect and feeds any result back into the state.

use crate::models::ApiRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Terminate the event loop
    Quit,
    /// Send the request and block the loop until it completes
    Invoke(ApiRequest),
}
