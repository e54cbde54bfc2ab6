//! App layer - session state and the interaction state machine
//!
//! `AppState::update` maps a UI event to a state change plus an optional
//! effect; the actor executes effects and feeds results back.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::{AppState, EditTarget, Focus, Mode, RegionStyle};
pub use actor::AppActor;
