//! Message types flowing between the terminal, the state machine and the
//! network layer.

pub mod effects;
pub mod ui_events;

pub use effects::Effect;
pub use ui_events::UiEvent;
