//! App actor - drives the state machine and carries out its effects

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{Effect, UiEvent};
use crate::models::Catalog;
use crate::network::client::Invoker;

/// Owns the session state, the endpoint catalog and the invoker.
///
/// Invocation is awaited in-line: while a request is in flight the caller's
/// event loop is parked in `handle_event`, so at most one request exists at
/// a time.
pub struct AppActor<I> {
    state: AppState,
    catalog: Catalog,
    invoker: I,
}

impl<I: Invoker> AppActor<I> {
    pub fn new(config: &Config, catalog: Catalog, invoker: I) -> Self {
        AppActor {
            state: AppState::new(config, &catalog),
            catalog,
            invoker,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handle a UI event, returns true if quit was requested
    pub async fn handle_event(&mut self, event: UiEvent) -> bool {
        match self.state.update(&self.catalog, event) {
            Some(Effect::Quit) => {
                tracing::info!("Quit requested");
                true
            }
            Some(Effect::Invoke(request)) => {
                tracing::debug!(url = %request.url, "Invoking endpoint");
                let outcome = self.invoker.invoke(&request).await;
                self.state.complete_invocation(outcome);
                false
            }
            None => false,
        }
    }
}
