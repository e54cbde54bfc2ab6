//! Command handlers - state transitions for UI events
//!
//! `update` is the whole state machine: it mutates the state for one event
//! and returns the side effect (if any) the actor must carry out. Help takes
//! precedence over editing, editing over browsing. Resize is handled the same
//! way in every mode.

use crate::app::state::{AppState, EditTarget, Emphasis, Focus, Mode, ResponseView, ScreenLayout};
use crate::error::TransportError;
use crate::messages::{Effect, UiEvent};
use crate::models::Catalog;
use crate::network::client::Invocation;
use crate::network::format::format_lines;
use crate::request::{build_request, parse_headers, resolve_params};

/// Key bindings available while browsing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BrowseAction {
    Quit,
    ToggleFocus,
    Up,
    Down,
    Invoke,
    Edit(EditTarget),
    ToggleHelp,
}

fn browse_action(event: UiEvent) -> Option<BrowseAction> {
    match event {
        UiEvent::Char('q') | UiEvent::Interrupt => Some(BrowseAction::Quit),
        UiEvent::Tab | UiEvent::Char('r') => Some(BrowseAction::ToggleFocus),
        UiEvent::Up | UiEvent::Char('k') => Some(BrowseAction::Up),
        UiEvent::Down | UiEvent::Char('j') => Some(BrowseAction::Down),
        UiEvent::Enter => Some(BrowseAction::Invoke),
        UiEvent::Char('i') => Some(BrowseAction::Edit(EditTarget::QueryParams)),
        UiEvent::Char('b') => Some(BrowseAction::Edit(EditTarget::BaseUrl)),
        UiEvent::Char('H') => Some(BrowseAction::Edit(EditTarget::Headers)),
        UiEvent::Char('?') | UiEvent::Char('h') => Some(BrowseAction::ToggleHelp),
        _ => None,
    }
}

impl AppState {
    /// Apply one event and return the effect it requests
    pub fn update(&mut self, catalog: &Catalog, event: UiEvent) -> Option<Effect> {
        if let UiEvent::Resize(width, height) = event {
            self.resize(width, height);
            return None;
        }

        match self.mode {
            Mode::Help => {
                self.handle_help(event);
                None
            }
            Mode::Editing { .. } => self.handle_editing(event),
            Mode::Browsing => self.handle_browsing(catalog, event),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = ScreenLayout::compute(width, height);
    }

    // ========================
    // Help overlay
    // ========================

    fn handle_help(&mut self, event: UiEvent) {
        if matches!(event, UiEvent::Char('?') | UiEvent::Char('h') | UiEvent::Esc) {
            self.mode = Mode::Browsing;
        }
    }

    // ========================
    // Field editing
    // ========================

    fn handle_editing(&mut self, event: UiEvent) -> Option<Effect> {
        match event {
            UiEvent::Interrupt => return Some(Effect::Quit),
            UiEvent::Enter => self.commit_edit(),
            UiEvent::Backspace => {
                if let Mode::Editing { buffer, .. } = &mut self.mode {
                    buffer.pop();
                }
            }
            UiEvent::Char(c) => {
                if let Mode::Editing { buffer, .. } = &mut self.mode {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        None
    }

    pub fn start_editing(&mut self, target: EditTarget) {
        self.mode = Mode::Editing {
            target,
            buffer: self.committed(target).to_string(),
        };
        self.response.emphasis = Emphasis::Neutral;
    }

    /// Write the buffer into its field and return to browsing in one step.
    /// Query text is kept raw; base URL and headers are trimmed, and an empty
    /// base URL keeps the previous one.
    fn commit_edit(&mut self) {
        let Mode::Editing { target, buffer } = std::mem::replace(&mut self.mode, Mode::Browsing) else {
            return;
        };

        match target {
            EditTarget::QueryParams => self.query_input = buffer,
            EditTarget::BaseUrl => {
                let trimmed = buffer.trim();
                if !trimmed.is_empty() {
                    self.base_url = trimmed.to_string();
                }
            }
            EditTarget::Headers => self.header_input = buffer.trim().to_string(),
        }
        tracing::debug!(?target, "Committed edit");
    }

    // ========================
    // Browsing
    // ========================

    fn handle_browsing(&mut self, catalog: &Catalog, event: UiEvent) -> Option<Effect> {
        match browse_action(event)? {
            BrowseAction::Quit => return Some(Effect::Quit),
            BrowseAction::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.response.emphasis = Emphasis::Neutral;
            }
            BrowseAction::Up => self.move_selection_up(),
            BrowseAction::Down => self.move_selection_down(),
            BrowseAction::Invoke => return self.invoke(catalog),
            BrowseAction::Edit(target) => self.start_editing(target),
            BrowseAction::ToggleHelp => self.mode = Mode::Help,
        }
        None
    }

    fn move_selection_up(&mut self) {
        match self.focus {
            Focus::EndpointList => {
                self.selected_endpoint = self.selected_endpoint.saturating_sub(1);
            }
            Focus::ResponseView => {
                self.selected_line = self.selected_line.saturating_sub(1);
            }
        }
    }

    fn move_selection_down(&mut self) {
        match self.focus {
            Focus::EndpointList => {
                if self.selected_endpoint + 1 < self.endpoint_count {
                    self.selected_endpoint += 1;
                }
            }
            Focus::ResponseView => {
                if self.selected_line + 1 < self.response.lines.len() {
                    self.selected_line += 1;
                }
            }
        }
    }

    // ========================
    // Invocation
    // ========================

    /// Resolve and build a request for the selected endpoint.
    ///
    /// A build failure is shown right away and no request is emitted. Either
    /// way the committed query text and response cursor are reset.
    fn invoke(&mut self, catalog: &Catalog) -> Option<Effect> {
        if self.focus == Focus::ResponseView {
            return None;
        }

        let effect = match catalog.get(self.selected_endpoint) {
            None => {
                self.show_failure("No endpoints loaded");
                None
            }
            Some(endpoint) => {
                let values = resolve_params(endpoint, &self.query_input, &self.global_params);
                let headers = parse_headers(&self.header_input);

                match build_request(&self.base_url, endpoint, &values, &headers) {
                    Ok(request) => Some(Effect::Invoke(request)),
                    Err(e) => {
                        tracing::warn!(
                            method = %endpoint.method,
                            path = %endpoint.path,
                            "Request not sent: {}",
                            e
                        );
                        self.show_failure(&e.to_string());
                        None
                    }
                }
            }
        };

        self.query_input.clear();
        self.selected_line = 0;
        effect
    }

    /// Display the result of an invocation emitted by `update`
    pub fn complete_invocation(&mut self, outcome: Invocation) {
        match outcome {
            Ok(reply) => {
                let mut lines = vec![format!("Status: {}", reply.status), String::new()];
                lines.extend(format_lines(&reply.body));

                self.response = ResponseView {
                    lines,
                    status: Some(reply.status),
                    emphasis: if reply.status >= 400 {
                        Emphasis::Failure
                    } else {
                        Emphasis::Success
                    },
                };
            }
            Err(e) => self.show_failure(&e.to_string()),
        }
        self.selected_line = 0;
    }

    fn show_failure(&mut self, message: &str) {
        self.response = ResponseView {
            lines: vec![
                format!("Error: {}", message),
                format!("Status: {}", TransportError::STATUS),
            ],
            status: Some(TransportError::STATUS),
            emphasis: Emphasis::Failure,
        };
    }
}
