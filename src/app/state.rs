//! App state - pure data structure with no I/O logic

use ratatui::layout::Rect;

use crate::config::Config;
use crate::constants::RESPONSE_PLACEHOLDER;
use crate::models::{Catalog, InputValues};

/// Editable fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    QueryParams,
    BaseUrl,
    Headers,
}

/// Interaction mode. The edit buffer lives inside `Editing`, so it cannot
/// exist outside an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Editing { target: EditTarget, buffer: String },
    Help,
}

/// Which list receives up/down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    EndpointList,
    ResponseView,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::EndpointList => Focus::ResponseView,
            Focus::ResponseView => Focus::EndpointList,
        }
    }
}

/// Outcome coloring of the response region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Neutral,
    Success,
    Failure,
}

/// Style tag per display region; the UI maps tags to colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionStyle {
    Focused,
    Idle,
    Editing,
    Success,
    Failure,
}

/// Response region content
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseView {
    pub lines: Vec<String>,
    /// `None` until the first invocation; 0 for transport/build failures
    pub status: Option<u16>,
    pub emphasis: Emphasis,
}

impl Default for ResponseView {
    fn default() -> Self {
        ResponseView {
            lines: vec![RESPONSE_PLACEHOLDER.to_string()],
            status: None,
            emphasis: Emphasis::Neutral,
        }
    }
}

/// Region geometry, recomputed on every resize
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub endpoints: Rect,
    pub response: Rect,
    pub base_url: Rect,
    pub headers: Rect,
    pub query: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    /// Endpoint list on the top half, response below it, then three
    /// three-row fields at the bottom. Help is a centered half-size box.
    pub fn compute(width: u16, height: u16) -> Self {
        let half = height / 2;
        let fields_top = height.saturating_sub(9);
        let row = |top: u16, bottom: u16| Rect::new(0, top, width, bottom.saturating_sub(top));

        ScreenLayout {
            endpoints: row(0, half),
            response: row(half, fields_top),
            base_url: row(fields_top, height.saturating_sub(6)),
            headers: row(height.saturating_sub(6), height.saturating_sub(3)),
            query: row(height.saturating_sub(3), height),
            help: Rect::new(width / 4, height / 4, width / 2, height / 2),
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,

    // Committed field values
    pub query_input: String,
    pub header_input: String,
    pub base_url: String,
    pub global_params: InputValues,

    // Cursors
    pub selected_endpoint: usize,
    pub selected_line: usize,
    pub endpoint_count: usize,

    pub response: ResponseView,
    pub layout: ScreenLayout,
}

impl AppState {
    pub fn new(config: &Config, catalog: &Catalog) -> Self {
        AppState {
            mode: Mode::Browsing,
            focus: Focus::EndpointList,
            query_input: String::new(),
            header_input: String::new(),
            base_url: config.base_url.clone(),
            global_params: config.global_params.clone(),
            selected_endpoint: 0,
            selected_line: 0,
            endpoint_count: catalog.len(),
            response: ResponseView::default(),
            layout: ScreenLayout::default(),
        }
    }

    pub fn committed(&self, target: EditTarget) -> &str {
        match target {
            EditTarget::QueryParams => &self.query_input,
            EditTarget::BaseUrl => &self.base_url,
            EditTarget::Headers => &self.header_input,
        }
    }

    /// Text shown for a field: the live buffer while it is being edited
    pub fn display_text(&self, target: EditTarget) -> &str {
        match &self.mode {
            Mode::Editing { target: t, buffer } if *t == target => buffer,
            _ => self.committed(target),
        }
    }

    pub fn editing(&self) -> Option<EditTarget> {
        match &self.mode {
            Mode::Editing { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub fn show_help(&self) -> bool {
        self.mode == Mode::Help
    }

    pub fn endpoint_list_style(&self) -> RegionStyle {
        match self.focus {
            Focus::EndpointList => RegionStyle::Focused,
            Focus::ResponseView => RegionStyle::Idle,
        }
    }

    pub fn response_style(&self) -> RegionStyle {
        match (self.response.emphasis, self.focus) {
            (Emphasis::Success, _) => RegionStyle::Success,
            (Emphasis::Failure, _) => RegionStyle::Failure,
            (Emphasis::Neutral, Focus::ResponseView) => RegionStyle::Focused,
            (Emphasis::Neutral, Focus::EndpointList) => RegionStyle::Idle,
        }
    }

    pub fn field_style(&self, target: EditTarget) -> RegionStyle {
        if self.editing() == Some(target) {
            RegionStyle::Editing
        } else {
            RegionStyle::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_regions() {
        let layout = ScreenLayout::compute(100, 40);
        assert_eq!(layout.endpoints, Rect::new(0, 0, 100, 20));
        assert_eq!(layout.response, Rect::new(0, 20, 100, 11));
        assert_eq!(layout.base_url, Rect::new(0, 31, 100, 3));
        assert_eq!(layout.headers, Rect::new(0, 34, 100, 3));
        assert_eq!(layout.query, Rect::new(0, 37, 100, 3));
        assert_eq!(layout.help, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_layout_tiny_terminal_does_not_underflow() {
        let layout = ScreenLayout::compute(10, 4);
        assert_eq!(layout.response.height, 0);
        assert_eq!(layout.base_url.height, 0);
        assert_eq!(layout.query, Rect::new(0, 1, 10, 3));
    }

    #[test]
    fn test_display_text_mirrors_buffer_only_for_target() {
        let mut state = AppState::new(&Config::default(), &Catalog::default());
        state.header_input = "X-A:1".to_string();
        state.mode = Mode::Editing {
            target: EditTarget::QueryParams,
            buffer: "id=".to_string(),
        };

        assert_eq!(state.display_text(EditTarget::QueryParams), "id=");
        assert_eq!(state.display_text(EditTarget::Headers), "X-A:1");
        assert_eq!(state.display_text(EditTarget::BaseUrl), "http://localhost:8080");
        assert_eq!(state.field_style(EditTarget::QueryParams), RegionStyle::Editing);
        assert_eq!(state.field_style(EditTarget::Headers), RegionStyle::Idle);
    }
}
