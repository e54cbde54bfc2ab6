use ratatui::{prelude::*, widgets::*};

use crate::app::{AppState, EditTarget, RegionStyle};
use crate::constants::HELP_TEXT;
use crate::models::Catalog;

/// Draw the whole screen from the current state
pub fn draw_ui(f: &mut Frame, state: &AppState, catalog: &Catalog) {
    let area = f.area();
    let layout = &state.layout;

    if state.show_help() {
        draw_help_popup(f, layout.help.intersection(area));
        return;
    }

    draw_endpoint_list(f, state, catalog, layout.endpoints.intersection(area));
    draw_response(f, state, layout.response.intersection(area));
    draw_field(
        f,
        state,
        EditTarget::BaseUrl,
        " Base URL (press 'b' to edit) ".to_string(),
        Color::Magenta,
        layout.base_url.intersection(area),
    );
    draw_field(
        f,
        state,
        EditTarget::Headers,
        " Headers (key:value&key2:value2) - Press 'H' to edit ".to_string(),
        Color::Blue,
        layout.headers.intersection(area),
    );
    draw_field(
        f,
        state,
        EditTarget::QueryParams,
        query_title(state, catalog),
        Color::Cyan,
        layout.query.intersection(area),
    );
}

/// Title of the query-parameter field, listing the selected endpoint's
/// required parameters
pub fn query_title(state: &AppState, catalog: &Catalog) -> String {
    let required = catalog
        .get(state.selected_endpoint)
        .map(|ep| ep.required_summary())
        .unwrap_or_default();

    if required.is_empty() {
        " Query Parameters (param=value) - Press 'i' to edit ".to_string()
    } else {
        format!(
            " Query Parameters (Required: {}) - Press 'i' to edit ",
            required.join(", ")
        )
    }
}

fn draw_endpoint_list(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let color = region_color(state.endpoint_list_style(), Color::White);

    let items: Vec<ListItem> = catalog
        .iter()
        .map(|ep| {
            let method_span = Span::styled(
                format!("{:6}", ep.method),
                Style::default().fg(method_color(&ep.method)).bold(),
            );
            let row = ep.display_row();
            let rest = row.split_once(' ').map(|(_, r)| r).unwrap_or("");
            ListItem::new(Line::from(vec![method_span, Span::raw(format!(" {}", rest))]))
        })
        .collect();

    let title = if catalog.is_empty() {
        " API Endpoints (none loaded - see api-term.log) "
    } else {
        " API Endpoints (j/k to scroll, ENTER to invoke) "
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title)
                .title_style(Style::default().fg(color)),
        )
        .style(Style::default().fg(Color::Yellow))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    if !catalog.is_empty() {
        list_state.select(Some(state.selected_endpoint));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_response(f: &mut Frame, state: &AppState, area: Rect) {
    let color = region_color(state.response_style(), Color::White);

    let items: Vec<ListItem> = state
        .response
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = match (i, state.response.status) {
                (0, Some(code)) if line.starts_with("Status:") => {
                    Style::default().fg(status_color(code)).bold()
                }
                (_, Some(0)) if line.starts_with("Error:") => Style::default().fg(Color::Red),
                _ => Style::default().fg(Color::White),
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(" Response (Tab/r to focus, j/k to scroll) ")
                .title_style(Style::default().fg(color)),
        )
        .highlight_style(Style::default().fg(Color::White).bg(Color::Black).bold());

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_line));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_field(
    f: &mut Frame,
    state: &AppState,
    target: EditTarget,
    title: String,
    idle: Color,
    area: Rect,
) {
    let color = region_color(state.field_style(target), idle);
    let text = state.display_text(target);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);
    f.render_widget(Paragraph::new(text).block(block), area);

    if state.editing() == Some(target) {
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = area.x.saturating_add(typed).saturating_add(1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(HELP_TEXT)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Map a style tag to a color; `idle` is the region's resting color
pub fn region_color(style: RegionStyle, idle: Color) -> Color {
    match style {
        RegionStyle::Focused | RegionStyle::Editing => Color::Yellow,
        RegionStyle::Success => Color::Green,
        RegionStyle::Failure => Color::Red,
        RegionStyle::Idle => idle,
    }
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=599 => Color::Red,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}
