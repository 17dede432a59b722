//! Main panel rendering
//!
//! This module contains rendering functions for the two main panels:
//! - Table of contents (left side) - flat or grouped endpoint list
//! - Content panel (right side) - scrollable reference document

use super::components::{
    render_empty_message, render_error_message, render_loading_spinner, render_no_search_results,
};
use super::styling;
use crate::content::ContentDocument;
use crate::state::AppState;
use crate::types::{LoadingState, PanelFocus, RenderItem, ViewMode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use styling::get_method_color;

/// Render the left panel with the endpoint list (flat or grouped)
pub fn render_toc_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
    list_state: &mut ListState,
) {
    match &state.data.loading_state {
        LoadingState::Fetching | LoadingState::Parsing => {
            render_loading_spinner(frame, area, &state.data.loading_state, spinner_index);
        }
        LoadingState::Error(error) => {
            render_error_message(frame, area, error, state.data.retry_count);
        }
        LoadingState::Complete | LoadingState::Idle => {
            if state.active_endpoints().is_empty() {
                if !state.search.query.is_empty() {
                    // Searching but no results
                    render_no_search_results(frame, area);
                } else {
                    // No endpoints loaded
                    render_empty_message(frame, area);
                }
            } else {
                match &state.ui.view_mode {
                    ViewMode::Flat => {
                        render_flat_list(frame, area, state, list_state);
                    }
                    ViewMode::Grouped => {
                        render_grouped_list(frame, area, state, list_state);
                    }
                }
            }
        }
    }
}

/// Render the right panel with the reference document.
///
/// Also records the viewport geometry on the state so scrolling stays
/// clamped and the viewport tracker sees the same band the user does.
pub fn render_content_panel(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    document: &ContentDocument,
) {
    // Border reflects focus, with a brief green flash after a yank
    let border_color = if state.ui.yank_flash {
        Color::Green
    } else if state.ui.panel_focus == PanelFocus::Content {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let title = if state.ui.yank_flash {
        "[2] Reference ✓ copied"
    } else {
        "[2] Reference"
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Publish geometry for the tracker and clamp the scroll offset
    state.ui.content_height = inner_area.height;
    state.content_layout = document.layout.clone();

    let max_scroll = document.layout.max_scroll(inner_area.height);
    if state.ui.content_scroll > max_scroll {
        state.ui.content_scroll = max_scroll;
    }

    match &state.data.loading_state {
        LoadingState::Fetching | LoadingState::Parsing => {
            let loading =
                Paragraph::new("Loading reference...").style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, inner_area);
            return;
        }
        LoadingState::Error(e) => {
            let error = Paragraph::new(format!("Error loading reference:\n\n{e}"))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(error, inner_area);
            return;
        }
        _ => {}
    }

    if document.lines.is_empty() {
        let empty = Paragraph::new("No document loaded").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner_area);
        return;
    }

    // content_scroll is clamped to max_scroll above, which caps at u16::MAX
    let paragraph = Paragraph::new(document.lines.clone())
        .scroll((state.ui.content_scroll as u16, 0));
    frame.render_widget(paragraph, inner_area);
}

// ============================================================================
// Private Helper Functions
// ============================================================================

/// Render flat endpoint list
fn render_flat_list(frame: &mut Frame, area: Rect, state: &AppState, list_state: &mut ListState) {
    let items: Vec<ListItem> = state
        .active_endpoints()
        .iter()
        .map(|endpoint| {
            let method_color = get_method_color(&endpoint.method);

            let line = Line::from(vec![
                Span::styled(
                    format!("{:7}", endpoint.method),
                    Style::default()
                        .fg(method_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(endpoint.summary.clone()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let border_color = if state.ui.panel_focus == PanelFocus::Toc {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("[1] Contents ({})", state.active_endpoints().len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render grouped endpoint list (with expandable sections)
fn render_grouped_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    list_state: &mut ListState,
) {
    let mut items = Vec::new();
    let render_items = state.get_render_items();

    for item in &render_items {
        match item {
            RenderItem::SectionHeader {
                name,
                count,
                expanded,
            } => {
                let icon = if *expanded { "▼" } else { "▶" };
                let line = Line::from(vec![Span::styled(
                    format!("{icon} {name} ({count})"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )]);
                items.push(ListItem::new(line));
            }
            RenderItem::Endpoint { endpoint } => {
                let method_color = get_method_color(&endpoint.method);

                let line = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:7}", endpoint.method),
                        Style::default()
                            .fg(method_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(endpoint.summary.clone()),
                ]);

                items.push(ListItem::new(line));
            }
        }
    }

    let border_color = if state.ui.panel_focus == PanelFocus::Toc {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(
                    "[1] Contents - {} sections",
                    state.active_grouped().len()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}
