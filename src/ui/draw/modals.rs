//! Modal dialog rendering
//!
//! This module contains rendering functions for modal dialogs:
//! - Source configuration modal (document source + API base URL)

use crate::state::AppState;
use crate::types::SourceInputField;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the source configuration modal (document source + API base URL)
pub fn render_source_input_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.7).min(90.0) as u16;
    let modal_height = 12;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x: modal_x,
        y: modal_y,
        width: modal_width,
        height: modal_height,
    };

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Configure Reference Source ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Source label
            Constraint::Length(1), // Source input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Base URL label
            Constraint::Length(1), // Base URL input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    // Description
    let desc = Paragraph::new("Source: URL or file path of the reference document  |  Base URL: shown in generated requests\nUse Tab to switch fields, Ctrl+L to clear")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    // Determine active field styles
    let source_active = state.input.active_source_field == SourceInputField::Source;
    let base_active = state.input.active_source_field == SourceInputField::BaseUrl;

    // Source label (with indicator if active)
    let source_label_text = if source_active {
        "► Source:"
    } else {
        "  Source:"
    };
    let source_label =
        Paragraph::new(source_label_text).style(Style::default().fg(if source_active {
            Color::Yellow
        } else {
            Color::LightCyan
        }));
    frame.render_widget(source_label, chunks[1]);

    // Source input (highlighted if active)
    let source_input = Paragraph::new(state.input.source_input.clone()).style(
        Style::default()
            .fg(if source_active {
                Color::Yellow
            } else {
                Color::Gray
            })
            .add_modifier(if source_active {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
    );
    frame.render_widget(source_input, chunks[2]);

    // Base URL label (with indicator if active)
    let base_label_text = if base_active {
        "► API Base URL:"
    } else {
        "  API Base URL:"
    };
    let base_label = Paragraph::new(base_label_text).style(Style::default().fg(if base_active {
        Color::Yellow
    } else {
        Color::LightCyan
    }));
    frame.render_widget(base_label, chunks[4]);

    // Base URL input (highlighted if active)
    let base_input = Paragraph::new(state.input.base_url_input.clone()).style(
        Style::default()
            .fg(if base_active {
                Color::Yellow
            } else {
                Color::Gray
            })
            .add_modifier(if base_active {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
    );
    frame.render_widget(base_input, chunks[5]);

    // Help text
    let help = Paragraph::new(
        "Tab: Switch fields  |  Ctrl+L: Clear field  |  Enter: Confirm  |  Esc: Cancel",
    )
    .style(Style::default().fg(Color::Rgb(150, 150, 150)))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);
}
