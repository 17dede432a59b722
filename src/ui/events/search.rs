//! Search filter handlers
//!
//! Endpoint filtering over path, summary and section. All query edits go
//! through the search [`AppAction`]s so the filtered views are recomputed
//! in exactly one place (`apply_action`).

use super::helpers::{apply, log_debug};
use crate::actions::AppAction;
use crate::state::AppState;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Open the search bar with a fresh query
pub fn handle_search_activate(state: Arc<RwLock<AppState>>) {
    apply(state, AppAction::EnterSearchMode);
    log_debug("Search activated");
}

/// Key handling while the search bar is active.
///
/// Enter leaves search mode keeping the filter; Esc leaves and drops it.
pub fn handle_search_input(
    selected_index: &mut usize,
    key: KeyEvent,
    state: Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            apply(state, AppAction::ExitSearchMode);
            log_debug("Search closed, filter kept");
        }
        KeyCode::Esc => {
            apply(state.clone(), AppAction::ClearSearchQuery);
            apply(state, AppAction::ExitSearchMode);
            log_debug("Search cancelled");
            reset_selection(selected_index, list_state);
        }
        KeyCode::Backspace => {
            apply(state, AppAction::BackspaceSearchQuery);
            reset_selection(selected_index, list_state);
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearSearchQuery);
            reset_selection(selected_index, list_state);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToSearchQuery(c.to_string()));
            reset_selection(selected_index, list_state);
        }
        _ => {}
    }
    Ok(())
}

/// Ctrl+L from normal mode: drop the active filter
pub fn handle_search_clear(
    selected_index: &mut usize,
    state: Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    let has_query = !state.read().unwrap().search.query.is_empty();

    if has_query {
        apply(state, AppAction::ClearSearchQuery);
        log_debug("Search filter cleared");
        reset_selection(selected_index, list_state);
    }
}

/// A changed query invalidates the previous selection
fn reset_selection(selected_index: &mut usize, list_state: &mut ListState) {
    *selected_index = 0;
    list_state.select(Some(0));
}
