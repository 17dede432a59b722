//! Event handling system for apiref-tui
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles multiple input modes:
//! - Normal: Standard navigation and commands
//! - EnteringSource: Modal for configuring the reference document source
//! - Searching: Filtering endpoints by query
//!
//! # Architecture
//!
//! The EventHandler uses an action pattern where input events generate AppActions
//! that are applied to AppState via the apply_action function in actions.rs.
//!
//! # Lock Management
//!
//! This module frequently acquires locks on Arc<RwLock<AppState>>. Care must be
//! taken to minimize lock duration and avoid deadlocks. See handle_events for
//! the main event loop.

mod helpers;
mod modals;
mod navigation;
mod search;
mod yank;

// Re-export public items
pub use helpers::{apply, log_debug};

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{InputMode, LoadingState, PanelFocus, SourceSubmission};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
    pub selected_index: usize,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            selected_index: 0,
        }
    }

    /// Main event handling loop - dispatches to appropriate handlers based on input mode
    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<AppState>>,
        list_state: &mut ListState,
        source: Option<String>,
        base_url: Option<String>,
    ) -> Result<(bool, Option<SourceSubmission>)> {
        let mut should_fetch = false;
        let mut source_submitted = None;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let input_mode = state.read().unwrap().input.mode.clone();

                match input_mode {
                    InputMode::EnteringSource => {
                        source_submitted = modals::handle_source_input(key, state.clone())?;
                    }

                    InputMode::Searching => {
                        search::handle_search_input(
                            &mut self.selected_index,
                            key,
                            state.clone(),
                            list_state,
                        )?;
                    }

                    InputMode::Normal => match key.code {
                        // QUIT
                        KeyCode::Char('q') => {
                            self.should_quit = true;
                        }

                        // nav down
                        KeyCode::Char('j') | KeyCode::Down => {
                            let panel = state.read().unwrap().ui.panel_focus.clone();

                            if panel == PanelFocus::Toc {
                                navigation::handle_down(
                                    &mut self.selected_index,
                                    state.clone(),
                                    list_state,
                                );
                            }
                            // Content panel scrolls with Ctrl+d/u
                        }
                        // nav up
                        KeyCode::Char('k') | KeyCode::Up => {
                            let panel = state.read().unwrap().ui.panel_focus.clone();

                            if panel == PanelFocus::Toc {
                                navigation::handle_up(
                                    &mut self.selected_index,
                                    state.clone(),
                                    list_state,
                                );
                            }
                        }

                        // toggle view - list <-> grouped
                        KeyCode::Char('g') => {
                            navigation::handle_toggle_view(
                                &mut self.selected_index,
                                state.clone(),
                                list_state,
                            );
                        }

                        // configure source
                        KeyCode::Char(',') => {
                            modals::handle_source_dialog(
                                state.clone(),
                                source.clone(),
                                base_url.clone(),
                            );
                        }

                        // search endpoints
                        KeyCode::Char('/') => {
                            search::handle_search_activate(state.clone());
                        }

                        // yank cURL for the selected endpoint
                        KeyCode::Char('y') => {
                            yank::handle_yank_curl(
                                self.selected_index,
                                state.clone(),
                                base_url.as_deref().unwrap_or_default(),
                            );
                        }

                        // switch to contents panel
                        KeyCode::Char('1') => {
                            apply(state.clone(), AppAction::NavigateToPanel(PanelFocus::Toc));
                        }
                        // switch to content panel
                        KeyCode::Char('2') => {
                            apply(
                                state.clone(),
                                AppAction::NavigateToPanel(PanelFocus::Content),
                            );
                        }

                        // ctrl + modifiers
                        // retry after an error
                        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            should_fetch = handle_retry(state.clone());
                        }

                        // Ctrl+l: Clear search filter
                        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            search::handle_search_clear(
                                &mut self.selected_index,
                                state.clone(),
                                list_state,
                            );
                        }

                        // Ctrl+u: Scroll content up
                        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            let panel = state.read().unwrap().ui.panel_focus.clone();

                            if panel == PanelFocus::Content {
                                apply(state.clone(), AppAction::ScrollContentUp);
                            }
                        }
                        // Ctrl+d: Scroll content down
                        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            let panel = state.read().unwrap().ui.panel_focus.clone();

                            if panel == PanelFocus::Content {
                                apply(state.clone(), AppAction::ScrollContentDown);
                            }
                        }

                        // Special keys --
                        // tab toggles the focused panel
                        KeyCode::Tab | KeyCode::BackTab => {
                            let panel = state.read().unwrap().ui.panel_focus.clone();
                            let next = match panel {
                                PanelFocus::Toc => PanelFocus::Content,
                                PanelFocus::Content => PanelFocus::Toc,
                            };
                            apply(state.clone(), AppAction::NavigateToPanel(next));
                        }

                        // enter/space - expand section or jump to endpoint
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            let panel = state.read().unwrap().ui.panel_focus.clone();

                            if panel == PanelFocus::Toc {
                                navigation::handle_enter(self.selected_index, state.clone());
                            }
                        }

                        // F5 - refresh the document
                        KeyCode::F(5) => {
                            should_fetch = true;
                        }

                        _ => {}
                    },
                }
            }
        }
        Ok((should_fetch, source_submitted))
    }
}

/// Retry after a load error; counts attempts for the error display
fn handle_retry(state: Arc<RwLock<AppState>>) -> bool {
    let mut s = state.write().unwrap();
    if matches!(s.data.loading_state, LoadingState::Error(_)) {
        s.data.retry_count += 1;
        log_debug(&format!("Retry attempt {}", s.data.retry_count));
        true
    } else {
        false
    }
}
