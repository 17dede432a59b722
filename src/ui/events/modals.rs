//! Modal dialog handlers
//!
//! This module handles user input for modal dialogs:
//! - Source configuration (document source and API base URL)

use super::helpers::{apply, collect_paste_batch, log_debug};
use crate::actions::AppAction;
use crate::config;
use crate::state::AppState;
use crate::types::{InputMode, SourceInputField, SourceSubmission};
use color_eyre::Result;
use crossterm::event::KeyCode;
use std::sync::{Arc, RwLock};

/// Handle source dialog activation
pub fn handle_source_dialog(
    state: Arc<RwLock<AppState>>,
    source: Option<String>,
    base_url: Option<String>,
) {
    apply(state, AppAction::EnterSourceInputMode { source, base_url });
    log_debug("Entering source input mode");
}

/// Handle source input modal (with paste batching support)
pub fn handle_source_input(
    key: crossterm::event::KeyEvent,
    state: Arc<RwLock<AppState>>,
) -> Result<Option<SourceSubmission>> {
    use crossterm::event::KeyModifiers;

    match key.code {
        KeyCode::Tab => {
            // Switch between fields
            let mut s = state.write().unwrap();

            match s.input.active_source_field {
                SourceInputField::Source => {
                    s.input.active_source_field = SourceInputField::BaseUrl;
                }
                SourceInputField::BaseUrl => {
                    s.input.active_source_field = SourceInputField::Source;
                }
            }
        }

        KeyCode::Enter => {
            let mut s = state.write().unwrap();
            let source = s.input.source_input.trim().to_string();
            let base_url = s.input.base_url_input.trim().to_string();

            if !source.is_empty() {
                match config::validate_source(&source) {
                    Ok(_) => {
                        s.input.mode = InputMode::Normal;

                        let submission = SourceSubmission {
                            source: source.clone(),
                            base_url: if base_url.is_empty() {
                                None
                            } else {
                                Some(base_url.clone())
                            },
                        };

                        s.input.source_input.clear();
                        s.input.base_url_input.clear();
                        s.input.active_source_field = SourceInputField::Source;

                        log_debug(&format!(
                            "Source submitted - Source: {}, Base: {:?}",
                            submission.source, submission.base_url
                        ));

                        return Ok(Some(submission));
                    }
                    Err(e) => {
                        log_debug(&format!("Invalid source: {}", e));
                        // Keep modal open
                    }
                }
            } else {
                log_debug("Empty source, not submitting");
            }
        }

        KeyCode::Esc => {
            let mut s = state.write().unwrap();
            s.input.mode = InputMode::Normal;
            s.input.source_input.clear();
            s.input.base_url_input.clear();
            s.input.active_source_field = SourceInputField::Source;
            log_debug("Source input cancelled");
        }

        KeyCode::Backspace => {
            let mut s = state.write().unwrap();
            match s.input.active_source_field {
                SourceInputField::Source => {
                    s.input.source_input.pop();
                }
                SourceInputField::BaseUrl => {
                    s.input.base_url_input.pop();
                }
            }
        }

        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Ctrl+W: Delete word backwards
            let mut s = state.write().unwrap();
            let input = match s.input.active_source_field {
                SourceInputField::Source => &mut s.input.source_input,
                SourceInputField::BaseUrl => &mut s.input.base_url_input,
            };

            // Find last word boundary (space, slash, colon, dot)
            if let Some(pos) = input.rfind(|c: char| c == ' ' || c == '/' || c == ':' || c == '.') {
                input.truncate(pos);
            } else {
                input.clear();
            }
        }

        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Ctrl+L: Clear current field (matching search behavior)
            let mut s = state.write().unwrap();
            match s.input.active_source_field {
                SourceInputField::Source => {
                    s.input.source_input.clear();
                    log_debug("Cleared source input");
                }
                SourceInputField::BaseUrl => {
                    s.input.base_url_input.clear();
                    log_debug("Cleared base URL input");
                }
            }
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Collect this character and any pending characters (for paste support)
            let (batch, char_count) = collect_paste_batch(c);

            let mut s = state.write().unwrap();
            match s.input.active_source_field {
                SourceInputField::Source => {
                    s.input.source_input.push_str(&batch);
                }
                SourceInputField::BaseUrl => {
                    s.input.base_url_input.push_str(&batch);
                }
            }

            if char_count > 1 {
                log_debug(&format!("Batched {} characters (paste detected)", char_count));
            }
        }

        _ => {}
    }

    Ok(None)
}
