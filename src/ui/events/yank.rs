//! Yank (copy) handlers
//!
//! This module handles copying content to the system clipboard.
//! Currently supports yanking the generated cURL command for the
//! selected endpoint.

use super::helpers::log_debug;
use crate::curl::curl_command;
use crate::state::AppState;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Copy the selected endpoint's generated cURL command to the clipboard
pub fn handle_yank_curl(selected_index: usize, state: Arc<RwLock<AppState>>, base_url: &str) {
    let state_read = state.read().unwrap();

    let Some(endpoint) = state_read.get_selected_endpoint(selected_index) else {
        log_debug("No endpoint selected to yank");
        return;
    };

    let command = curl_command(&endpoint, base_url, &state_read.data.api);
    drop(state_read);

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(command.clone()) {
            Ok(_) => {
                log_debug(&format!("✓ Yanked cURL for {}", endpoint.path));

                // Set flash flag
                {
                    let mut state_write = state.write().unwrap();
                    state_write.ui.yank_flash = true;
                }

                // Spawn task to clear flash after delay
                let state_clone = state.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(800)).await;
                    let mut s = state_clone.write().unwrap();
                    s.ui.yank_flash = false;
                });
            }
            Err(e) => {
                log_debug(&format!("✗ Failed to copy to clipboard: {}", e));
            }
        },
        Err(e) => {
            log_debug(&format!("✗ Failed to access clipboard: {}", e));
        }
    }
}
