use crate::reference::parse::{group_endpoints, parse_reference_spec};
use crate::state::AppState;
use crate::types::{LoadingState, ReferenceSpec};
use std::sync::{Arc, RwLock};

/// Spawns a background task to load and parse the reference document.
/// The source may be an http(s) URL or a local file path.
pub fn load_reference_background(state: Arc<RwLock<AppState>>, source: String) {
    // Set loading state
    if let Ok(mut s) = state.write() {
        s.data.loading_state = LoadingState::Fetching;
    }

    tokio::spawn(async move {
        let raw = if source.starts_with("http://") || source.starts_with("https://") {
            fetch_remote(&source).await
        } else {
            tokio::fs::read_to_string(&source)
                .await
                .map_err(|e| format!("Read error: {}", e))
        };

        let raw = match raw {
            Ok(raw) => raw,
            Err(message) => {
                if let Ok(mut s) = state.write() {
                    s.data.loading_state = LoadingState::Error(message);
                }
                return;
            }
        };

        if let Ok(mut s) = state.write() {
            s.data.loading_state = LoadingState::Parsing;
        }

        match serde_json::from_str::<ReferenceSpec>(&raw) {
            Ok(spec) => {
                let api = spec.api.clone();
                let endpoints = parse_reference_spec(spec);
                let grouped = group_endpoints(&endpoints);

                if let Ok(mut s) = state.write() {
                    s.data.api = api;
                    s.data.endpoints = endpoints;
                    s.data.grouped_endpoints = grouped;
                    s.data.loading_state = LoadingState::Complete;
                    s.data.retry_count = 0;
                    // A new document invalidates the scroll position
                    s.ui.content_scroll = 0;
                    s.update_filtered_endpoints();
                }
            }
            Err(e) => {
                if let Ok(mut s) = state.write() {
                    s.data.loading_state = LoadingState::Error(format!("Parse error: {}", e));
                }
            }
        }
    });
}

async fn fetch_remote(url: &str) -> Result<String, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .text()
        .await
        .map_err(|e| format!("Network error: {}", e))
}
