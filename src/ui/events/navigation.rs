//! Navigation handlers
//!
//! This module handles navigation through the UI:
//! - List navigation (up/down in the table of contents)
//! - Section expand/collapse and jumps into the content document
//! - View mode toggling (flat vs grouped)

use super::helpers::{apply, log_debug};
use crate::actions::{AppAction, apply_action};
use crate::navigation::NavigationSink;
use crate::state::{AppState, count_visible_items};
use crate::types::{ApiEndpoint, PageMetadata, RenderItem, ViewMode};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Navigate up in the table of contents
pub fn handle_up(
    selected_index: &mut usize,
    _state: Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    if *selected_index > 0 {
        *selected_index -= 1;
        list_state.select(Some(*selected_index));
    }
}

/// Navigate down in the table of contents
pub fn handle_down(
    selected_index: &mut usize,
    state: Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    let state_guard = state.read().unwrap();
    let max_index = count_visible_items(&state_guard).saturating_sub(1);
    drop(state_guard);

    if *selected_index < max_index {
        *selected_index += 1;
        list_state.select(Some(*selected_index));
    }
}

/// Toggle between flat and grouped view modes
pub fn handle_toggle_view(
    selected_index: &mut usize,
    state: Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    apply(state.clone(), AppAction::ToggleViewMode);

    // Reset selection to top
    *selected_index = 0;
    list_state.select(Some(0));

    let view_mode = state.read().unwrap().ui.view_mode.clone();
    log_debug(&format!("Switched to {view_mode:?} mode"));
}

/// Enter/Space on the table of contents: expand a section header, or jump
/// the content panel to the selected endpoint.
pub fn handle_enter(selected_index: usize, state: Arc<RwLock<AppState>>) {
    let state_read = state.read().unwrap();

    match state_read.ui.view_mode {
        ViewMode::Flat => {
            let endpoint = state_read.active_endpoints().get(selected_index).cloned();
            drop(state_read);
            if let Some(endpoint) = endpoint {
                jump_to_endpoint(state, &endpoint);
            }
        }
        ViewMode::Grouped => {
            let item = state_read.get_render_items().into_iter().nth(selected_index);
            drop(state_read);

            match item {
                Some(RenderItem::SectionHeader { name, .. }) => {
                    apply(state, AppAction::ToggleSectionExpanded(name));
                }
                Some(RenderItem::Endpoint { endpoint }) => {
                    jump_to_endpoint(state, &endpoint);
                }
                None => {}
            }
        }
    }
}

/// Scroll the content panel to an endpoint's heading and publish its page
/// metadata. The section/slug highlight follows from the viewport tracker
/// once the new scroll position is drawn.
fn jump_to_endpoint(state: Arc<RwLock<AppState>>, endpoint: &ApiEndpoint) {
    let mut s = state.write().unwrap();

    s.nav.update_metadata(PageMetadata {
        title: endpoint.summary.clone(),
        description: endpoint.description.clone(),
    });

    if let Some(anchor) = s.content_layout.anchor_for(&endpoint.section, &endpoint.slug()) {
        let line = anchor.line;
        apply_action(AppAction::ScrollContentTo(line), &mut s);
        log_debug(&format!("Jumped to #{}/{}", endpoint.section, endpoint.slug()));
    } else {
        log_debug(&format!("No anchor for {}", endpoint.slug()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{ContentLayout, HeadingAnchor};

    fn endpoint(summary: &str, section: &str) -> ApiEndpoint {
        ApiEndpoint {
            method: "GET".to_string(),
            path: "/orders".to_string(),
            summary: summary.to_string(),
            description: "Lists orders.".to_string(),
            section: section.to_string(),
            parameters: vec![],
            body_properties: vec![],
            example_response: None,
        }
    }

    fn state_with_layout() -> Arc<RwLock<AppState>> {
        let mut state = AppState::default();
        state.content_layout = ContentLayout {
            anchors: vec![HeadingAnchor {
                section: "orders".to_string(),
                slug: "list-orders".to_string(),
                line: 42,
            }],
            total_lines: 200,
        };
        state.ui.content_height = 50;
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_jump_scrolls_to_anchor_and_sets_metadata() {
        let state = state_with_layout();
        let ep = endpoint("List Orders", "orders");

        jump_to_endpoint(state.clone(), &ep);

        let s = state.read().unwrap();
        assert_eq!(s.ui.content_scroll, 42);
        let metadata = s.nav.metadata.as_ref().unwrap();
        assert_eq!(metadata.title, "List Orders");
        assert_eq!(metadata.description, "Lists orders.");
    }

    #[test]
    fn test_jump_distinguishes_same_summary_across_sections() {
        let mut state = AppState::default();
        state.content_layout = ContentLayout {
            anchors: vec![
                HeadingAnchor {
                    section: "orders".to_string(),
                    slug: "list".to_string(),
                    line: 0,
                },
                HeadingAnchor {
                    section: "products".to_string(),
                    slug: "list".to_string(),
                    line: 80,
                },
            ],
            total_lines: 300,
        };
        state.ui.content_height = 50;
        let state = Arc::new(RwLock::new(state));

        let ep = endpoint("List", "products");
        jump_to_endpoint(state.clone(), &ep);

        assert_eq!(state.read().unwrap().ui.content_scroll, 80);
    }

    #[test]
    fn test_jump_without_anchor_keeps_scroll() {
        let state = state_with_layout();
        let ep = endpoint("Unknown Endpoint", "orders");

        jump_to_endpoint(state.clone(), &ep);

        let s = state.read().unwrap();
        assert_eq!(s.ui.content_scroll, 0);
        // Metadata still updates: the jump was requested explicitly
        assert!(s.nav.metadata.is_some());
    }
}
