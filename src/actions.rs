use crate::state::AppState;
use crate::types::{InputMode, PanelFocus, SourceInputField, ViewMode};
use crate::ui::draw::styling::SCROLL_LINES_PER_ACTION;

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// more testable and enabling future features like undo/redo
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation actions
    NavigateToPanel(PanelFocus),

    // Content panel scrolling
    ScrollContentUp,
    ScrollContentDown,
    ScrollContentTo(usize),
    ResetContentScroll,

    // View mode actions
    ToggleViewMode,
    ToggleSectionExpanded(String),

    // Input mode actions
    EnterSourceInputMode {
        source: Option<String>,
        base_url: Option<String>,
    },
    ExitSourceInputMode,
    EnterSearchMode,
    ExitSearchMode,
    SetActiveSourceField(SourceInputField),

    // Text input actions (for the modal and the search bar)
    AppendToSourceInput(String),
    AppendToBaseUrlInput(String),
    AppendToSearchQuery(String),
    ClearSourceInput,
    ClearBaseUrlInput,
    ClearSearchQuery,
    BackspaceSourceInput,
    BackspaceBaseUrlInput,
    BackspaceSearchQuery,
    DeleteWordSourceInput,
    DeleteWordBaseUrlInput,

    // Clipboard feedback
    SetYankFlash(bool),
}

/// Apply an action to the application state
/// This is a pure state transformation function that mutates AppState based on the action
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Navigation
        AppAction::NavigateToPanel(panel) => {
            state.ui.panel_focus = panel;
        }

        // Content scrolling, clamped to the document
        AppAction::ScrollContentUp => {
            state.ui.content_scroll = state
                .ui
                .content_scroll
                .saturating_sub(SCROLL_LINES_PER_ACTION);
        }
        AppAction::ScrollContentDown => {
            let max = state.content_layout.max_scroll(state.ui.content_height);
            state.ui.content_scroll = state
                .ui
                .content_scroll
                .saturating_add(SCROLL_LINES_PER_ACTION)
                .min(max);
        }
        AppAction::ScrollContentTo(line) => {
            let max = state.content_layout.max_scroll(state.ui.content_height);
            state.ui.content_scroll = line.min(max);
        }
        AppAction::ResetContentScroll => {
            state.ui.content_scroll = 0;
        }

        // View mode
        AppAction::ToggleViewMode => {
            state.ui.view_mode = match state.ui.view_mode {
                ViewMode::Flat => ViewMode::Grouped,
                ViewMode::Grouped => ViewMode::Flat,
            };
        }
        AppAction::ToggleSectionExpanded(section) => {
            if state.ui.expanded_sections.contains(&section) {
                state.ui.expanded_sections.remove(&section);
            } else {
                state.ui.expanded_sections.insert(section);
            }
        }

        // Input modes
        AppAction::EnterSourceInputMode { source, base_url } => {
            state.input.mode = InputMode::EnteringSource;
            state.input.source_input = source.unwrap_or_default();
            state.input.base_url_input = base_url.unwrap_or_default();
            state.input.active_source_field = SourceInputField::Source;
        }
        AppAction::ExitSourceInputMode => {
            state.input.mode = InputMode::Normal;
            state.input.source_input.clear();
            state.input.base_url_input.clear();
        }
        AppAction::EnterSearchMode => {
            state.input.mode = InputMode::Searching;
            state.search.query.clear();
            state.update_filtered_endpoints();
        }
        AppAction::ExitSearchMode => {
            state.input.mode = InputMode::Normal;
        }
        AppAction::SetActiveSourceField(field) => {
            state.input.active_source_field = field;
        }

        // Text input
        AppAction::AppendToSourceInput(text) => {
            state.input.source_input.push_str(&text);
        }
        AppAction::AppendToBaseUrlInput(text) => {
            state.input.base_url_input.push_str(&text);
        }
        AppAction::AppendToSearchQuery(text) => {
            state.search.query.push_str(&text);
            state.update_filtered_endpoints();
        }
        AppAction::ClearSourceInput => {
            state.input.source_input.clear();
        }
        AppAction::ClearBaseUrlInput => {
            state.input.base_url_input.clear();
        }
        AppAction::ClearSearchQuery => {
            state.search.query.clear();
            state.update_filtered_endpoints();
        }
        AppAction::BackspaceSourceInput => {
            state.input.source_input.pop();
        }
        AppAction::BackspaceBaseUrlInput => {
            state.input.base_url_input.pop();
        }
        AppAction::BackspaceSearchQuery => {
            state.search.query.pop();
            state.update_filtered_endpoints();
        }
        AppAction::DeleteWordSourceInput => {
            delete_word(&mut state.input.source_input);
        }
        AppAction::DeleteWordBaseUrlInput => {
            delete_word(&mut state.input.base_url_input);
        }

        // Clipboard feedback
        AppAction::SetYankFlash(active) => {
            state.ui.yank_flash = active;
        }
    }
}

/// Helper function to delete the last word from a string (Ctrl+W behavior)
fn delete_word(s: &mut String) {
    // Trim trailing whitespace first
    *s = s.trim_end().to_string();

    // Find last whitespace and truncate there
    if let Some(pos) = s.rfind(char::is_whitespace) {
        s.truncate(pos);
    } else {
        // No whitespace found, clear entire string
        s.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ContentLayout;
    use crate::types::ApiEndpoint;

    fn create_test_state() -> AppState {
        AppState::default()
    }

    fn endpoint(path: &str, summary: &str, section: &str) -> ApiEndpoint {
        ApiEndpoint {
            method: "GET".to_string(),
            path: path.to_string(),
            summary: summary.to_string(),
            description: String::new(),
            section: section.to_string(),
            parameters: vec![],
            body_properties: vec![],
            example_response: None,
        }
    }

    #[test]
    fn test_navigate_to_panel() {
        let mut state = create_test_state();
        assert_eq!(state.ui.panel_focus, PanelFocus::Toc);

        apply_action(AppAction::NavigateToPanel(PanelFocus::Content), &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Content);
    }

    #[test]
    fn test_toggle_view_mode() {
        let mut state = create_test_state();
        assert_eq!(state.ui.view_mode, ViewMode::Grouped);

        apply_action(AppAction::ToggleViewMode, &mut state);
        assert_eq!(state.ui.view_mode, ViewMode::Flat);

        apply_action(AppAction::ToggleViewMode, &mut state);
        assert_eq!(state.ui.view_mode, ViewMode::Grouped);
    }

    #[test]
    fn test_toggle_section_expanded() {
        let mut state = create_test_state();
        assert!(state.ui.expanded_sections.is_empty());

        apply_action(
            AppAction::ToggleSectionExpanded("orders".to_string()),
            &mut state,
        );
        assert!(state.ui.expanded_sections.contains("orders"));
        assert_eq!(state.ui.expanded_sections.len(), 1);

        apply_action(
            AppAction::ToggleSectionExpanded("orders".to_string()),
            &mut state,
        );
        assert!(state.ui.expanded_sections.is_empty());
    }

    #[test]
    fn test_scroll_actions_clamped() {
        let mut state = create_test_state();
        state.content_layout = ContentLayout {
            anchors: vec![],
            total_lines: 100,
        };
        state.ui.content_height = 40;
        state.ui.content_scroll = 58;

        apply_action(AppAction::ScrollContentDown, &mut state);
        assert_eq!(state.ui.content_scroll, 60); // clamped at max_scroll

        apply_action(AppAction::ScrollContentUp, &mut state);
        assert_eq!(state.ui.content_scroll, 55);

        state.ui.content_scroll = 2;
        apply_action(AppAction::ScrollContentUp, &mut state);
        assert_eq!(state.ui.content_scroll, 0); // saturates at zero
    }

    #[test]
    fn test_scroll_content_to_clamps() {
        let mut state = create_test_state();
        state.content_layout = ContentLayout {
            anchors: vec![],
            total_lines: 100,
        };
        state.ui.content_height = 40;

        apply_action(AppAction::ScrollContentTo(30), &mut state);
        assert_eq!(state.ui.content_scroll, 30);

        apply_action(AppAction::ScrollContentTo(500), &mut state);
        assert_eq!(state.ui.content_scroll, 60);

        apply_action(AppAction::ResetContentScroll, &mut state);
        assert_eq!(state.ui.content_scroll, 0);
    }

    #[test]
    fn test_enter_source_input_mode() {
        let mut state = create_test_state();

        apply_action(
            AppAction::EnterSourceInputMode {
                source: Some("https://docs.example.com/reference.json".to_string()),
                base_url: Some("https://api.example.com".to_string()),
            },
            &mut state,
        );

        assert_eq!(state.input.mode, InputMode::EnteringSource);
        assert_eq!(
            state.input.source_input,
            "https://docs.example.com/reference.json"
        );
        assert_eq!(state.input.base_url_input, "https://api.example.com");
        assert_eq!(state.input.active_source_field, SourceInputField::Source);
    }

    #[test]
    fn test_exit_source_input_mode_clears_fields() {
        let mut state = create_test_state();
        state.input.mode = InputMode::EnteringSource;
        state.input.source_input = "partial".to_string();

        apply_action(AppAction::ExitSourceInputMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
        assert_eq!(state.input.source_input, "");
    }

    #[test]
    fn test_text_input_actions() {
        let mut state = create_test_state();

        apply_action(
            AppAction::AppendToSourceInput("http://".to_string()),
            &mut state,
        );
        assert_eq!(state.input.source_input, "http://");

        apply_action(
            AppAction::AppendToSourceInput("localhost".to_string()),
            &mut state,
        );
        assert_eq!(state.input.source_input, "http://localhost");

        apply_action(AppAction::BackspaceSourceInput, &mut state);
        assert_eq!(state.input.source_input, "http://localhos");

        apply_action(AppAction::ClearSourceInput, &mut state);
        assert_eq!(state.input.source_input, "");
    }

    #[test]
    fn test_delete_word() {
        let mut s = "hello world foo".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello world");

        delete_word(&mut s);
        assert_eq!(s, "hello");

        delete_word(&mut s);
        assert_eq!(s, "");

        delete_word(&mut s);
        assert_eq!(s, "");
    }

    #[test]
    fn test_search_actions_keep_filter_in_sync() {
        let mut state = create_test_state();
        state.data.endpoints = vec![
            endpoint("/orders", "List Orders", "orders"),
            endpoint("/products", "List Products", "products"),
        ];

        apply_action(AppAction::EnterSearchMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Searching);

        apply_action(AppAction::AppendToSearchQuery("ord".to_string()), &mut state);
        assert_eq!(state.search.query, "ord");
        assert_eq!(state.search.filtered_endpoints.len(), 1);

        apply_action(AppAction::BackspaceSearchQuery, &mut state);
        assert_eq!(state.search.query, "or");

        apply_action(AppAction::ClearSearchQuery, &mut state);
        assert_eq!(state.search.query, "");

        apply_action(AppAction::ExitSearchMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_yank_flash() {
        let mut state = create_test_state();
        assert!(!state.ui.yank_flash);

        apply_action(AppAction::SetYankFlash(true), &mut state);
        assert!(state.ui.yank_flash);

        apply_action(AppAction::SetYankFlash(false), &mut state);
        assert!(!state.ui.yank_flash);
    }
}
