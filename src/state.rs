use crate::navigation::{ContentLayout, PageNavigation};
use crate::types::{
    ApiEndpoint, InputMode, LoadingState, PanelFocus, RenderItem, SourceInputField, ViewMode,
};
use std::collections::{HashMap, HashSet};

/// Loaded reference data and its loading lifecycle
#[derive(Debug, Clone)]
pub struct DataState {
    /// API-family label from the document ("store", "admin", ...)
    pub api: String,
    pub endpoints: Vec<ApiEndpoint>,
    pub grouped_endpoints: HashMap<String, Vec<ApiEndpoint>>,
    pub loading_state: LoadingState,
    pub retry_count: u32,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            api: String::new(),
            endpoints: Vec::new(),
            grouped_endpoints: HashMap::new(),
            loading_state: LoadingState::Idle,
            retry_count: 0,
        }
    }
}

/// Transient view state
#[derive(Debug, Clone)]
pub struct UiState {
    pub view_mode: ViewMode,
    pub expanded_sections: HashSet<String>,
    pub panel_focus: PanelFocus,
    /// Scroll offset of the content panel (lines)
    pub content_scroll: usize,
    /// Height of the content viewport as of the last frame
    pub content_height: u16,
    /// Brief highlight after a yank to the clipboard
    pub yank_flash: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grouped,
            expanded_sections: HashSet::new(),
            panel_focus: PanelFocus::Toc,
            content_scroll: 0,
            content_height: 0,
            yank_flash: false,
        }
    }
}

/// Modal/text input state
#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub source_input: String,
    pub base_url_input: String,
    /// track which field is active
    pub active_source_field: SourceInputField,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            source_input: String::new(),
            base_url_input: String::new(),
            active_source_field: SourceInputField::Source,
        }
    }
}

/// Endpoint filter state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub filtered_endpoints: Vec<ApiEndpoint>,
    pub filtered_grouped: HashMap<String, Vec<ApiEndpoint>>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: DataState,
    pub ui: UiState,
    pub input: InputState,
    pub search: SearchState,
    /// Geometry of the content document as of the last frame
    pub content_layout: ContentLayout,
    /// Navigation context: current anchor + page metadata
    pub nav: PageNavigation,
}

impl AppState {
    /// Endpoints honoring the active search filter
    pub fn active_endpoints(&self) -> &[ApiEndpoint] {
        if self.search.query.is_empty() {
            &self.data.endpoints
        } else {
            &self.search.filtered_endpoints
        }
    }

    /// Section grouping honoring the active search filter
    pub fn active_grouped(&self) -> &HashMap<String, Vec<ApiEndpoint>> {
        if self.search.query.is_empty() {
            &self.data.grouped_endpoints
        } else {
            &self.search.filtered_grouped
        }
    }

    /// Recompute the filtered views after a query change
    pub fn update_filtered_endpoints(&mut self) {
        let query = self.search.query.to_lowercase();

        self.search.filtered_endpoints = self
            .data
            .endpoints
            .iter()
            .filter(|e| {
                e.path.to_lowercase().contains(&query)
                    || e.summary.to_lowercase().contains(&query)
                    || e.section.to_lowercase().contains(&query)
            })
            .cloned()
            .collect();

        let mut grouped: HashMap<String, Vec<ApiEndpoint>> = HashMap::new();
        for endpoint in &self.search.filtered_endpoints {
            grouped
                .entry(endpoint.section.clone())
                .or_default()
                .push(endpoint.clone());
        }
        self.search.filtered_grouped = grouped;
    }

    /// Sections in the order the document declares them, with their endpoints.
    /// Order comes from first appearance in the flat endpoint list, which
    /// keeps document order per section.
    pub fn sections_in_order(&self) -> Vec<(String, Vec<ApiEndpoint>)> {
        let grouped = self.active_grouped();
        let mut names: Vec<&String> = Vec::new();

        for endpoint in self.active_endpoints() {
            if !names.contains(&&endpoint.section) {
                names.push(&endpoint.section);
            }
        }

        names
            .into_iter()
            .map(|name| (name.clone(), grouped[name].clone()))
            .collect()
    }

    /// Flattened TOC rows for the grouped view
    pub fn get_render_items(&self) -> Vec<RenderItem> {
        let mut render_items = Vec::new();

        for (name, endpoints) in self.sections_in_order() {
            let expanded = self.ui.expanded_sections.contains(&name);

            render_items.push(RenderItem::SectionHeader {
                name: name.clone(),
                count: endpoints.len(),
                expanded,
            });

            if expanded {
                for endpoint in endpoints {
                    render_items.push(RenderItem::Endpoint { endpoint });
                }
            }
        }

        render_items
    }

    /// Resolve the TOC selection index to an endpoint, if it is one
    pub fn get_selected_endpoint(&self, selected_index: usize) -> Option<ApiEndpoint> {
        match self.ui.view_mode {
            ViewMode::Flat => self.active_endpoints().get(selected_index).cloned(),
            ViewMode::Grouped => {
                self.get_render_items()
                    .into_iter()
                    .nth(selected_index)
                    .and_then(|item| match item {
                        RenderItem::Endpoint { endpoint } => Some(endpoint),
                        RenderItem::SectionHeader { .. } => None,
                    })
            }
        }
    }
}

/// Helper function to count visible rows in the current view mode
pub fn count_visible_items(state: &AppState) -> usize {
    match state.ui.view_mode {
        ViewMode::Flat => state.active_endpoints().len(),
        ViewMode::Grouped => state.get_render_items().len(),
    }
}
