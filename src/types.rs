use serde::Deserialize;

/// One documented API operation, flattened out of the reference document.
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    pub method: String,
    pub path: String,
    pub summary: String,
    pub description: String,
    /// Section of the reference document this endpoint belongs to
    pub section: String,
    pub parameters: Vec<ApiParameter>,
    pub body_properties: Vec<BodyProperty>,
    /// Example JSON payload from the first documented response, if any
    pub example_response: Option<String>,
}

impl ApiEndpoint {
    /// URL-safe anchor identity, derived from the summary
    pub fn slug(&self) -> String {
        crate::utils::to_kebab_case(&self.summary)
    }

    /// A generated request carries a JSON body only for POST with body properties
    pub fn has_body_example(&self) -> bool {
        self.method.to_uppercase() == "POST" && !self.body_properties.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiParameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: String, // "query", "path", "header", etc.

    pub required: Option<bool>,

    pub schema: Option<PropertySchema>,

    pub description: Option<String>,
}

/// One declared request-body property with its nested schema
#[derive(Debug, Clone, Deserialize)]
pub struct BodyProperty {
    pub property: String,

    pub schema: Option<PropertySchema>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub param_type: Option<String>, // "string", "integer", "boolean"

    pub format: Option<String>, // "int32", "int64", "date-time", etc.

    pub default: Option<serde_json::Value>,
}

// ============================================================================
// Reference document wire shapes
// ============================================================================

/// The reference document as stored in the data file
#[derive(Deserialize)]
pub struct ReferenceSpec {
    /// API-family label, e.g. "store" or "admin"
    pub api: String,
    pub sections: Vec<SectionSpec>,
}

#[derive(Deserialize)]
pub struct SectionSpec {
    pub section: String,
    pub endpoints: Vec<EndpointSpec>,
}

#[derive(Deserialize)]
pub struct EndpointSpec {
    pub method: String,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Option<Vec<ApiParameter>>,
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBodySpec>,
    pub responses: Option<Vec<ResponseSpec>>,
}

#[derive(Deserialize)]
pub struct RequestBodySpec {
    pub properties: Option<Vec<BodyProperty>>,
}

#[derive(Deserialize)]
pub struct ResponseSpec {
    pub content: Option<Vec<ResponseContent>>,
}

#[derive(Deserialize)]
pub struct ResponseContent {
    pub json: Option<String>,
}

// ============================================================================
// UI state enums
// ============================================================================

#[derive(Debug, Clone)]
pub enum LoadingState {
    Idle,
    Fetching,
    Parsing,
    Complete,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Flat,
    Grouped,
}

#[derive(Debug, Clone)]
pub enum RenderItem {
    SectionHeader {
        name: String,
        count: usize,
        expanded: bool,
    },
    Endpoint {
        endpoint: ApiEndpoint,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EnteringSource,
    Searching,
}

/// Tracks which field is active in the source modal
#[derive(Debug, Clone, PartialEq)]
pub enum SourceInputField {
    Source,
    BaseUrl,
}

#[derive(Debug, Clone)]
pub struct SourceSubmission {
    pub source: String,
    pub base_url: Option<String>,
}

/// Tracks which main panel has focus
#[derive(Debug, Clone, PartialEq)]
pub enum PanelFocus {
    Toc,     // Left panel
    Content, // Right panel
}

/// Page metadata published through the navigation context on explicit jumps
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}
