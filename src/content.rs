//! Content document builder
//!
//! Turns the loaded reference data into the styled line document shown in
//! the content panel: per endpoint a heading, route line, description,
//! parameter table and the two code panels (generated cURL request and
//! example response). Heading positions are collected into a
//! [`ContentLayout`] so the viewport tracker and TOC jumps can address
//! endpoints by anchor.

use crate::curl::curl_command;
use crate::navigation::{ContentLayout, HeadingAnchor};
use crate::types::ApiEndpoint;
use crate::ui::draw::styling::get_method_color;
use crate::utils::format_route;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// The built document: display lines plus heading geometry.
#[derive(Debug, Clone, Default)]
pub struct ContentDocument {
    pub lines: Vec<Line<'static>>,
    pub layout: ContentLayout,
}

/// One row of the merged parameter table.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRow {
    pub name: String,
    pub kind: String,
    pub required: bool,
    pub description: String,
}

/// Merge an endpoint's declared parameters with its request-body properties
/// into a single table, parameters first, in declaration order.
pub fn format_method_params(endpoint: &ApiEndpoint) -> Vec<ParamRow> {
    let mut rows = Vec::new();

    for param in &endpoint.parameters {
        rows.push(ParamRow {
            name: param.name.clone(),
            kind: param.location.clone(),
            // Path params are required whether or not the document says so
            required: param.required.unwrap_or(param.location == "path"),
            description: param.description.clone().unwrap_or_default(),
        });
    }

    for prop in &endpoint.body_properties {
        let kind = prop
            .schema
            .as_ref()
            .and_then(|s| s.param_type.clone())
            .unwrap_or_else(|| "body".to_string());

        rows.push(ParamRow {
            name: prop.property.clone(),
            kind,
            required: false,
            description: String::new(),
        });
    }

    rows
}

/// Build the full reference page for the given sections.
///
/// Sections render in the given order; endpoints keep document order within
/// their section. `base_url` and `api` feed the generated request snippets.
pub fn build_document(
    sections: &[(String, Vec<ApiEndpoint>)],
    base_url: &str,
    api: &str,
) -> ContentDocument {
    let mut doc = ContentDocument::default();

    for (section, endpoints) in sections {
        for endpoint in endpoints {
            push_endpoint(&mut doc, section, endpoint, base_url, api);
        }
    }

    doc.layout.total_lines = doc.lines.len();
    doc
}

fn push_endpoint(
    doc: &mut ContentDocument,
    section: &str,
    endpoint: &ApiEndpoint,
    base_url: &str,
    api: &str,
) {
    // Heading: this line is the anchor the viewport tracker watches
    doc.layout.anchors.push(HeadingAnchor {
        section: section.to_string(),
        slug: endpoint.slug(),
        line: doc.lines.len(),
    });
    doc.lines.push(Line::from(Span::styled(
        endpoint.summary.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));

    // Route line
    let method = endpoint.method.to_uppercase();
    let method_color = get_method_color(&method);
    doc.lines.push(Line::from(vec![
        Span::styled(
            format!("{:7}", method),
            Style::default()
                .fg(method_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(format_route(&endpoint.path)),
    ]));
    doc.lines.push(Line::from(""));

    // Description (plain text; markdown semantics are out of scope)
    if !endpoint.description.is_empty() {
        for text_line in endpoint.description.lines() {
            doc.lines.push(Line::from(Span::raw(text_line.to_string())));
        }
        doc.lines.push(Line::from(""));
    }

    push_param_table(doc, endpoint);
    push_code_panel(
        doc,
        "cURL Example",
        &curl_command(endpoint, base_url, api),
    );

    if let Some(example) = &endpoint.example_response {
        push_code_panel(doc, "RESPONSE", &try_format_json(example));
    }

    doc.lines.push(Line::from(""));
    doc.lines.push(Line::from(Span::styled(
        "─".repeat(60),
        Style::default().fg(Color::DarkGray),
    )));
    doc.lines.push(Line::from(""));
}

fn push_param_table(doc: &mut ContentDocument, endpoint: &ApiEndpoint) {
    let rows = format_method_params(endpoint);
    if rows.is_empty() {
        return;
    }

    doc.lines.push(Line::from(Span::styled(
        "Parameters",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )));

    for row in rows {
        let required = if row.required { "required" } else { "optional" };
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{:20}", row.name), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:8}", row.kind), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:9}", required),
                Style::default().fg(if row.required {
                    Color::Red
                } else {
                    Color::DarkGray
                }),
            ),
        ];
        if !row.description.is_empty() {
            spans.push(Span::raw(row.description));
        }
        doc.lines.push(Line::from(spans));
    }

    doc.lines.push(Line::from(""));
}

fn push_code_panel(doc: &mut ContentDocument, header: &str, code: &str) {
    doc.lines.push(Line::from(Span::styled(
        header.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    for code_line in code.lines() {
        doc.lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(code_line.to_string(), Style::default().fg(Color::Green)),
        ]));
    }

    doc.lines.push(Line::from(""));
}

/// Attempts to pretty-print JSON, returns original string if not valid JSON
pub fn try_format_json(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiParameter, BodyProperty};

    fn endpoint(method: &str, path: &str, summary: &str) -> ApiEndpoint {
        ApiEndpoint {
            method: method.to_string(),
            path: path.to_string(),
            summary: summary.to_string(),
            description: "Does something.".to_string(),
            section: "orders".to_string(),
            parameters: vec![],
            body_properties: vec![],
            example_response: None,
        }
    }

    #[test]
    fn test_format_method_params_merges_body_properties() {
        let mut ep = endpoint("POST", "/orders", "Create an Order");
        ep.parameters = vec![ApiParameter {
            name: "id".to_string(),
            location: "path".to_string(),
            required: None,
            schema: None,
            description: Some("Order ID".to_string()),
        }];
        ep.body_properties = vec![BodyProperty {
            property: "email".to_string(),
            schema: None,
        }];

        let rows = format_method_params(&ep);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "id");
        assert!(rows[0].required); // path params default to required
        assert_eq!(rows[1].name, "email");
        assert_eq!(rows[1].kind, "body");
        assert!(!rows[1].required);
    }

    #[test]
    fn test_build_document_collects_anchors_in_order() {
        let sections = vec![(
            "orders".to_string(),
            vec![
                endpoint("GET", "/orders", "List Orders"),
                endpoint("POST", "/orders", "Create an Order"),
            ],
        )];

        let doc = build_document(&sections, "https://api.example.com", "store");

        assert_eq!(doc.layout.anchors.len(), 2);
        assert_eq!(doc.layout.anchors[0].slug, "list-orders");
        assert_eq!(doc.layout.anchors[1].slug, "create-an-order");
        assert!(doc.layout.anchors[0].line < doc.layout.anchors[1].line);
        assert_eq!(doc.layout.total_lines, doc.lines.len());
    }

    #[test]
    fn test_anchor_points_at_heading_line() {
        let sections = vec![("orders".to_string(), vec![endpoint("GET", "/orders", "List Orders")])];

        let doc = build_document(&sections, "https://api.example.com", "store");

        let anchor = &doc.layout.anchors[0];
        let heading: String = doc.lines[anchor.line]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(heading, "List Orders");
    }

    #[test]
    fn test_document_includes_curl_panel() {
        let sections = vec![("orders".to_string(), vec![endpoint("GET", "/orders", "List Orders")])];

        let doc = build_document(&sections, "https://api.example.com", "store");

        let text: Vec<String> = doc
            .lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("cURL Example")));
        assert!(text.iter().any(|l| l.contains("curl -X GET")));
    }

    #[test]
    fn test_document_includes_pretty_response_panel() {
        let mut ep = endpoint("GET", "/orders", "List Orders");
        ep.example_response = Some(r#"{"orders":[]}"#.to_string());
        let sections = vec![("orders".to_string(), vec![ep])];

        let doc = build_document(&sections, "https://api.example.com", "store");

        let text: Vec<String> = doc
            .lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("RESPONSE")));
        assert!(text.iter().any(|l| l.contains("\"orders\": []")));
    }

    #[test]
    fn test_try_format_json_valid() {
        let formatted = try_format_json(r#"{"a":1}"#);
        assert!(formatted.contains("\"a\": 1"));
    }

    #[test]
    fn test_try_format_json_invalid_passthrough() {
        assert_eq!(try_format_json("not json"), "not json");
    }
}
