use crate::types::{ApiEndpoint, ReferenceSpec};
use std::collections::HashMap;

/// Flatten the reference document into endpoints, keeping document order
/// within each section.
pub fn parse_reference_spec(spec: ReferenceSpec) -> Vec<ApiEndpoint> {
    let mut endpoints: Vec<ApiEndpoint> = Vec::new();

    for section in spec.sections {
        for ep in section.endpoints {
            let summary = ep
                .summary
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("{} {}", ep.method.to_uppercase(), ep.path));

            let body_properties = ep
                .request_body
                .and_then(|body| body.properties)
                .unwrap_or_default();

            // Example payload of the first documented response, if any
            let example_response = ep
                .responses
                .as_ref()
                .and_then(|responses| responses.first())
                .and_then(|response| response.content.as_ref())
                .and_then(|content| content.first())
                .and_then(|content| content.json.clone());

            endpoints.push(ApiEndpoint {
                method: ep.method.to_uppercase(),
                path: ep.path,
                summary,
                description: ep.description.unwrap_or_default(),
                section: section.section.clone(),
                parameters: ep.parameters.unwrap_or_default(),
                body_properties,
                example_response,
            });
        }
    }

    endpoints
}

/// Group endpoints by their section name
pub fn group_endpoints(endpoints: &[ApiEndpoint]) -> HashMap<String, Vec<ApiEndpoint>> {
    let mut grouped: HashMap<String, Vec<ApiEndpoint>> = HashMap::new();

    for endpoint in endpoints {
        grouped
            .entry(endpoint.section.clone())
            .or_default()
            .push(endpoint.clone());
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BodyProperty, EndpointSpec, RequestBodySpec, ResponseContent, ResponseSpec, SectionSpec,
    };

    fn create_test_endpoint(method: &str, path: &str, summary: Option<&str>) -> EndpointSpec {
        EndpointSpec {
            method: method.to_string(),
            path: path.to_string(),
            summary: summary.map(|s| s.to_string()),
            description: None,
            parameters: None,
            request_body: None,
            responses: None,
        }
    }

    fn spec_with(sections: Vec<SectionSpec>) -> ReferenceSpec {
        ReferenceSpec {
            api: "store".to_string(),
            sections,
        }
    }

    #[test]
    fn test_parse_empty_spec() {
        let endpoints = parse_reference_spec(spec_with(vec![]));
        assert_eq!(endpoints.len(), 0);
    }

    #[test]
    fn test_parse_single_endpoint() {
        let spec = spec_with(vec![SectionSpec {
            section: "orders".to_string(),
            endpoints: vec![create_test_endpoint("get", "/orders", Some("List Orders"))],
        }]);

        let endpoints = parse_reference_spec(spec);

        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].method, "GET"); // normalized to uppercase
        assert_eq!(endpoints[0].path, "/orders");
        assert_eq!(endpoints[0].summary, "List Orders");
        assert_eq!(endpoints[0].section, "orders");
    }

    #[test]
    fn test_parse_summary_fallback() {
        let spec = spec_with(vec![SectionSpec {
            section: "orders".to_string(),
            endpoints: vec![
                create_test_endpoint("GET", "/orders", None),
                create_test_endpoint("POST", "/orders", Some("")),
            ],
        }]);

        let endpoints = parse_reference_spec(spec);

        assert_eq!(endpoints[0].summary, "GET /orders");
        assert_eq!(endpoints[1].summary, "POST /orders");
    }

    #[test]
    fn test_parse_body_properties() {
        let mut ep = create_test_endpoint("POST", "/orders", Some("Create an Order"));
        ep.request_body = Some(RequestBodySpec {
            properties: Some(vec![BodyProperty {
                property: "email".to_string(),
                schema: None,
            }]),
        });

        let spec = spec_with(vec![SectionSpec {
            section: "orders".to_string(),
            endpoints: vec![ep],
        }]);

        let endpoints = parse_reference_spec(spec);

        assert_eq!(endpoints[0].body_properties.len(), 1);
        assert_eq!(endpoints[0].body_properties[0].property, "email");
    }

    #[test]
    fn test_parse_example_response_takes_first() {
        let mut ep = create_test_endpoint("GET", "/orders", Some("List Orders"));
        ep.responses = Some(vec![
            ResponseSpec {
                content: Some(vec![ResponseContent {
                    json: Some(r#"{"orders":[]}"#.to_string()),
                }]),
            },
            ResponseSpec {
                content: Some(vec![ResponseContent {
                    json: Some(r#"{"error":"nope"}"#.to_string()),
                }]),
            },
        ]);

        let spec = spec_with(vec![SectionSpec {
            section: "orders".to_string(),
            endpoints: vec![ep],
        }]);

        let endpoints = parse_reference_spec(spec);

        assert_eq!(
            endpoints[0].example_response.as_deref(),
            Some(r#"{"orders":[]}"#)
        );
    }

    #[test]
    fn test_parse_endpoint_without_responses() {
        let spec = spec_with(vec![SectionSpec {
            section: "orders".to_string(),
            endpoints: vec![create_test_endpoint("GET", "/orders", Some("List Orders"))],
        }]);

        let endpoints = parse_reference_spec(spec);
        assert!(endpoints[0].example_response.is_none());
    }

    #[test]
    fn test_parse_multiple_sections_keep_order() {
        let spec = spec_with(vec![
            SectionSpec {
                section: "orders".to_string(),
                endpoints: vec![
                    create_test_endpoint("GET", "/orders", Some("List Orders")),
                    create_test_endpoint("POST", "/orders", Some("Create an Order")),
                ],
            },
            SectionSpec {
                section: "products".to_string(),
                endpoints: vec![create_test_endpoint("GET", "/products", Some("List Products"))],
            },
        ]);

        let endpoints = parse_reference_spec(spec);

        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0].section, "orders");
        assert_eq!(endpoints[1].summary, "Create an Order");
        assert_eq!(endpoints[2].section, "products");
    }

    #[test]
    fn test_group_endpoints() {
        let spec = spec_with(vec![
            SectionSpec {
                section: "orders".to_string(),
                endpoints: vec![
                    create_test_endpoint("GET", "/orders", Some("List Orders")),
                    create_test_endpoint("POST", "/orders", Some("Create an Order")),
                ],
            },
            SectionSpec {
                section: "products".to_string(),
                endpoints: vec![create_test_endpoint("GET", "/products", Some("List Products"))],
            },
        ]);

        let endpoints = parse_reference_spec(spec);
        let grouped = group_endpoints(&endpoints);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["orders"].len(), 2);
        assert_eq!(grouped["products"].len(), 1);
    }
}
