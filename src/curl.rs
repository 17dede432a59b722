//! Generated-request synthesis
//!
//! Builds the display-only cURL snippet for an endpoint, including a
//! heuristic example body for POST endpoints. The body value is derived
//! from the endpoint's documented example response where possible, and
//! falls back to a `<prefix>_<property>` placeholder. The lookups are an
//! ordered chain of strategies, each returning `Option` and short-circuiting
//! on the first hit; a miss anywhere just moves on to the next strategy.

use crate::types::{ApiEndpoint, BodyProperty};
use crate::utils::format_route;
use serde_json::{Map, Value};

/// Render the shell command shown in the "cURL Example" panel.
///
/// A JSON body and content-type header are appended only when the method is
/// POST and the endpoint declares at least one request-body property.
pub fn curl_command(endpoint: &ApiEndpoint, base_url: &str, api: &str) -> String {
    let method = endpoint.method.to_uppercase();
    let route = format_route(&endpoint.path);

    let mut command = format!(
        "curl -X {} {}/{}{} \\\n  --header \"Authorization: Bearer <ACCESS TOKEN>\"",
        method,
        base_url.trim_end_matches('/'),
        api,
        route
    );

    if endpoint.has_body_example() {
        let prefix = format!("example_{}", endpoint.section);
        let body = example_body(
            &endpoint.body_properties,
            &prefix,
            endpoint.example_response.as_deref(),
            &endpoint.path,
        )
        .map(|map| Value::Object(map).to_string())
        .unwrap_or_else(|| "{}".to_string());

        command.push_str(" \\\n  --header \"content-type: application/json\" \\\n  --data '");
        command.push_str(&body);
        command.push('\'');
    }

    command
}

/// Derive an example value for the request body from the example response.
///
/// Strategies, in priority order, first success wins:
/// 1. For sub-resource paths (`/collection/{id}/sub-resource`), locate the
///    sub-resource key in the parsed response and take a same-named property
///    from it.
/// 2. Look for each property at the top level of the response, or one level
///    beneath its first key.
/// 3. Placeholder `<prefix>_<property>` for the first declared property.
///
/// Returns `None` only when no properties are declared at all. The result
/// holds at most one entry; the goal is a plausible sample, not a complete
/// or correct body.
pub fn example_body(
    properties: &[BodyProperty],
    prefix: &str,
    example_response: Option<&str>,
    path: &str,
) -> Option<Map<String, Value>> {
    let first = properties.first()?;

    let parsed = example_response.and_then(|raw| serde_json::from_str::<Value>(raw).ok());

    if let Some(json) = parsed.as_ref() {
        if let Some((name, value)) =
            drill_down_lookup(json, path, properties).or_else(|| top_level_lookup(json, properties))
        {
            let mut body = Map::new();
            body.insert(name, value);
            return Some(body);
        }
    }

    let mut body = Map::new();
    body.insert(
        first.property.clone(),
        Value::String(format!("{}_{}", prefix, first.property)),
    );
    Some(body)
}

/// Strategy 1: the endpoint targets a sub-resource, so the interesting values
/// live under the sub-resource key of the response rather than at the top.
fn drill_down_lookup(
    json: &Value,
    path: &str,
    properties: &[BodyProperty],
) -> Option<(String, Value)> {
    let key = sub_resource_key(path)?;
    let container = lookup_key(json, &key)?;

    properties.iter().find_map(|prop| {
        property_value(container, &prop.property).map(|v| (prop.property.clone(), v.clone()))
    })
}

/// Strategy 2: flat lookup at the top level of the response, or one level
/// beneath its first key.
fn top_level_lookup(json: &Value, properties: &[BodyProperty]) -> Option<(String, Value)> {
    properties.iter().find_map(|prop| {
        json.get(&prop.property)
            .or_else(|| first_value(json)?.get(&prop.property))
            .map(|v| (prop.property.clone(), v.clone()))
    })
}

/// Extract the sub-resource key from a path shaped `/collection/{id}/sub-resource`.
/// Returns `None` for paths with two or fewer segments. Dashes are normalized
/// to underscores to match response field naming.
fn sub_resource_key(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() <= 2 {
        return None;
    }

    // When the second segment is a path parameter the sub-resource follows it,
    // otherwise the path nests statically and the second segment is the key.
    let index = if is_path_param(segments[1]) { 2 } else { 1 };

    segments.get(index).map(|s| s.replace('-', "_"))
}

fn is_path_param(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('{') && segment.ends_with('}')
}

/// Look up `key` directly, or one level beneath the first key of the object.
fn lookup_key<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    json.get(key).or_else(|| first_value(json)?.get(key))
}

fn first_value(json: &Value) -> Option<&Value> {
    json.as_object()?.values().next()
}

/// Pull a property from a container value. Arrays yield the property of the
/// first element that has it.
fn property_value<'a>(container: &'a Value, property: &str) -> Option<&'a Value> {
    match container {
        Value::Array(items) => items
            .iter()
            .find(|item| item.get(property).is_some())?
            .get(property),
        other => other.get(property),
    }
}
