/// Convert a human title to a URL-safe kebab-case slug.
/// Example: "Create an Order" -> "create-an-order"
pub fn to_kebab_case(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_dash = true; // suppress a leading dash

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    // Drop a trailing dash left by punctuation at the end
    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Normalize a path template into a displayable route.
/// Ensures a single leading slash, collapses duplicate slashes and strips
/// a trailing slash (the root path stays "/").
pub fn format_route(path: &str) -> String {
    let mut route = String::from("/");

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !route.ends_with('/') {
            route.push('/');
        }
        route.push_str(segment);
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_case_simple() {
        assert_eq!(to_kebab_case("Create an Order"), "create-an-order");
        assert_eq!(to_kebab_case("List Products"), "list-products");
    }

    #[test]
    fn test_to_kebab_case_punctuation() {
        assert_eq!(to_kebab_case("Get a Product's Variants"), "get-a-product-s-variants");
        assert_eq!(to_kebab_case("  Retrieve  Order  "), "retrieve-order");
    }

    #[test]
    fn test_to_kebab_case_already_kebab() {
        assert_eq!(to_kebab_case("create-an-order"), "create-an-order");
    }

    #[test]
    fn test_to_kebab_case_empty() {
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_kebab_case("!!!"), "");
    }

    #[test]
    fn test_format_route_basic() {
        assert_eq!(format_route("/orders/{id}/shipments"), "/orders/{id}/shipments");
    }

    #[test]
    fn test_format_route_missing_leading_slash() {
        assert_eq!(format_route("orders/{id}"), "/orders/{id}");
    }

    #[test]
    fn test_format_route_duplicate_slashes() {
        assert_eq!(format_route("//orders///items/"), "/orders/items");
    }

    #[test]
    fn test_format_route_root() {
        assert_eq!(format_route("/"), "/");
        assert_eq!(format_route(""), "/");
    }
}
