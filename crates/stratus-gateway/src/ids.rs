//! Logical identifier scheme
//!
//! Deterministic derivation of logical identifiers for methods, access keys,
//! endpoint outputs, and authorizers. All functions here are pure; the same
//! inputs always yield the same identifiers, which keeps repeated
//! compilations of one manifest byte-for-byte reproducible.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static TRAILING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+$").unwrap());

/// Normalize an HTTP verb for use in a logical id: first character
/// upper-cased, remainder lower-cased (`"poST"` → `"Post"`).
pub fn normalized_method(method: &str) -> String {
    let mut chars = method.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Extract the trailing digit run of a route-resource logical id
/// (`"ResourceApigEvent5"` → `"5"`).
///
/// The suffix ties a method resource to its route resource. An id without one
/// means the upstream route table broke its contract, so this fails rather
/// than inventing an index.
pub fn trailing_index(logical_id: &str) -> Result<&str> {
    TRAILING_DIGITS
        .find(logical_id)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::MalformedIdentifier {
            logical_id: logical_id.to_string(),
        })
}

/// Logical id for a route-method resource:
/// `"<NormalizedMethod>MethodApigEvent<N>"` where `N` is the trailing index
/// of the route-resource id serving the event's path.
pub fn method_logical_id(method: &str, route_logical_id: &str) -> Result<String> {
    let index = trailing_index(route_logical_id)?;
    Ok(format!("{}MethodApigEvent{}", normalized_method(method), index))
}

/// Logical id for the access-key resource at position `index`
pub fn api_key_logical_id(index: usize) -> String {
    format!("ApiKeyApigEvent{index}")
}

/// Output key for the `counter`-th compiled endpoint (counter starts at 1)
pub fn endpoint_output_key(counter: usize) -> String {
    format!("Endpoint{counter}")
}

/// Logical id of the authorizer resource for a resolved authorizer name
pub fn authorizer_logical_id(name: &str) -> String {
    format!("{name}Authorizer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("POST", "Post")]
    #[case("get", "Get")]
    #[case("poST", "Post")]
    #[case("DELETE", "Delete")]
    fn test_normalized_method(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalized_method(input), expected);
    }

    #[test]
    fn test_normalized_method_empty() {
        assert_eq!(normalized_method(""), "");
    }

    #[test]
    fn test_trailing_index() {
        assert_eq!(trailing_index("ResourceApigEvent5").unwrap(), "5");
        assert_eq!(trailing_index("ResourceApigEvent42").unwrap(), "42");
    }

    #[test]
    fn test_trailing_index_missing_is_malformed() {
        let result = trailing_index("ResourceApigEvent");
        assert!(matches!(result, Err(Error::MalformedIdentifier { .. })));
    }

    #[test]
    fn test_method_logical_id() {
        let id = method_logical_id("POST", "ResourceApigEvent5").unwrap();
        assert_eq!(id, "PostMethodApigEvent5");
    }

    #[test]
    fn test_api_key_logical_id() {
        assert_eq!(api_key_logical_id(0), "ApiKeyApigEvent0");
        assert_eq!(api_key_logical_id(3), "ApiKeyApigEvent3");
    }

    #[test]
    fn test_endpoint_output_key() {
        assert_eq!(endpoint_output_key(1), "Endpoint1");
    }

    #[test]
    fn test_authorizer_logical_id() {
        assert_eq!(authorizer_logical_id("CustomAuth"), "CustomAuthAuthorizer");
    }
}
