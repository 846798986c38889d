//! HTTP event interpretation
//!
//! A declared `http` event is accepted in two forms:
//!
//! ```yaml
//! events:
//!   - http: get users/list
//!   - http:
//!       method: POST
//!       path: users/create
//!       private: true
//!       authorizer: myAuth
//! ```
//!
//! Anything else is a fatal [`Error::InvalidEventShape`]: a malformed
//! manifest must not silently produce a partial deployment.

use serde_yaml::Value;
use stratus_core::Service;

use crate::authorizer::AuthorizerRef;
use crate::error::{Error, Result};

/// A normalized HTTP event declaration
#[derive(Debug, Clone)]
pub struct HttpEvent {
    /// Declared HTTP verb, case as supplied
    pub method: String,

    /// Declared path, slash-separated segments without a leading slash
    pub path: String,

    /// Authorizer declaration, if any
    pub authorizer: Option<AuthorizerRef>,

    /// Whether callers must present an access key
    pub private: bool,
}

impl HttpEvent {
    /// Interpret the raw `http` value of an event declared on `function`.
    pub fn from_value(function: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Mapping(_) => {
                let method = value.get("method").and_then(Value::as_str);
                let path = value.get("path").and_then(Value::as_str);
                let (Some(method), Some(path)) = (method, path) else {
                    return Err(Error::InvalidEventShape {
                        function: function.to_string(),
                    });
                };

                Ok(Self {
                    method: method.to_string(),
                    path: path.to_string(),
                    authorizer: value.get("authorizer").and_then(AuthorizerRef::from_value),
                    private: value.get("private").and_then(Value::as_bool).unwrap_or(false),
                })
            }
            Value::String(shorthand) => {
                let mut parts = shorthand.split_whitespace();
                let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
                    return Err(Error::InvalidEventShape {
                        function: function.to_string(),
                    });
                };

                Ok(Self {
                    method: method.to_string(),
                    path: path.to_string(),
                    authorizer: None,
                    private: false,
                })
            }
            _ => Err(Error::InvalidEventShape {
                function: function.to_string(),
            }),
        }
    }
}

/// Collect the paths of every declared HTTP event, in declaration order.
///
/// Used to feed the stand-in route table; fails on the first malformed event,
/// exactly like compilation would.
pub fn declared_http_paths(service: &Service) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for (function_name, function) in &service.functions {
        for event in &function.events {
            if let Some(raw) = &event.http {
                paths.push(HttpEvent::from_value(function_name, raw)?.path);
            }
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(input: &str) -> Value {
        serde_yaml::from_str(input).unwrap()
    }

    #[test]
    fn test_object_form() {
        let event = HttpEvent::from_value(
            "first",
            &yaml("method: POST\npath: users/create\nprivate: true"),
        )
        .unwrap();
        assert_eq!(event.method, "POST");
        assert_eq!(event.path, "users/create");
        assert!(event.private);
        assert!(event.authorizer.is_none());
    }

    #[test]
    fn test_object_form_with_authorizer() {
        let event =
            HttpEvent::from_value("first", &yaml("method: GET\npath: users\nauthorizer: myAuth"))
                .unwrap();
        assert_eq!(
            event.authorizer,
            Some(AuthorizerRef::Name("myAuth".to_string()))
        );
        assert!(!event.private);
    }

    #[test]
    fn test_string_form() {
        let event = HttpEvent::from_value("first", &yaml("get users/list")).unwrap();
        assert_eq!(event.method, "get");
        assert_eq!(event.path, "users/list");
        assert!(!event.private);
        assert!(event.authorizer.is_none());
    }

    #[test]
    fn test_string_form_without_path_is_invalid() {
        let result = HttpEvent::from_value("first", &yaml("\"get\""));
        assert!(matches!(result, Err(Error::InvalidEventShape { .. })));
    }

    #[test]
    fn test_number_is_invalid() {
        let result = HttpEvent::from_value("first", &yaml("42"));
        assert!(matches!(
            result,
            Err(Error::InvalidEventShape { ref function }) if function == "first"
        ));
    }

    #[test]
    fn test_mapping_without_method_is_invalid() {
        let result = HttpEvent::from_value("first", &yaml("path: users/create"));
        assert!(matches!(result, Err(Error::InvalidEventShape { .. })));
    }

    #[test]
    fn test_declared_http_paths_in_order() {
        let service = Service::from_yaml(
            r#"
service: ordered
functions:
  first:
    events:
      - http: "POST users/create"
      - schedule: rate(5 minutes)
  second:
    events:
      - http:
          method: GET
          path: users/list
"#,
        )
        .unwrap();

        let paths = declared_http_paths(&service).unwrap();
        assert_eq!(paths, vec!["users/create", "users/list"]);
    }
}
