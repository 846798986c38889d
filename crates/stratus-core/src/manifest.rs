//! Service manifest model
//!
//! This module holds the typed view of a `stratus.yaml` service manifest:
//! the service name, provider-level settings, and the functions with their
//! event declarations.
//!
//! Event bodies and the provider access-key list are deliberately kept as raw
//! [`serde_yaml::Value`]s: their accepted shapes are polymorphic, and shape
//! validation belongs to the event compilers so that a malformed declaration
//! fails the compilation pass with a compiler error instead of a parse error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// A parsed service manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Service name (must be unique within a deployment account)
    pub service: String,

    /// Provider-level settings
    #[serde(default)]
    pub provider: Provider,

    /// Functions in declaration order.
    ///
    /// Order matters: derived logical identifiers and endpoint numbering
    /// follow the order functions and events appear in the manifest.
    #[serde(default)]
    pub functions: IndexMap<String, FunctionConfig>,
}

/// Provider-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provider {
    /// Provider name (e.g. `aws`)
    #[serde(default)]
    pub name: String,

    /// Declared access keys.
    ///
    /// Kept raw; the gateway compiler validates that this is a sequence of
    /// strings and rejects anything else.
    #[serde(rename = "apiKeys", default, skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<serde_yaml::Value>,
}

/// A single function declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// Handler reference within the deployment artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    /// Declared events, in declaration order
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

/// One event declaration attached to a function.
///
/// Only HTTP events are compiled by the gateway compiler; other event kinds
/// are tolerated here and ignored by it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventConfig {
    /// Raw HTTP event body: either a `{method, path, ...}` mapping or a
    /// `"METHOD path"` shorthand string. Interpreted by the gateway compiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<serde_yaml::Value>,

    /// Event kinds handled by other compilers
    #[serde(flatten)]
    pub other: IndexMap<String, serde_yaml::Value>,
}

impl Service {
    /// Load a service manifest from a directory or an explicit file path.
    ///
    /// A directory is expected to contain `stratus.yaml`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let manifest_path = if path.is_dir() {
            path.join("stratus.yaml")
        } else {
            path.to_path_buf()
        };

        if !manifest_path.exists() {
            return Err(Error::ManifestNotFound {
                path: manifest_path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&manifest_path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a service manifest from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let service: Service = serde_yaml::from_str(yaml)?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = r#"
service: first-service
"#;
        let service = Service::from_yaml(yaml).unwrap();
        assert_eq!(service.service, "first-service");
        assert!(service.functions.is_empty());
        assert!(service.provider.api_keys.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
service: first-service
provider:
  name: aws
  apiKeys:
    - "1234567890"
functions:
  first:
    handler: handler.create
    events:
      - http:
          path: users/create
          method: POST
          private: true
      - http: "GET users/list"
"#;
        let service = Service::from_yaml(yaml).unwrap();
        assert_eq!(service.provider.name, "aws");
        assert!(service.provider.api_keys.is_some());

        let first = &service.functions["first"];
        assert_eq!(first.handler.as_deref(), Some("handler.create"));
        assert_eq!(first.events.len(), 2);
        assert!(first.events[0].http.as_ref().unwrap().is_mapping());
        assert!(first.events[1].http.as_ref().unwrap().is_string());
    }

    #[test]
    fn test_function_order_is_preserved() {
        let yaml = r#"
service: ordered
functions:
  zeta:
    events: []
  alpha:
    events: []
  mike:
    events: []
"#;
        let service = Service::from_yaml(yaml).unwrap();
        let names: Vec<_> = service.functions.keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mike"]);
    }

    #[test]
    fn test_non_http_events_are_tolerated() {
        let yaml = r#"
service: mixed
functions:
  worker:
    events:
      - schedule: rate(5 minutes)
      - http: "POST jobs/enqueue"
"#;
        let service = Service::from_yaml(yaml).unwrap();
        let events = &service.functions["worker"].events;
        assert!(events[0].http.is_none());
        assert!(events[0].other.contains_key("schedule"));
        assert!(events[1].http.is_some());
    }

    #[test]
    fn test_malformed_http_event_parses_as_raw_value() {
        // Shape validation happens at compile time, not parse time.
        let yaml = r#"
service: broken
functions:
  first:
    events:
      - http: 42
"#;
        let service = Service::from_yaml(yaml).unwrap();
        let raw = service.functions["first"].events[0].http.as_ref().unwrap();
        assert!(raw.is_number());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stratus.yaml"),
            "service: from-dir\nfunctions: {}\n",
        )
        .unwrap();

        let service = Service::load(dir.path()).unwrap();
        assert_eq!(service.service, "from-dir");
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = Service::load(dir.path());
        assert!(matches!(result, Err(Error::ManifestNotFound { .. })));
    }
}
