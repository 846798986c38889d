//! Stack template accumulator and route table
//!
//! The stack template is the caller-owned sink every event compiler merges
//! into: a keyed map of resource definitions plus a keyed map of outputs.
//! Merging is additive — compilers only add keys, and a key that already
//! exists with a different document is left untouched (the conflict is
//! logged, never silently clobbered).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Accumulated resource and output definitions for one deployment unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackTemplate {
    /// Resource definitions, keyed by logical identifier
    #[serde(rename = "Resources", default)]
    pub resources: IndexMap<String, serde_json::Value>,

    /// Output entries, keyed by output name
    #[serde(rename = "Outputs", default, skip_serializing_if = "IndexMap::is_empty")]
    pub outputs: IndexMap<String, serde_json::Value>,
}

impl StackTemplate {
    /// Create an empty template
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource definition under `logical_id`.
    ///
    /// Returns `true` if the resource was added. An existing identical entry
    /// is a no-op; an existing conflicting entry is kept and the attempt is
    /// logged as a warning.
    pub fn merge_resource(&mut self, logical_id: impl Into<String>, resource: serde_json::Value) -> bool {
        Self::merge_entry(&mut self.resources, logical_id.into(), resource, "resource")
    }

    /// Add an output entry under `name`, with the same conflict rules as
    /// [`merge_resource`](Self::merge_resource).
    pub fn merge_output(&mut self, name: impl Into<String>, output: serde_json::Value) -> bool {
        Self::merge_entry(&mut self.outputs, name.into(), output, "output")
    }

    fn merge_entry(
        map: &mut IndexMap<String, serde_json::Value>,
        key: String,
        value: serde_json::Value,
        kind: &str,
    ) -> bool {
        match map.get(&key) {
            None => {
                map.insert(key, value);
                true
            }
            Some(existing) if *existing == value => true,
            Some(_) => {
                tracing::warn!("{} '{}' already defined with a different document; keeping the existing entry", kind, key);
                false
            }
        }
    }
}

/// Path → route-resource logical identifier mapping.
///
/// The table is supplied by the route-resource stage that runs before the
/// event compilers; it is expected to be complete for every declared path.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: IndexMap<String, String>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the route-resource logical id for a path
    pub fn insert(&mut self, path: impl Into<String>, logical_id: impl Into<String>) {
        self.routes.insert(path.into(), logical_id.into());
    }

    /// Look up the route-resource logical id for a path
    pub fn get(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    /// Number of registered paths
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build a table by numbering paths in first-seen order
    /// (`ResourceApigEvent0`, `ResourceApigEvent1`, ...).
    ///
    /// Stand-in for the route-resource stage; duplicates keep their first
    /// assigned identifier.
    pub fn index_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for path in paths {
            let path = path.into();
            if table.routes.contains_key(&path) {
                continue;
            }
            let logical_id = format!("ResourceApigEvent{}", table.routes.len());
            table.routes.insert(path, logical_id);
        }
        table
    }
}
