//! Authorizer reference resolution
//!
//! An event may declare its authorizer three ways: a plain name, a qualified
//! backend-function reference (a cloud ARN), or a mapping carrying `arn`
//! and/or `name` fields. All three normalize to a single authorizer name,
//! from which the authorizer's logical id is derived.

use serde_yaml::Value;

/// The accepted shapes of an authorizer declaration
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizerRef {
    /// A plain authorizer name (`authorizer: myAuth`)
    Name(String),

    /// A qualified backend-function reference
    /// (`authorizer: arn:aws:lambda:...:function:service-dev-CustomAuth`)
    QualifiedReference(String),

    /// The mapping form (`authorizer: {arn: ..., name: ...}`)
    ObjectRef {
        /// Qualified reference, takes precedence over `name` when usable
        arn: Option<String>,
        /// Verbatim authorizer name
        name: Option<String>,
    },
}

impl AuthorizerRef {
    /// Classify a raw declaration value.
    ///
    /// Returns `None` for values that are not one of the accepted shapes;
    /// the caller treats those as "no authorizer".
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if s.contains(':') => Some(Self::QualifiedReference(s.clone())),
            Value::String(s) => Some(Self::Name(s.clone())),
            Value::Mapping(_) => Some(Self::ObjectRef {
                arn: value.get("arn").and_then(Value::as_str).map(str::to_string),
                name: value.get("name").and_then(Value::as_str).map(str::to_string),
            }),
            _ => None,
        }
    }

    /// Resolve the declaration to the authorizer name.
    ///
    /// A mapping with neither a usable `arn` nor a `name` resolves to `None`:
    /// the method compiles unauthenticated. A typo'd declaration therefore
    /// deploys an open endpoint — kept as-is pending product confirmation,
    /// surfaced via a warning at the call site.
    pub fn resolve_name(&self) -> Option<String> {
        match self {
            Self::Name(name) => Some(name.clone()),
            Self::QualifiedReference(reference) => Some(name_from_reference(reference)),
            Self::ObjectRef { arn: Some(arn), .. } if !arn.is_empty() => {
                Some(name_from_reference(arn))
            }
            Self::ObjectRef { name: Some(name), .. } => Some(name.clone()),
            Self::ObjectRef { .. } => None,
        }
    }
}

/// Extract the authorizer name from a qualified reference: the last
/// `:`-delimited segment, then the last `-`-delimited segment of that.
///
/// Assumes the `<service>-<stage>-<LogicalName>` convention. Known
/// limitation: a logical name that itself contains hyphens loses everything
/// before its final hyphen.
pub fn name_from_reference(reference: &str) -> String {
    let last_segment = reference.rsplit(':').next().unwrap_or(reference);
    last_segment
        .rsplit('-')
        .next()
        .unwrap_or(last_segment)
        .to_string()
}
