//! Access-key resource builder
//!
//! Compiles the provider-level access-key list into one
//! `AWS::ApiGateway::ApiKey` resource per declared key, bound to the target
//! stage and the shared route collection. Compilation is all-or-nothing: the
//! list shape is validated in full before any resource is produced.

use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::ids;

/// Compile the declared access keys for `stage`.
///
/// Succeeds trivially with an empty vector when no key list is declared.
/// Fails with [`Error::InvalidConfigShape`] when the declaration is not a
/// sequence or any entry is not a literal string.
pub fn compile_api_keys(
    api_keys: Option<&serde_yaml::Value>,
    stage: &str,
) -> Result<Vec<(String, Value)>> {
    let Some(declared) = api_keys else {
        return Ok(Vec::new());
    };

    let entries = declared
        .as_sequence()
        .ok_or_else(|| Error::InvalidConfigShape {
            message: "apiKeys property must be an array".to_string(),
        })?;

    let keys = entries
        .iter()
        .map(|entry| {
            entry.as_str().ok_or_else(|| Error::InvalidConfigShape {
                message: "API keys must be strings".to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(keys
        .into_iter()
        .enumerate()
        .map(|(index, key)| {
            let resource = json!({
                "Type": "AWS::ApiGateway::ApiKey",
                "Properties": {
                    "Enabled": true,
                    "Name": key,
                    "StageKeys": [{
                        "RestApiId": {"Ref": "RestApiApigEvent"},
                        "StageName": stage
                    }]
                }
            });
            (ids::api_key_logical_id(index), resource)
        })
        .collect())
}
