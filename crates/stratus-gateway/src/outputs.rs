//! Endpoint output builder
//!
//! Records one human-readable output per compiled method so the post-deploy
//! display can list every endpoint. Output keys carry a counter shared across
//! the whole compilation pass, starting at 1 — it is never reset per
//! function.

use serde_json::{Value, json};
use stratus_core::DeployContext;

use crate::event::HttpEvent;
use crate::ids;

/// Build the `counter`-th endpoint output for a compiled method.
pub fn endpoint_output(event: &HttpEvent, context: &DeployContext, counter: usize) -> (String, Value) {
    let output = json!({
        "Description": "Endpoint info",
        "Value": {
            "Fn::Join": ["", [
                format!("{} - https://", event.method.to_uppercase()),
                {"Ref": "RestApiApigEvent"},
                format!(
                    ".execute-api.{}.amazonaws.com/{}/{}",
                    context.region, context.stage, event.path
                )
            ]]
        }
    });

    (ids::endpoint_output_key(counter), output)
}
