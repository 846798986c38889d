//! Active deployment context

use serde::{Deserialize, Serialize};

/// The stage/region binding a compilation pass targets.
///
/// Threaded explicitly through every compiler so that passes for different
/// stages can run side by side without shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployContext {
    /// Stage name (e.g. `dev`, `prod`)
    pub stage: String,

    /// Region identifier (e.g. `us-east-1`)
    pub region: String,
}

impl DeployContext {
    /// Create a deployment context for the given stage and region
    pub fn new(stage: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            region: region.into(),
        }
    }
}

impl Default for DeployContext {
    fn default() -> Self {
        Self::new("dev", "us-east-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = DeployContext::default();
        assert_eq!(ctx.stage, "dev");
        assert_eq!(ctx.region, "us-east-1");
    }
}
