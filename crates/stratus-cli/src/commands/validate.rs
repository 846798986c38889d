//! Validate the manifest command

use anyhow::{Context, Result};
use stratus_core::{DeployContext, RouteTable, Service, StackTemplate};
use stratus_gateway::GatewayCompiler;
use stratus_gateway::event::declared_http_paths;

/// Run the validate command.
///
/// Compiles against a throwaway template so every shape error the compiler
/// can raise is surfaced, without emitting anything.
pub fn run(manifest: &str, stage: &str, region: &str) -> Result<()> {
    tracing::info!("Validating service manifest: {}", manifest);

    let service = Service::load(manifest).context("Failed to load service manifest")?;
    let routes = RouteTable::index_paths(declared_http_paths(&service)?);

    let mut template = StackTemplate::new();
    let compilation = GatewayCompiler::new(DeployContext::new(stage, region))
        .compile(&service, &routes, &mut template)
        .context("Manifest did not compile")?;

    tracing::info!("✓ Service: {}", service.service);
    tracing::info!("✓ Functions: {}", service.functions.len());
    tracing::info!("✓ Endpoints: {}", compilation.endpoints);
    tracing::info!("✓ Manifest is valid");
    Ok(())
}
