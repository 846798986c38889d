//! Compile the manifest into a stack template

use anyhow::{Context, Result};
use stratus_core::{DeployContext, RouteTable, Service, StackTemplate};
use stratus_gateway::GatewayCompiler;
use stratus_gateway::event::declared_http_paths;

/// Run the compile command
pub fn run(manifest: &str, stage: &str, region: &str, output: Option<&str>) -> Result<()> {
    tracing::info!("Loading service manifest from {}", manifest);

    let service = Service::load(manifest).context("Failed to load service manifest")?;

    let routes = RouteTable::index_paths(declared_http_paths(&service)?);
    let compiler = GatewayCompiler::new(DeployContext::new(stage, region));

    let mut template = StackTemplate::new();
    let compilation = compiler
        .compile(&service, &routes, &mut template)
        .context("Compilation failed")?;

    tracing::info!(
        "✓ {} ({} endpoint(s), {} resource(s))",
        service.service,
        compilation.endpoints,
        template.resources.len()
    );
    if let Some(anchor) = &compilation.method_dependency {
        tracing::debug!("deployment depends on {}", anchor);
    }

    let rendered = serde_json::to_string_pretty(&template)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered).context("Failed to write template")?;
            tracing::info!("Template written to {}", path);
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
