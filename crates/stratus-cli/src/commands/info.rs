//! Show the service's functions and declared endpoints

use anyhow::{Context, Result};
use stratus_core::Service;
use stratus_gateway::HttpEvent;

/// Run the info command
pub fn run(manifest: &str) -> Result<()> {
    let service = Service::load(manifest).context("Failed to load service manifest")?;

    println!("Service: {}", service.service);
    println!("Functions: {}", service.functions.len());

    for (name, function) in &service.functions {
        println!("  {name}");
        for event in &function.events {
            let Some(raw) = &event.http else { continue };
            let http = HttpEvent::from_value(name, raw)?;

            let mut flags = Vec::new();
            if http.private {
                flags.push("private");
            }
            if http.authorizer.is_some() {
                flags.push("authorized");
            }
            let suffix = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };

            println!("    {} {}{}", http.method.to_uppercase(), http.path, suffix);
        }
    }

    Ok(())
}
