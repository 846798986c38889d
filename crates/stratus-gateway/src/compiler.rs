//! Gateway event compiler
//!
//! The orchestrator walks every function's declared events in manifest order,
//! invokes the method, access-key, and output builders, and merges their
//! fragments into the caller-owned stack template. Declaration order is a
//! correctness requirement: identifier suffixes and the endpoint counter are
//! order-dependent, and repeated compilations of the same manifest must be
//! reproducible byte for byte.

use stratus_core::{DeployContext, RouteTable, Service, StackTemplate};

use crate::api_keys::compile_api_keys;
use crate::error::{Error, Result};
use crate::event::HttpEvent;
use crate::method::build_method;
use crate::outputs::endpoint_output;

/// Compiles a service's HTTP events into gateway resource definitions
#[derive(Debug, Clone)]
pub struct GatewayCompiler {
    context: DeployContext,
}

/// Pass-scoped results handed to the next pipeline stage
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayCompilation {
    /// Logical id of the first compiled method.
    ///
    /// A later deployment-resource stage depends on it to express that the
    /// route collection is not final until at least one method exists. `None`
    /// when the service declares no HTTP events.
    pub method_dependency: Option<String>,

    /// Number of endpoint outputs recorded
    pub endpoints: usize,
}

impl GatewayCompiler {
    /// Create a compiler for the given deployment context
    pub fn new(context: DeployContext) -> Self {
        Self { context }
    }

    /// Compile every HTTP event of `service` into `template`.
    ///
    /// Merging is incremental per declaration: on error, resources already
    /// merged for prior valid declarations remain in the template, but no
    /// partial fragment of the failing unit is emitted. The caller is
    /// expected to discard the template when compilation fails.
    pub fn compile(
        &self,
        service: &Service,
        routes: &RouteTable,
        template: &mut StackTemplate,
    ) -> Result<GatewayCompilation> {
        tracing::info!(
            "Compiling gateway events for service '{}' (stage {}, region {})",
            service.service,
            self.context.stage,
            self.context.region
        );

        let mut endpoint_counter = 0usize;
        let mut method_dependency: Option<String> = None;

        for (function_name, function) in &service.functions {
            for event in &function.events {
                let Some(raw) = &event.http else { continue };

                let http = HttpEvent::from_value(function_name, raw)?;
                let route_logical_id =
                    routes
                        .get(&http.path)
                        .ok_or_else(|| Error::MissingRouteResource {
                            path: http.path.clone(),
                        })?;

                let (logical_id, resource) = build_method(function_name, &http, route_logical_id)?;
                tracing::debug!("compiled {} {} as {}", http.method, http.path, logical_id);
                template.merge_resource(logical_id.clone(), resource);

                endpoint_counter += 1;
                let (output_key, output) = endpoint_output(&http, &self.context, endpoint_counter);
                template.merge_output(output_key, output);

                if method_dependency.is_none() {
                    method_dependency = Some(logical_id);
                }
            }
        }

        for (logical_id, resource) in
            compile_api_keys(service.provider.api_keys.as_ref(), &self.context.stage)?
        {
            template.merge_resource(logical_id, resource);
        }

        tracing::info!("Compiled {} endpoint(s)", endpoint_counter);

        Ok(GatewayCompilation {
            method_dependency,
            endpoints: endpoint_counter,
        })
    }
}
