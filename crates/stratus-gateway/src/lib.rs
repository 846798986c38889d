//! Stratus Gateway Event Compiler
//!
//! This crate turns the HTTP event declarations of a service manifest into
//! REST-gateway resource definitions: one route-method resource per declared
//! event, one access-key resource per declared key, one human-readable
//! endpoint output per compiled method, and the dependency anchor a later
//! deployment-resource stage hangs its ordering on.
//!
//! # Pipeline Overview
//!
//! ```text
//! ┌──────────┐     ┌───────────┐     ┌───────────┐     ┌──────────┐
//! │ Manifest │────▶│   HTTP    │────▶│  Builders │────▶│  Stack   │
//! │  events  │     │  events   │     │ (fragments)│    │ template │
//! └──────────┘     └───────────┘     └───────────┘     └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use stratus_core::{DeployContext, StackTemplate};
//! use stratus_gateway::GatewayCompiler;
//!
//! let compiler = GatewayCompiler::new(DeployContext::new("dev", "us-east-1"));
//! let mut template = StackTemplate::new();
//! let compilation = compiler.compile(&service, &routes, &mut template)?;
//! println!("first method: {:?}", compilation.method_dependency);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api_keys;
pub mod authorizer;
pub mod compiler;
pub mod error;
pub mod event;
pub mod ids;
pub mod method;
pub mod outputs;
pub mod templates;

pub use authorizer::AuthorizerRef;
pub use compiler::{GatewayCompilation, GatewayCompiler};
pub use error::{Error, Result};
pub use event::HttpEvent;
