//! Stratus Core Library
//!
//! This crate provides the shared building blocks for Stratus:
//! - Service manifest model (functions and their event declarations)
//! - Deployment context (stage and region binding)
//! - Stack template accumulator (resources and outputs)
//! - Route table interface (path → route-resource logical id)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│   Event     │────▶│    Stack    │
//! │   (YAML)    │     │  Compilers  │     │  Template   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use stratus_core::Service;
//!
//! let service = Service::load("./stratus.yaml")?;
//! for (name, function) in &service.functions {
//!     println!("Function: {} ({} events)", name, function.events.len());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod manifest;
pub mod resources;

pub use context::DeployContext;
pub use error::{Error, Result};
pub use manifest::{EventConfig, FunctionConfig, Provider, Service};
pub use resources::{RouteTable, StackTemplate};
