//! Error types for the gateway event compiler

use thiserror::Error;

/// Result type for gateway compilation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling gateway events.
///
/// All variants are fatal for the compilation pass: a partially compiled
/// gateway must never reach the deployment engine.
#[derive(Error, Debug)]
pub enum Error {
    /// An HTTP event is neither the object form nor the shorthand string form
    #[error(
        "HTTP event of function '{function}' is not an object nor a string; \
         use `http: get users/list` or an object with `path` and `method` properties"
    )]
    InvalidEventShape {
        /// Function the event is declared on
        function: String,
    },

    /// Provider-level configuration has an invalid shape
    #[error("invalid provider configuration: {message}")]
    InvalidConfigShape {
        /// Description of what's invalid
        message: String,
    },

    /// A route-resource logical id carries no trailing numeric suffix
    #[error("route resource id '{logical_id}' has no trailing index; the route table is inconsistent")]
    MalformedIdentifier {
        /// The offending logical id
        logical_id: String,
    },

    /// The route table has no entry for a declared path
    #[error("no route resource registered for path '{path}'")]
    MissingRouteResource {
        /// The declared path
        path: String,
    },
}
