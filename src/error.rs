use thiserror::Error;

use crate::{configuration::ConfigurationError, validation::ValidationError};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`SnipeClient`](crate::SnipeClient) operations.
///
/// The client never branches on HTTP status codes. A non-2xx response that
/// carries a JSON body is handed back to the caller like any other response;
/// only transport failures and unparseable bodies surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument failed its kind, enumeration or date check. Raised before
    /// any request is sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Connection, TLS or protocol failure reported by the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body was not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// Typed arguments did not serialize to a JSON object
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// A listing response did not have the expected `rows` array
    #[error("unexpected response from {path}: {reason}")]
    UnexpectedResponse { path: String, reason: String },
    /// The server URL could not be combined with a request path
    #[error("invalid server URL {url:?}")]
    InvalidUrl { url: String },
    /// The server URL or token could not be loaded or was rejected
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}
