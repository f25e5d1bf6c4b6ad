//! Client library for the Snipe-IT asset management REST API.
//!
//! A [`SnipeClient`] holds one authenticated session and exposes typed
//! methods for every resource the server manages. Arguments are validated
//! locally before any request is sent, and responses come back as untyped
//! [`serde_json::Value`]s exactly as the server produced them.
//!
//! # Modules
//!
//! - `client`: The client and its generic `execute` entry point
//! - `configuration`: Server URL, token and timeout, from code, env or YAML
//! - `error`: Crate error types
//! - `payload`: Assembly of request payloads from validated arguments
//! - `resources`: Per-resource operations and argument structs
//! - `schema`: Declarative operation descriptions
//! - `session`: HTTP transport
//! - `validation`: Argument kind checks

pub mod client;
pub mod configuration;
pub mod error;
pub mod payload;
pub mod resources;
pub mod schema;
pub mod session;
pub mod validation;

pub use client::SnipeClient;
pub use configuration::{ClientConfig, ConfigurationError};
pub use error::{Error, Result};
pub use schema::{Operation, Resource};
pub use session::{ApiRequest, ApiResponse, HttpMethod, Session, Transport};
pub use validation::{FieldKind, ValidationError};
