//! The Snipe-IT API client.
//!
//! [`SnipeClient`] funnels every call through [`SnipeClient::execute`]:
//! the operation's schema validates the arguments and builds the request,
//! the transport performs one round trip, and the body is returned as parsed
//! JSON without further inspection. The per-resource methods live in
//! [`crate::resources`].

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    configuration::ClientConfig,
    error::{Error, Result},
    schema::Operation,
    session::{Session, Transport},
};

/// Client bound to one server and token.
///
/// Every method performs exactly one blocking HTTP request, except the
/// `*_by_name` lookups which list first and then scan the rows.
#[derive(Debug, Clone)]
pub struct SnipeClient<T: Transport = Session> {
    transport: T,
}

impl SnipeClient<Session> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Session::new(&config)?))
    }

    /// Shorthand for a server URL (no trailing slash needed) and an API token.
    pub fn connect(server: &str, token: &str) -> Result<Self> {
        Self::new(ClientConfig::new(server, token)?)
    }
}

impl<T: Transport> SnipeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate `args` against `operation`, send the request and return the
    /// parsed response body.
    ///
    /// `path_arg` fills the `{}` placeholder of the operation path (an id,
    /// serial or tag). Argument names the operation does not declare are
    /// rejected. HTTP status codes are not inspected.
    pub fn execute(
        &self,
        operation: &Operation,
        path_arg: Option<Value>,
        args: Map<String, Value>,
    ) -> Result<Value> {
        let request = operation.build_request(path_arg, args)?;
        let response = self.transport.send(&request)?;

        if !response.is_success() {
            warn!(
                "{} {} returned status {}",
                request.method,
                request.path(),
                response.status
            );
        }

        serde_json::from_str(&response.body).map_err(|e| {
            debug!("Failed to parse response of {}: {}", operation.name, e);
            Error::Json(e)
        })
    }

    /// Run `list` and return the first row whose name property equals `name`.
    ///
    /// The server's search is a substring match, so the rows are scanned
    /// client-side for an exact match.
    pub fn find_by_name<A: Serialize>(
        &self,
        list: &Operation,
        args: &A,
        name: &str,
    ) -> Result<Option<Value>> {
        let response = self.call(list, None, args)?;
        let key = list.resource.name_key();

        let rows = match response {
            Value::Object(mut body) => match body.remove("rows") {
                Some(Value::Array(rows)) => rows,
                _ => return Err(missing_rows(list)),
            },
            _ => return Err(missing_rows(list)),
        };

        Ok(rows
            .into_iter()
            .find(|row| row.get(key).and_then(Value::as_str) == Some(name)))
    }

    /// Serialize typed arguments and run [`SnipeClient::execute`].
    pub(crate) fn call<A: Serialize>(
        &self,
        operation: &Operation,
        path_arg: Option<Value>,
        args: &A,
    ) -> Result<Value> {
        self.execute(operation, path_arg, to_args(args)?)
    }
}

fn missing_rows(list: &Operation) -> Error {
    Error::UnexpectedResponse {
        path: list.resource.to_string(),
        reason: "response has no rows array".to_string(),
    }
}

/// Turn a serializable argument struct into a field map. Unit and `None`
/// become an empty map.
pub(crate) fn to_args<A: Serialize>(args: &A) -> Result<Map<String, Value>> {
    match serde_json::to_value(args)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(Error::InvalidArguments(format!(
            "expected an object, got {}",
            other
        ))),
    }
}
