//! Connection descriptor built from secret files.
//!
//! Responsibilities:
//! - Define the `Connection` type and its statically declared constructor parameters.
//! - Build connections from a URI string or a loosely-typed object (see `fields.rs`).
//! - Parse and render connection URIs (see `uri.rs`).
//!
//! Does NOT handle:
//! - Reading or parsing secret files (see `parsers` and `loader`).
//! - Uniqueness of connection ids within a file (see `loader::connections`).
//!
//! Invariants:
//! - `PARAMETER_NAMES` is the single source of truth for accepted object fields.
//! - The password is held as `secrecy::SecretString` and never appears in `Debug` output.
//! - `extra` is stored as JSON text; `extra_dejson()` is the decoded view.

use secrecy::{ExposeSecret, SecretString};

mod error;
mod fields;
mod uri;

pub use error::ConnectionError;

/// A connection to an external system, identified by `conn_id`.
#[derive(Debug, Clone, Default)]
pub struct Connection {
    pub conn_id: String,
    pub conn_type: Option<String>,
    pub description: Option<String>,
    pub host: Option<String>,
    pub login: Option<String>,
    pub password: Option<SecretString>,
    pub schema: Option<String>,
    pub port: Option<u16>,
    /// Extra parameters as JSON text.
    pub extra: Option<String>,
}

impl Connection {
    /// Parameter names accepted when constructing a connection from an object.
    pub const PARAMETER_NAMES: [&'static str; 10] = [
        "conn_id",
        "conn_type",
        "description",
        "host",
        "login",
        "password",
        "schema",
        "port",
        "extra",
        "uri",
    ];

    /// Create an empty connection with only an id.
    pub fn new(conn_id: impl Into<String>) -> Self {
        Self {
            conn_id: conn_id.into(),
            ..Self::default()
        }
    }

    /// Decode `extra` as a JSON object.
    ///
    /// Returns an empty map when `extra` is unset, and logs a warning when it is
    /// not a JSON object.
    pub fn extra_dejson(&self) -> serde_json::Map<String, serde_json::Value> {
        let Some(extra) = self.extra.as_deref().filter(|e| !e.is_empty()) else {
            return serde_json::Map::new();
        };
        match serde_json::from_str::<serde_json::Value>(extra) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(
                    conn_id = %self.conn_id,
                    "Failed parsing the json for conn_id, extra is not a JSON object"
                );
                serde_json::Map::new()
            }
        }
    }

    /// The password with its secret exposed, for handing to a client library.
    pub fn password_str(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret())
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.conn_id == other.conn_id
            && self.conn_type == other.conn_type
            && self.description == other.description
            && self.host == other.host
            && self.login == other.login
            && self.password_str() == other.password_str()
            && self.schema == other.schema
            && self.port == other.port
            && self.extra == other.extra
    }
}

impl Eq for Connection {}
