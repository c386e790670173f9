//! Connection resolution.
//!
//! Invariants:
//! - A connection id may be defined at most once; a list-typed value with more
//!   than one element is a `DuplicateConnectionId`.
//! - An empty list defines no connection for that key.
//! - The storage key is always the connection id.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use super::error::SecretsError;
use super::file::load_secret_file;
use crate::parsers::{RawSecretMap, RawValue};
use crate::types::Connection;

fn build(conn_id: &str, value: Value) -> Result<Connection, SecretsError> {
    Connection::from_value(conn_id, value).map_err(|source| SecretsError::InvalidConnection {
        conn_id: conn_id.to_string(),
        source,
    })
}

pub(crate) fn resolve_connections(
    path: &Path,
    secrets: RawSecretMap,
) -> Result<BTreeMap<String, Connection>, SecretsError> {
    let mut connections = BTreeMap::new();

    for (conn_id, value) in secrets {
        let values: Vec<Value> = match value {
            RawValue::Multiple(values) => values.into_iter().map(Value::String).collect(),
            RawValue::Single(Value::Array(items)) => items,
            RawValue::Single(value) => {
                let connection = build(&conn_id, value)?;
                connections.insert(conn_id, connection);
                continue;
            }
        };

        if values.len() > 1 {
            return Err(SecretsError::DuplicateConnectionId {
                conn_id,
                path: path.to_path_buf(),
            });
        }
        if let Some(value) = values.into_iter().next() {
            let connection = build(&conn_id, value)?;
            connections.insert(conn_id, connection);
        }
    }

    Ok(connections)
}

/// Load connections from a `.env`, JSON or YAML file, keyed by connection id.
pub fn load_connections(path: &Path) -> Result<BTreeMap<String, Connection>, SecretsError> {
    tracing::debug!(path = %path.display(), "Loading connections");

    let secrets = load_secret_file(path)?;
    let connections = resolve_connections(path, secrets)?;

    tracing::debug!(count = connections.len(), "Loaded connections");
    Ok(connections)
}
