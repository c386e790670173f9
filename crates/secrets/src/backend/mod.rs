//! Secrets backend facade over local files.
//!
//! Responsibilities:
//! - Define the `SecretsBackend` lookup trait shared by backend implementations.
//! - Resolve variables and connections from optionally configured local files.
//!
//! Does NOT handle:
//! - Parsing or validating file contents (see `loader`).
//! - Caching; callers that need it must wrap the backend.
//!
//! Invariants:
//! - An unconfigured file yields "not found" without touching the filesystem.
//! - A configured file that fails to load is always an error, never skipped.
//! - Every lookup re-runs the full resolution pipeline.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

mod config;

pub use config::{BackendConfig, env_var_or_none};

use crate::loader::{SecretsError, Variables, load_connections, load_variables};
use crate::types::Connection;

/// Lookup interface implemented by every secrets backend.
pub trait SecretsBackend {
    /// Return the connection with the given id, or `None` if this backend does not define it.
    fn get_connection(&self, conn_id: &str) -> Result<Option<Connection>, SecretsError>;

    /// Return the variable with the given key, or `None` if this backend does not define it.
    fn get_variable(&self, key: &str) -> Result<Option<String>, SecretsError>;

    /// Return a configuration value. Backends without configuration support return `None`.
    fn get_config(&self, _key: &str) -> Result<Option<String>, SecretsError> {
        Ok(None)
    }
}

/// Render a resolved variable as the string handed to callers.
///
/// Strings are returned verbatim, `null` counts as unset, other values are
/// rendered as compact JSON.
fn variable_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Retrieves connections and variables from local `.env`, JSON and YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalFilesystemBackend {
    variables_file: Option<PathBuf>,
    connections_file: Option<PathBuf>,
}

impl LocalFilesystemBackend {
    /// Create a backend with no files configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file holding variables.
    pub fn with_variables_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.variables_file = Some(path.into());
        self
    }

    /// Set the file holding connections.
    pub fn with_connections_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.connections_file = Some(path.into());
        self
    }

    pub fn variables_file(&self) -> Option<&Path> {
        self.variables_file.as_deref()
    }

    pub fn connections_file(&self) -> Option<&Path> {
        self.connections_file.as_deref()
    }

    /// Resolve every variable from the configured file.
    pub fn variables(&self) -> Result<Variables, SecretsError> {
        match &self.variables_file {
            Some(path) => load_variables(path),
            None => {
                tracing::debug!("The file for variables is not specified. Skipping");
                Ok(Variables::new())
            }
        }
    }

    /// Resolve every connection from the configured file.
    pub fn connections(&self) -> Result<BTreeMap<String, Connection>, SecretsError> {
        match &self.connections_file {
            Some(path) => load_connections(path),
            None => {
                tracing::debug!("The file for connections is not specified. Skipping");
                Ok(BTreeMap::new())
            }
        }
    }
}

impl SecretsBackend for LocalFilesystemBackend {
    fn get_connection(&self, conn_id: &str) -> Result<Option<Connection>, SecretsError> {
        Ok(self.connections()?.remove(conn_id))
    }

    fn get_variable(&self, key: &str) -> Result<Option<String>, SecretsError> {
        Ok(self.variables()?.remove(key).and_then(variable_to_string))
    }
}
