//! Backend configuration from backend kwargs and environment variables.
//!
//! Responsibilities:
//! - Deserialize backend kwargs (`variables_file_path`, `connections_file_path`).
//! - Read the same settings from environment variables.
//! - Optionally load a `.env` file into the process environment first.
//!
//! Does NOT handle:
//! - Reading secret files (see `loader`).
//!
//! Invariants / Assumptions:
//! - Individual file variables take precedence over `LOCAL_SECRETS_BACKEND_KWARGS`.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use serde::Deserialize;

use super::LocalFilesystemBackend;
use crate::constants::{
    ENV_BACKEND_KWARGS, ENV_CONNECTIONS_FILE, ENV_DOTENV_DISABLED, ENV_VARIABLES_FILE,
};
use crate::loader::SecretsError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Settings for [`LocalFilesystemBackend`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// File location with variables data.
    #[serde(default)]
    pub variables_file_path: Option<PathBuf>,
    /// File location with connection data.
    #[serde(default)]
    pub connections_file_path: Option<PathBuf>,
}

impl BackendConfig {
    /// Parse backend kwargs given as a JSON object.
    pub fn from_kwargs_json(kwargs: &str) -> Result<Self, SecretsError> {
        let invalid = |detail: String| SecretsError::InvalidConfig {
            message: format!("backend kwargs must be a JSON object: {detail}"),
        };

        // The derived Deserialize also accepts a positional sequence.
        match serde_json::from_str::<serde_json::Value>(kwargs) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
            }
            Ok(_) => Err(invalid("got a non-object value".to_string())),
            Err(e) => Err(invalid(e.to_string())),
        }
    }

    /// Build the configuration from environment variables.
    ///
    /// `LOCAL_SECRETS_BACKEND_KWARGS` is applied first, then
    /// `LOCAL_SECRETS_VARIABLES_FILE` and `LOCAL_SECRETS_CONNECTIONS_FILE` override it.
    pub fn from_env() -> Result<Self, SecretsError> {
        let mut config = match env_var_or_none(ENV_BACKEND_KWARGS) {
            Some(kwargs) => Self::from_kwargs_json(&kwargs)?,
            None => Self::default(),
        };
        if let Some(path) = env_var_or_none(ENV_VARIABLES_FILE) {
            config.variables_file_path = Some(PathBuf::from(path));
        }
        if let Some(path) = env_var_or_none(ENV_CONNECTIONS_FILE) {
            config.connections_file_path = Some(PathBuf::from(path));
        }
        Ok(config)
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file in the working directory, if present.
    ///
    /// Skipped when `DOTENV_DISABLED` is `1` or `true`. Missing `.env` files are
    /// silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv() -> Result<(), SecretsError> {
        if Self::dotenv_disabled() {
            return Ok(());
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(())
            }
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(())
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(SecretsError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(SecretsError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(SecretsError::DotenvUnknown),
        }
    }

    /// Create the backend described by this configuration.
    pub fn into_backend(self) -> LocalFilesystemBackend {
        let mut backend = LocalFilesystemBackend::new();
        if let Some(path) = self.variables_file_path {
            backend = backend.with_variables_file(path);
        }
        if let Some(path) = self.connections_file_path {
            backend = backend.with_connections_file(path);
        }
        backend
    }
}
