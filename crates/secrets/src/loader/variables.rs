//! Variable resolution.
//!
//! Invariants:
//! - Every list-typed value (repeated dotenv keys or a JSON/YAML array) must hold
//!   exactly one element; singleton lists are unwrapped.
//! - Non-list values are returned in their native representation, never stringified.

use std::collections::BTreeMap;
use std::path::Path;

use super::error::SecretsError;
use super::file::load_secret_file;
use crate::parsers::{RawSecretMap, RawValue};

/// Resolved variables keyed by name.
pub type Variables = BTreeMap<String, serde_json::Value>;

pub(crate) fn resolve_variables(path: &Path, secrets: RawSecretMap) -> Result<Variables, SecretsError> {
    let invalid_keys: Vec<String> = secrets
        .iter()
        .filter(|(_, value)| value.list_len().is_some_and(|len| len != 1))
        .map(|(key, _)| key.clone())
        .collect();
    if !invalid_keys.is_empty() {
        return Err(SecretsError::MultipleValues {
            path: path.to_path_buf(),
            keys: invalid_keys,
        });
    }

    let variables = secrets
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                RawValue::Multiple(values) => values.into_iter().next().map(serde_json::Value::String),
                RawValue::Single(serde_json::Value::Array(items)) => items.into_iter().next(),
                RawValue::Single(value) => Some(value),
            };
            value.map(|value| (key, value))
        })
        .collect();
    Ok(variables)
}

/// Load variables from a `.env`, JSON or YAML file.
pub fn load_variables(path: &Path) -> Result<Variables, SecretsError> {
    tracing::debug!(path = %path.display(), "Loading variables from a text file");

    let secrets = load_secret_file(path)?;
    let variables = resolve_variables(path, secrets)?;

    tracing::debug!(count = variables.len(), "Loaded variables");
    Ok(variables)
}
