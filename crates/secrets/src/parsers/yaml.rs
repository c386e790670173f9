//! YAML secret file parser.
//!
//! The top-level mapping is converted to `serde_json::Value` so that JSON and YAML
//! files flow through the same resolvers. A mapping that repeats a key is a
//! syntax error rather than last-value-wins.

use super::{FileSyntaxError, ParseOutcome, RawSecretMap, RawValue};
use crate::constants::{MSG_FILE_EMPTY, MSG_NOT_AN_OBJECT};

fn syntax_error(err: &serde_yaml::Error) -> FileSyntaxError {
    let message = err.to_string();
    match err.location() {
        Some(location) => {
            let suffix = format!(" at line {} column {}", location.line(), location.column());
            let message = message
                .strip_suffix(&suffix)
                .map(str::to_string)
                .unwrap_or(message);
            FileSyntaxError::new(location.line(), message)
        }
        None => FileSyntaxError::without_line(message),
    }
}

fn key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a YAML document whose top level must be a mapping.
pub fn parse_yaml(content: &str) -> ParseOutcome {
    if content.is_empty() {
        return (
            RawSecretMap::new(),
            vec![FileSyntaxError::new(1, MSG_FILE_EMPTY)],
        );
    }

    let document: serde_yaml::Value = match serde_yaml::from_str(content) {
        Ok(document) => document,
        Err(e) => return (RawSecretMap::new(), vec![syntax_error(&e)]),
    };

    let serde_yaml::Value::Mapping(mapping) = document else {
        return (
            RawSecretMap::new(),
            vec![FileSyntaxError::new(1, MSG_NOT_AN_OBJECT)],
        );
    };

    let mut secrets = RawSecretMap::new();
    for (key, value) in &mapping {
        let Some(key) = key_to_string(key) else {
            return (
                RawSecretMap::new(),
                vec![FileSyntaxError::without_line(format!(
                    "Unsupported key type: {:?}. Keys must be scalar values.",
                    key
                ))],
            );
        };
        match serde_json::to_value(value) {
            Ok(value) => {
                secrets.insert(key, RawValue::Single(value));
            }
            Err(e) => {
                return (
                    RawSecretMap::new(),
                    vec![FileSyntaxError::without_line(format!(
                        "Unsupported value for key {key}: {e}"
                    ))],
                );
            }
        }
    }

    (secrets, Vec::new())
}
