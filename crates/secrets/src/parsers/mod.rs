//! Format parsers for secret files.
//!
//! Responsibilities:
//! - Define the raw parse model (`RawValue`, `RawSecretMap`, `FileSyntaxError`).
//! - Map each supported file format to its pure parse function.
//!
//! Does NOT handle:
//! - Reading files from disk or choosing a format from a path (see `loader::file`).
//! - Uniqueness rules for variables or connections (see `loader`).
//!
//! Invariants:
//! - Parsers never fail; every problem is reported as a `FileSyntaxError`.
//! - Dotenv values are always `RawValue::Multiple`, JSON/YAML values always `RawValue::Single`.
//! - JSON and YAML results are all-or-nothing: any error yields an empty map.

use std::collections::BTreeMap;
use std::fmt;

mod dotenv;
mod json;
mod yaml;

pub use dotenv::parse_env;
pub use json::parse_json;
pub use yaml::parse_yaml;

/// A raw value as read from a secret file, before any uniqueness checks.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A single structured value from a JSON or YAML document.
    Single(serde_json::Value),
    /// Every value seen for a dotenv key, in encounter order.
    Multiple(Vec<String>),
}

impl RawValue {
    /// Number of values when list-typed, `None` otherwise.
    ///
    /// A JSON/YAML array counts as a list just like repeated dotenv keys.
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Self::Multiple(values) => Some(values.len()),
            Self::Single(serde_json::Value::Array(items)) => Some(items.len()),
            Self::Single(_) => None,
        }
    }
}

/// Mapping from secret key to its raw value.
pub type RawSecretMap = BTreeMap<String, RawValue>;

/// A structural problem found while parsing a secret file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSyntaxError {
    /// 1-based line number, `None` when the parser could not locate the problem.
    pub line_no: Option<usize>,
    pub message: String,
}

impl FileSyntaxError {
    pub fn new(line_no: usize, message: impl Into<String>) -> Self {
        Self {
            line_no: Some(line_no),
            message: message.into(),
        }
    }

    pub fn without_line(message: impl Into<String>) -> Self {
        Self {
            line_no: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for FileSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_no {
            Some(line_no) => write!(f, "line {}: {}", line_no, self.message),
            None => write!(f, "line -1: {}", self.message),
        }
    }
}

/// Result of parsing one file: the secrets found plus every syntax error.
pub type ParseOutcome = (RawSecretMap, Vec<FileSyntaxError>);

/// Supported secret file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Env,
    Json,
    Yaml,
}

impl FileFormat {
    /// Resolve a lowercase extension tag (`env`, `json`, `yaml`, `yml`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "env" => Some(Self::Env),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// The parse function for this format.
    pub fn parser(self) -> fn(&str) -> ParseOutcome {
        match self {
            Self::Env => parse_env,
            Self::Json => parse_json,
            Self::Yaml => parse_yaml,
        }
    }

    pub fn parse(self, content: &str) -> ParseOutcome {
        (self.parser())(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileFormat::from_extension("env"), Some(FileFormat::Env));
        assert_eq!(FileFormat::from_extension("json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("yaml"), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_extension("yml"), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_extension("toml"), None);
        assert_eq!(FileFormat::from_extension("JSON"), None);
    }

    #[test]
    fn test_list_len() {
        assert_eq!(RawValue::Multiple(vec!["a".into()]).list_len(), Some(1));
        assert_eq!(
            RawValue::Single(serde_json::json!(["a", "b"])).list_len(),
            Some(2)
        );
        assert_eq!(RawValue::Single(serde_json::json!("a")).list_len(), None);
        assert_eq!(RawValue::Single(serde_json::json!({"a": 1})).list_len(), None);
    }

    #[test]
    fn test_syntax_error_display() {
        assert_eq!(
            FileSyntaxError::new(3, "bad").to_string(),
            "line 3: bad".to_string()
        );
        assert_eq!(
            FileSyntaxError::without_line("bad").to_string(),
            "line -1: bad".to_string()
        );
    }
}
