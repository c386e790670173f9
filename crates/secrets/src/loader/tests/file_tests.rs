//! Tests for secret file dispatch.
//!
//! Responsibilities:
//! - Test missing files and unsupported extensions.
//! - Test that every syntax error reaches the caller.

use tempfile::TempDir;

use super::write_secret_file;
use crate::constants::{MSG_EMPTY_VALUE, MSG_FILE_EMPTY, MSG_MISSING_EQUAL_SIGN};
use crate::loader::{SecretsError, load_secret_file};
use crate::parsers::{FileSyntaxError, RawValue};

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.env");

    let result = load_secret_file(&path);
    assert!(
        matches!(result, Err(SecretsError::FileNotFound { ref path }) if path.ends_with("missing.env")),
        "Expected FileNotFound, got {:?}",
        result
    );
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_secret_file(temp_dir.path(), "secrets.toml", "A = 1");

    let result = load_secret_file(&path);
    assert!(matches!(result, Err(SecretsError::UnsupportedFormat { .. })));
    let message = result.unwrap_err().to_string();
    assert!(message.contains(".env .json .yaml .yml"), "{message}");
}

#[test]
fn test_dotfile_env_is_supported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_secret_file(temp_dir.path(), ".env", "A=1\n");

    let secrets = load_secret_file(&path).unwrap();
    assert_eq!(secrets.get("A"), Some(&RawValue::Multiple(vec!["1".to_string()])));
}

#[test]
fn test_uppercase_extension_is_supported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_secret_file(temp_dir.path(), "SECRETS.JSON", r#"{"A": "1"}"#);

    let secrets = load_secret_file(&path).unwrap();
    assert_eq!(secrets.len(), 1);
}

#[test]
fn test_all_dotenv_errors_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_secret_file(
        temp_dir.path(),
        "broken.env",
        "GOOD=1\nNO_EQUALS\nEMPTY=\n# comment\nALSO_BROKEN\n",
    );

    let err = load_secret_file(&path).unwrap_err();
    match &err {
        SecretsError::FileParse { path: err_path, errors } => {
            assert_eq!(err_path, &path);
            assert_eq!(
                errors,
                &vec![
                    FileSyntaxError::new(2, MSG_MISSING_EQUAL_SIGN),
                    FileSyntaxError::new(3, MSG_EMPTY_VALUE),
                    FileSyntaxError::new(5, MSG_MISSING_EQUAL_SIGN),
                ]
            );
        }
        other => panic!("Expected FileParse, got {:?}", other),
    }
    assert_eq!(err.parse_errors().len(), 3);
}

#[test]
fn test_empty_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_secret_file(temp_dir.path(), "empty.json", "");

    let err = load_secret_file(&path).unwrap_err();
    assert_eq!(err.parse_errors(), &[FileSyntaxError::new(1, MSG_FILE_EMPTY)]);
}

#[test]
fn test_malformed_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_secret_file(temp_dir.path(), "broken.yaml", "A: 1\nB: [oops\n");

    let err = load_secret_file(&path).unwrap_err();
    assert_eq!(err.parse_errors().len(), 1);
}
