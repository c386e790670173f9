//! Secret file dispatch.
//!
//! Responsibilities:
//! - Pick a parser from the file extension and run it on the whole file.
//! - Turn any syntax errors into one aggregated `SecretsError::FileParse`.
//!
//! Does NOT handle:
//! - Per-format parsing (see `parsers`).
//! - Uniqueness rules for variables or connections (see `variables.rs`, `connections.rs`).
//!
//! Invariants:
//! - The format tag is the text after the last `.` of the full path, lowercased,
//!   so dotfiles such as `.env` are recognized.
//! - The file is read exactly once per call.

use std::path::Path;

use super::error::SecretsError;
use crate::parsers::{FileFormat, RawSecretMap};

/// Determine the file format from a path.
pub(crate) fn detect_format(path: &Path) -> Option<FileFormat> {
    let path_str = path.to_string_lossy();
    let ext = path_str.rsplit('.').next().unwrap_or_default().to_lowercase();
    FileFormat::from_extension(&ext)
}

/// Parse a secret file, selecting the parser from its extension.
///
/// # Errors
///
/// - `SecretsError::FileNotFound` if the path does not exist.
/// - `SecretsError::UnsupportedFormat` if the extension is not `env`, `json`, `yaml` or `yml`.
/// - `SecretsError::FileRead` if the file cannot be read as UTF-8 text.
/// - `SecretsError::FileParse` with every syntax error if the content is malformed.
pub fn load_secret_file(path: &Path) -> Result<RawSecretMap, SecretsError> {
    if !path.exists() {
        return Err(SecretsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), "Parsing secret file");

    let format = detect_format(path).ok_or_else(|| SecretsError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| SecretsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let (secrets, errors) = format.parse(&content);

    tracing::debug!(
        path = %path.display(),
        parse_errors = errors.len(),
        secrets = secrets.len(),
        "Parsed secret file"
    );

    if !errors.is_empty() {
        return Err(SecretsError::FileParse {
            path: path.to_path_buf(),
            errors,
        });
    }

    Ok(secrets)
}
