//! Error types for loading secret files.
//!
//! Responsibilities:
//! - Define error variants for every secret resolution failure.
//! - Render aggregated syntax errors so all problems are visible at once.
//!
//! Does NOT handle:
//! - Connection field validation details (see `types::connection::ConnectionError`).
//!
//! Invariants:
//! - All error variants include the file path or key needed to locate the problem.
//! - Errors NEVER include raw secret values, only keys, ids and line numbers.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::parsers::FileSyntaxError;
use crate::types::ConnectionError;

fn format_parse_errors(errors: &[FileSyntaxError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(idx, error)| format!("\n  Parse error {:3}: {}", idx + 1, error))
        .collect()
}

/// Errors that can occur while resolving variables and connections.
#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("File {} was not found. Check the configuration of your secrets backend.", .path.display())]
    FileNotFound { path: PathBuf },

    #[error(
        "Unsupported file format for {}. The file must have one of the following extensions: {}",
        .path.display(),
        SUPPORTED_EXTENSIONS
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to read secret file at {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more syntax errors; `errors` holds every one, in file order.
    #[error("Failed to load the secret file {}:{}", .path.display(), format_parse_errors(.errors))]
    FileParse {
        path: PathBuf,
        errors: Vec<FileSyntaxError>,
    },

    #[error("The \"{}\" file contains multiple values for keys: {}", .path.display(), .keys.join(", "))]
    MultipleValues { path: PathBuf, keys: Vec<String> },

    #[error("Found multiple values for {conn_id} in {}.", .path.display())]
    DuplicateConnectionId { conn_id: String, path: PathBuf },

    #[error("Invalid connection {conn_id}: {source}")]
    InvalidConnection {
        conn_id: String,
        #[source]
        source: ConnectionError,
    },

    #[error("Invalid backend configuration: {message}")]
    InvalidConfig { message: String },

    /// Failed to parse the `.env` file loaded into the process environment.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl SecretsError {
    /// Syntax errors carried by a `FileParse` failure, empty for other variants.
    pub fn parse_errors(&self) -> &[FileSyntaxError] {
        match self {
            Self::FileParse { errors, .. } => errors,
            _ => &[],
        }
    }
}
