//! Centralized constants for the local secrets backend.
//!
//! This module contains the file format tags, message texts, and environment
//! variable names shared across modules.

// =============================================================================
// File Formats
// =============================================================================

/// Extensions accepted by the file dispatcher, used in error messages.
pub const SUPPORTED_EXTENSIONS: &str = ".env .json .yaml .yml";

/// Prefix (after optional leading whitespace) that marks a dotenv comment line.
pub const COMMENT_PREFIX: char = '#';

// =============================================================================
// Syntax Error Messages
// =============================================================================

pub const MSG_FILE_EMPTY: &str = "The file is empty.";

pub const MSG_NOT_AN_OBJECT: &str = "The file should contain the object.";

pub const MSG_MISSING_EQUAL_SIGN: &str =
    "Invalid line format. The line should contain at least one equal sign (\"=\").";

/// Emitted for `KEY=` lines. The condition is an empty value; the wording is kept
/// for compatibility with existing tooling that matches on it.
pub const MSG_EMPTY_VALUE: &str = "Invalid line format. Key is empty.";

pub const MSG_EMPTY_KEY: &str = "Invalid line format. Variable name is empty.";

// =============================================================================
// Connections
// =============================================================================

/// Query parameter that carries the raw `extra` payload in a connection URI.
pub const EXTRA_QUERY_KEY: &str = "__extra__";

/// Synthetic object field accepted in place of `extra` as structured JSON.
pub const EXTRA_DEJSON_FIELD: &str = "extra_dejson";

// =============================================================================
// Environment Variables
// =============================================================================

/// JSON object with `variables_file_path` / `connections_file_path`.
pub const ENV_BACKEND_KWARGS: &str = "LOCAL_SECRETS_BACKEND_KWARGS";

pub const ENV_VARIABLES_FILE: &str = "LOCAL_SECRETS_VARIABLES_FILE";

pub const ENV_CONNECTIONS_FILE: &str = "LOCAL_SECRETS_CONNECTIONS_FILE";

/// Set to `1` or `true` to skip `.env` loading in [`crate::BackendConfig::load_dotenv`].
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
