//! Local filesystem secrets backend.
//!
//! This crate loads variables and connections from `.env`, JSON and YAML files
//! and serves them through the [`SecretsBackend`] lookup trait.

pub mod backend;
pub mod constants;
mod loader;
pub mod parsers;
pub mod types;

pub use backend::{BackendConfig, LocalFilesystemBackend, SecretsBackend, env_var_or_none};
pub use loader::{SecretsError, Variables, load_connections, load_secret_file, load_variables};
pub use parsers::{FileFormat, FileSyntaxError, RawSecretMap, RawValue};
pub use types::{Connection, ConnectionError};
