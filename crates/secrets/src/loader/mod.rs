//! Secret file loading for variables and connections.
//!
//! Responsibilities:
//! - Dispatch a secret file to the parser matching its extension.
//! - Resolve variables, enforcing exactly one value per key.
//! - Resolve connections, enforcing one definition per connection id.
//!
//! Does NOT handle:
//! - Format-specific parsing (see `parsers`).
//! - Connection field validation (see `types::connection`).
//! - Deciding which files to load (see `backend`).
//!
//! Invariants / Assumptions:
//! - Every call re-reads and re-parses the file; nothing is cached.
//! - Parser output is consumed by value, so repeated calls see identical input.

mod connections;
mod error;
mod file;
mod variables;

pub use connections::load_connections;
pub use error::SecretsError;
pub use file::load_secret_file;
pub use variables::{Variables, load_variables};

#[cfg(test)]
mod tests;
