//! Type definitions for resolved secrets.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

pub mod connection;

pub use connection::{Connection, ConnectionError};
