//! Error types for building connections.
//!
//! Invariants:
//! - Every variant names the offending data (keys, ids, types, field).
//! - Error messages never include password values.

use thiserror::Error;

/// Errors that can occur while building a [`super::Connection`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error(
        "The object have illegal keys: {}. The dictionary can only contain the following keys: {}",
        .keys.join(", "),
        .allowed.join(", ")
    )]
    IllegalKeys {
        keys: Vec<String>,
        allowed: Vec<String>,
    },

    #[error(
        "The extra and extra_dejson parameters are mutually exclusive. Please provide only one parameter."
    )]
    MutuallyExclusiveExtra,

    #[error(
        "Mismatch conn_id. The dictionary key has the value: {found}. The item has the value: {expected}."
    )]
    ConnIdMismatch { expected: String, found: String },

    #[error(
        "Unexpected value type: {type_name}. The connection can only be defined using a string or object."
    )]
    UnsupportedValueType { type_name: &'static str },

    #[error("Invalid connection string: {reason}")]
    InvalidUri { reason: String },

    #[error(
        "You must create an object using the URI or individual values (conn_type, host, login, password, schema, port or extra). You can't mix these two ways to create this object."
    )]
    UriWithFields,

    #[error("Invalid value for field {field}: {message}")]
    InvalidField { field: String, message: String },
}
