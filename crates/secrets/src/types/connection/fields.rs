//! Building connections from raw secret values.
//!
//! A connection is defined either by a URI string or by an object whose keys are
//! limited to `Connection::PARAMETER_NAMES` plus the `extra_dejson` alias.

use secrecy::SecretString;
use serde_json::{Map, Value};

use super::{Connection, ConnectionError};
use crate::constants::EXTRA_DEJSON_FIELD;

/// Fields that cannot be combined with `uri`.
const URI_EXCLUSIVE_FIELDS: [&str; 7] = [
    "conn_type",
    "host",
    "login",
    "password",
    "schema",
    "port",
    "extra",
];

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn invalid_field(field: &str, message: impl Into<String>) -> ConnectionError {
    ConnectionError::InvalidField {
        field: field.to_string(),
        message: message.into(),
    }
}

fn string_field(fields: &Map<String, Value>, field: &str) -> Result<Option<String>, ConnectionError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(invalid_field(
            field,
            format!("expected a string, got {}", json_type_name(other)),
        )),
    }
}

fn port_field(fields: &Map<String, Value>) -> Result<Option<u16>, ConnectionError> {
    match fields.get("port") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|p| u16::try_from(p).ok())
            .map(Some)
            .ok_or_else(|| invalid_field("port", format!("{n} is not a valid port number"))),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .parse::<u16>()
            .map(Some)
            .map_err(|_| invalid_field("port", "must be an integer between 0 and 65535")),
        Some(other) => Err(invalid_field(
            "port",
            format!("expected an integer, got {}", json_type_name(other)),
        )),
    }
}

fn extra_field(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("extra") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

impl Connection {
    /// Every key accepted in an object definition.
    pub fn allowed_fields() -> Vec<&'static str> {
        let mut allowed: Vec<&'static str> = Self::PARAMETER_NAMES.to_vec();
        allowed.push(EXTRA_DEJSON_FIELD);
        allowed.sort_unstable();
        allowed
    }

    /// Build a connection from a raw value stored under `conn_id`.
    ///
    /// Strings are treated as URIs; objects are validated against
    /// [`Connection::allowed_fields`].
    pub fn from_value(conn_id: &str, value: Value) -> Result<Self, ConnectionError> {
        match value {
            Value::String(uri) => Self::from_uri(conn_id, &uri),
            Value::Object(fields) => Self::from_fields(conn_id, fields),
            other => Err(ConnectionError::UnsupportedValueType {
                type_name: json_type_name(&other),
            }),
        }
    }

    /// Build a connection from an object definition.
    pub fn from_fields(conn_id: &str, mut fields: Map<String, Value>) -> Result<Self, ConnectionError> {
        let allowed = Self::allowed_fields();
        let mut illegal: Vec<String> = fields
            .keys()
            .filter(|key| !allowed.contains(&key.as_str()))
            .cloned()
            .collect();
        if !illegal.is_empty() {
            illegal.sort();
            return Err(ConnectionError::IllegalKeys {
                keys: illegal,
                allowed: allowed.iter().map(|f| f.to_string()).collect(),
            });
        }

        if fields.contains_key("extra") && fields.contains_key(EXTRA_DEJSON_FIELD) {
            return Err(ConnectionError::MutuallyExclusiveExtra);
        }
        if let Some(extra_dejson) = fields.remove(EXTRA_DEJSON_FIELD) {
            fields.insert("extra".to_string(), Value::String(extra_dejson.to_string()));
        }

        if let Some(declared) = fields.remove("conn_id") {
            match declared {
                Value::String(declared) if declared == conn_id => {}
                Value::String(declared) => {
                    return Err(ConnectionError::ConnIdMismatch {
                        expected: conn_id.to_string(),
                        found: declared,
                    });
                }
                other => {
                    return Err(ConnectionError::ConnIdMismatch {
                        expected: conn_id.to_string(),
                        found: other.to_string(),
                    });
                }
            }
        }

        let uri = fields.remove("uri");
        if uri.as_ref().is_some_and(is_set)
            && URI_EXCLUSIVE_FIELDS
                .iter()
                .any(|field| fields.get(*field).is_some_and(is_set))
        {
            return Err(ConnectionError::UriWithFields);
        }

        let mut conn = Self::new(conn_id);
        conn.description = string_field(&fields, "description")?;
        conn.conn_type = string_field(&fields, "conn_type")?;
        conn.host = string_field(&fields, "host")?;
        conn.login = string_field(&fields, "login")?;
        conn.password =
            string_field(&fields, "password")?.map(|p| SecretString::new(p.into()));
        conn.schema = string_field(&fields, "schema")?;
        conn.port = port_field(&fields)?;
        conn.extra = extra_field(&fields);

        match uri {
            None | Some(Value::Null) => {}
            Some(Value::String(uri)) if uri.is_empty() => {}
            Some(Value::String(uri)) => conn.apply_uri(&uri)?,
            Some(other) => {
                return Err(invalid_field(
                    "uri",
                    format!("expected a string, got {}", json_type_name(&other)),
                ));
            }
        }

        Ok(conn)
    }
}
