//! JSON secret file parser.

use super::{FileSyntaxError, ParseOutcome, RawSecretMap, RawValue};
use crate::constants::{MSG_FILE_EMPTY, MSG_NOT_AN_OBJECT};

/// Strip serde_json's trailing " at line X column Y" since the line is reported separately.
fn decoder_message(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match message.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => message,
    }
}

/// Parse a JSON document whose top level must be an object.
pub fn parse_json(content: &str) -> ParseOutcome {
    if content.is_empty() {
        return (
            RawSecretMap::new(),
            vec![FileSyntaxError::new(1, MSG_FILE_EMPTY)],
        );
    }

    let document: serde_json::Value = match serde_json::from_str(content) {
        Ok(document) => document,
        Err(e) => {
            return (
                RawSecretMap::new(),
                vec![FileSyntaxError::new(e.line(), decoder_message(&e))],
            );
        }
    };

    let serde_json::Value::Object(object) = document else {
        return (
            RawSecretMap::new(),
            vec![FileSyntaxError::new(1, MSG_NOT_AN_OBJECT)],
        );
    };

    let secrets = object
        .into_iter()
        .map(|(key, value)| (key, RawValue::Single(value)))
        .collect();
    (secrets, Vec::new())
}
