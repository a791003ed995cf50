// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request-payload field helpers.
//!
//! Handlers receive raw JSON objects and check required keys themselves
//! so that each endpoint can reproduce its historical error message.
//! Presence means the key exists in the object; a `null` value counts
//! as present, matching the original service.

use serde_json::{Map, Value};

use crate::error::DomainError;

/// Returns the required field names absent from the payload, in the
/// order they appear in `required`.
#[must_use]
pub fn missing_fields<'a>(payload: &Map<String, Value>, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|key| !payload.contains_key(**key))
        .copied()
        .collect()
}

/// Extracts a text column value from the payload.
///
/// JSON strings are taken verbatim; JSON numbers are coerced to their
/// decimal rendering. The original store was dynamically typed, so
/// clients sometimes send numeric identifiers for text columns.
///
/// # Errors
///
/// Returns an error if the key is absent or the value is neither a
/// string nor a number.
pub fn text_field(payload: &Map<String, Value>, key: &str) -> Result<String, DomainError> {
    match payload.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(DomainError::InvalidFieldValue {
            field: key.to_string(),
            message: format!("expected a string, got {other}"),
        }),
        None => Err(DomainError::FieldMissing(key.to_string())),
    }
}

/// Extracts an integer column value from the payload.
///
/// JSON integers are taken directly; strings containing integers are
/// parsed for the same dynamic-typing reason as [`text_field`].
///
/// # Errors
///
/// Returns an error if the key is absent or the value is not an
/// integer (or an integer-valued string).
pub fn int_field(payload: &Map<String, Value>, key: &str) -> Result<i32, DomainError> {
    match payload.get(key) {
        Some(Value::Number(n)) => {
            n.as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| DomainError::InvalidFieldValue {
                    field: key.to_string(),
                    message: format!("expected an integer, got {n}"),
                })
        }
        Some(Value::String(s)) => s.parse::<i32>().map_err(|e| DomainError::InvalidFieldValue {
            field: key.to_string(),
            message: e.to_string(),
        }),
        Some(other) => Err(DomainError::InvalidFieldValue {
            field: key.to_string(),
            message: format!("expected an integer, got {other}"),
        }),
        None => Err(DomainError::FieldMissing(key.to_string())),
    }
}
