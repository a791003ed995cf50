// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lesson timestamp handling.
//!
//! Lesson start times arrive as `DD/MM/YYYY HH:MM:SS` strings and are
//! rendered back to callers as RFC-1123-style HTTP dates
//! (`Mon, 01 Jan 0001 00:00:00 GMT`). Both formats are part of the
//! historical wire contract and must not change.

use chrono::NaiveDateTime;
use serde::Serializer;

use crate::error::DomainError;

/// Input format for lesson start timestamps.
const START_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Output format for lesson start timestamps (HTTP date).
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Parses a lesson start timestamp from its wire representation.
///
/// # Arguments
///
/// * `value` - The raw `DD/MM/YYYY HH:MM:SS` string
///
/// # Errors
///
/// Returns `DomainError::InvalidStartDate` if the value does not match
/// the expected format or names an impossible calendar date.
pub fn parse_start(value: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(value, START_FORMAT).map_err(|e| DomainError::InvalidStartDate {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Renders a lesson start timestamp as an HTTP date string.
#[must_use]
pub fn http_date(value: &NaiveDateTime) -> String {
    value.format(HTTP_DATE_FORMAT).to_string()
}

/// Serde helper serializing a timestamp in HTTP-date form.
///
/// # Errors
///
/// Returns an error if the underlying serializer rejects the string.
pub fn serialize_http_date<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&http_date(value))
}
