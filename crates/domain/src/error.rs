// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating and interpreting request payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is absent from the request payload.
    FieldMissing(String),
    /// A field is present but carries a value of an unusable type.
    InvalidFieldValue {
        /// The offending field name.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },
    /// A lesson start timestamp could not be parsed.
    InvalidStartDate {
        /// The raw value received.
        value: String,
        /// The parser error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldMissing(field) => write!(f, "Field '{field}' is missing"),
            Self::InvalidFieldValue { field, message } => {
                write!(f, "Invalid value for field '{field}': {message}")
            }
            Self::InvalidStartDate { value, error } => {
                write!(f, "Failed to parse start date '{value}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
