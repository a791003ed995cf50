// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response envelope and error types for the legacy wire contract.
//!
//! Every endpoint answers 200 with `{"message": ..., "data": ...}`
//! (`data` omitted when an operation returns no row) and 500 with
//! `{"message": ...}` for every failure, including validation and
//! not-found. Clients branch on the message text, so each handler owns
//! its exact failure strings.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    /// The human-readable status message.
    pub message: String,
    /// The row or rows produced by the operation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Creates an envelope with a message and no `data` key.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// Creates an envelope with a message and a `data` payload.
    pub fn with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

/// HTTP error wrapper that implements `IntoResponse`.
///
/// The status code is always 500; the legacy surface reports every
/// failure the same way.
pub struct HttpError {
    /// The error message.
    pub message: String,
}

impl HttpError {
    /// Creates an error response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<Envelope> = Json(Envelope::message(self.message));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
