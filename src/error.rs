// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with consistent handling of API failures.

use serde::Deserialize;
use std::collections::HashMap;

/// Error type returned by every API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message used when an error response carries no readable body.
    pub const GENERIC_MESSAGE: &'static str = "An unexpected error occurred";

    /// Build an `Http` error from a status code and the raw response body.
    ///
    /// The body is parsed as `{ "message": ..., "errors": { field: msg } }`
    /// when possible; anything else falls back to the generic message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();

        let (message, field_errors) = match parsed {
            Some(ErrorBody { message, errors }) => (
                message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| Self::GENERIC_MESSAGE.to_string()),
                errors,
            ),
            None => (Self::GENERIC_MESSAGE.to_string(), None),
        };

        ApiError::Http {
            status,
            message,
            field_errors,
        }
    }

    /// HTTP status code, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is an authentication failure (401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Validation message for a single field, if the server sent one.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::Http {
                field_errors: Some(errors),
                ..
            } => errors.get(field).map(String::as_str),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// JSON error body as sent by the backend.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, String>>,
}

/// Durable credential storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Credential storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;
