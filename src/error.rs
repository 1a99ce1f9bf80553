// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types mapped from HTTP responses.

use reqwest::StatusCode;

/// Error surfaced to callers of the API client.
///
/// Every non-success HTTP status maps onto exactly one variant; transport
/// failures (no status obtained) and undecodable bodies get their own
/// variants so callers can tell them apart from server-side rejections.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected HTTP {status}: {body}")]
    Unexpected { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Internal client error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Map a non-success HTTP status and its body to an error variant.
    ///
    /// The server wraps error details as `{"message": "..."}`; when the
    /// body parses that way, the message alone becomes the error detail.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let detail = body_message(body);
        match status {
            StatusCode::BAD_REQUEST => ApiError::InvalidRequest(detail),
            StatusCode::UNAUTHORIZED => ApiError::Unauthenticated,
            StatusCode::FORBIDDEN => ApiError::Forbidden(detail),
            StatusCode::NOT_FOUND => ApiError::NotFound(detail),
            StatusCode::CONFLICT => ApiError::Conflict(detail),
            s if s.is_server_error() => ApiError::ServerError(detail),
            s => ApiError::Unexpected {
                status: s.as_u16(),
                body: detail,
            },
        }
    }

    /// Map a transport-level failure (no HTTP status obtained).
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network(format!("request timed out: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// True for 404 responses. Some call sites treat this as "resource
    /// absent" (e.g. no profile yet) rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// True when the server rejected our credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}

/// Extract the `message` field from a JSON error body, falling back to
/// the raw body.
fn body_message(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(String::from)
            .unwrap_or(body),
        Err(_) => body,
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
