// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Recipe API error: {message}")]
    RecipeApi {
        /// HTTP status from the upstream API, if the request got that far.
        status: Option<u16>,
        message: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether an upstream response says the session is no longer usable.
    ///
    /// The recipe API answers both expired tokens and malformed auth with
    /// 401 or 400; the pages treat either as "log out and start over".
    pub fn is_session_invalid(&self) -> bool {
        matches!(
            self,
            AppError::RecipeApi {
                status: Some(401) | Some(400),
                ..
            }
        )
    }

    /// The server-provided message from an upstream failure, if any.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            AppError::RecipeApi { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::RecipeApi { message, .. } => (
                StatusCode::BAD_GATEWAY,
                "recipe_api_error",
                (!message.is_empty()).then(|| message.clone()),
            ),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
