//! Application error type and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON error envelope returned by all failing endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy.
///
/// Each variant maps to a fixed HTTP status:
///
/// - [`AppError::Validation`] → 400 (malformed or missing input)
/// - [`AppError::UnsupportedPlatform`] → 400 (URL host not on the platform allow-list)
/// - [`AppError::NotFound`] → 404
/// - [`AppError::Internal`] → 500 (generic message; the cause is logged server-side only)
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    UnsupportedPlatform { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unsupported_platform(message: impl Into<String>, details: Value) -> Self {
        Self::UnsupportedPlatform {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::UnsupportedPlatform { message, details } => (
                StatusCode::BAD_REQUEST,
                "unsupported_platform",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::UnsupportedPlatform { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            // The generic 500 body hides internals from the client.
            tracing::error!(%message, %details, "internal error");
            let body = ErrorBody {
                error: ErrorInfo {
                    code: "internal_error",
                    message: "Internal server error".to_string(),
                    details: json!({}),
                },
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }

        let (status, code, message, details) = self.parts();
        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            AppError::bad_request("Invalid URL format", json!({ "url": "nope" })).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_platform_maps_to_400() {
        let response =
            AppError::unsupported_platform("Unsupported platform", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::not_found("Link not found or expired", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_hides_message() {
        let info = ErrorInfo {
            code: "internal_error",
            message: "Internal server error".to_string(),
            details: json!({}),
        };
        let response =
            AppError::internal("registry mutex poisoned", json!({ "secret": 1 })).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(info.code, "internal_error");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Link not found or expired", json!({}));
        assert_eq!(err.to_string(), "Link not found or expired");
    }
}
