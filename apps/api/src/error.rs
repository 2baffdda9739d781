//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Café Counter                           │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /api/orders                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation?  ── CoreError::Validation ─── 400 INVALID_ITEMS ──►│  │
//! │  │  Stock/menu?  ── CoreError::Insufficient ─ 409 CONFLICT ───────►│  │
//! │  │  Transition?  ── CoreError::InvalidTrans ─ 409 INVALID_TRANS ──►│  │
//! │  │  Storage?     ── DbError ───────────────── 500 INTERNAL_ERROR ─►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "error": "CONFLICT", "message": "Insufficient stock for ..." }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! The response body always carries a machine-readable `error` code; a
//! human-readable `message` rides along only where the client is expected
//! to display it (conflicts). Internal detail never leaves the process -
//! it is logged and replaced with a generic marker.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use cafe_core::CoreError;
use cafe_db::{DbError, OrderError};

/// Error codes for API responses.
///
/// Serialized exactly as the wire contract spells them:
/// `NOT_FOUND`, `INVALID_ITEMS`, `INVALID_STATUS`, `INVALID_DELTA`,
/// `CONFLICT`, `INVALID_TRANSITION`, `INTERNAL_ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced entity absent (404)
    NotFound,

    /// Order request malformed: empty cart or bad quantity (400)
    InvalidItems,

    /// Unknown or unreachable status label in the request (400)
    InvalidStatus,

    /// Stock delta missing or not a well-formed integer (400)
    InvalidDelta,

    /// Business rule violation the client can correct: insufficient stock
    /// or a stale cart (409)
    Conflict,

    /// Status change not in the transition table (409)
    InvalidTransition,

    /// Anything unexpected (500)
    InternalError,
}

impl ErrorCode {
    /// The HTTP status this code travels with.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidItems | ErrorCode::InvalidStatus | ErrorCode::InvalidDelta => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::Conflict | ErrorCode::InvalidTransition => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// ```json
/// { "error": "CONFLICT", "message": "Insufficient stock for Caffe Latte: ..." }
/// ```
/// Bare codes (no message) serialize as just `{ "error": "NOT_FOUND" }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable message, only where the client displays it
    pub message: Option<String>,
}

impl ApiError {
    /// Creates an error carrying only a code.
    pub fn bare(code: ErrorCode) -> Self {
        ApiError {
            code,
            message: None,
        }
    }

    /// Creates an error with a display message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: Some(message.into()),
        }
    }

    /// Creates a not found error.
    pub fn not_found() -> Self {
        ApiError::bare(ErrorCode::NotFound)
    }

    /// Creates a conflict error with a corrective message.
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::with_message(ErrorCode::Conflict, message)
    }

    /// Creates an internal error. Detail stays in the logs.
    pub fn internal() -> Self {
        ApiError::bare(ErrorCode::InternalError)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self.message {
            Some(message) => json!({ "error": self.code, "message": message }),
            None => json!({ "error": self.code }),
        };
        (self.code.status(), Json(body)).into_response()
    }
}

/// Converts database errors to API errors.
///
/// Everything except NotFound is an internal failure from the client's
/// point of view; the actual error is logged for operators.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::not_found(),
            other => {
                tracing::error!(error = %other, "Database operation failed");
                ApiError::internal()
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            // A cart referencing a menu that no longer exists is a
            // fix-your-cart conflict, same as insufficient stock
            CoreError::MenuNotFound(id) => {
                ApiError::conflict(format!("Menu not found: {}", id))
            }
            CoreError::InsufficientStock { .. } => ApiError::conflict(err.to_string()),
            CoreError::OrderNotFound(_) => ApiError::not_found(),
            CoreError::InvalidTransition { .. } => ApiError::bare(ErrorCode::InvalidTransition),
            CoreError::Validation(e) => {
                tracing::debug!(error = %e, "Order request rejected");
                ApiError::bare(ErrorCode::InvalidItems)
            }
        }
    }
}

/// Converts order-flow errors (domain or storage) to API errors.
impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Domain(e) => e.into(),
            OrderError::Db(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "[{:?}] {}", self.code, message),
            None => write!(f, "[{:?}]", self.code),
        }
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_serialize_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::InvalidItems).unwrap(),
            r#""INVALID_ITEMS""#
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::InternalError).unwrap(),
            r#""INTERNAL_ERROR""#
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::InvalidTransition).unwrap(),
            r#""INVALID_TRANSITION""#
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::InvalidDelta.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::Conflict.status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InvalidTransition.status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InternalError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_stock_conflict_keeps_message() {
        let err: ApiError = CoreError::InsufficientStock {
            name: "Caffe Latte".to_string(),
            available: 3,
            requested: 5,
        }
        .into();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert!(err.message.unwrap().contains("Caffe Latte"));
    }

    #[test]
    fn test_db_errors_stay_generic() {
        let err: ApiError = DbError::QueryFailed("secret detail".to_string()).into();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert!(err.message.is_none());
    }
}
