//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{services::limit_policy::LimitViolation, store::StoreError};

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Validation Errors**: Malformed or missing request data
/// - **Resource Errors**: Duplicate or unknown accounts
/// - **Limit Errors**: Transactions refused by the limit policy
/// - **Storage Errors**: Unexpected account store or transaction log failures
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),

    /// An account with this id already exists.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Account id {0} already exists")]
    DuplicateAccount(String),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// The limit policy refused the transaction.
    ///
    /// Transaction handlers turn this into a 406 envelope; anywhere else it
    /// returns HTTP 406 Not Acceptable.
    #[error(transparent)]
    LimitExceeded(#[from] LimitViolation),

    /// Account store or transaction log operation failed.
    ///
    /// Returns HTTP 500 and hides the details from the client.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Body rejections (missing body, wrong content type, broken JSON) are
/// reported as validation errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `DuplicateAccount` → 400 Bad Request
/// - `AccountNotFound` → 404 Not Found
/// - `LimitExceeded` → 406 Not Acceptable
/// - `Store` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::DuplicateAccount(_) => (
                StatusCode::BAD_REQUEST,
                "duplicate_account",
                self.to_string(),
            ),
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::LimitExceeded(_) => (
                StatusCode::NOT_ACCEPTABLE,
                "limit_exceeded",
                self.to_string(),
            ),
            AppError::Store(ref err) => {
                tracing::error!(error = %err, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_hide_details() {
        let response =
            AppError::Store(StoreError::Unavailable("disk on fire".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn limit_violation_maps_to_not_acceptable() {
        let response = AppError::from(LimitViolation::InsufficientFunds).into_response();

        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }

    #[test]
    fn duplicate_account_is_bad_request() {
        let err = AppError::DuplicateAccount("Id-123".to_string());

        assert_eq!(err.to_string(), "Account id Id-123 already exists");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
