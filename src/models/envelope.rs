//! Response envelope used by the transaction and balance endpoints.

use axum::http::StatusCode;
use serde::Serialize;

/// Success/failure wrapper returned with HTTP 200.
///
/// The outcome of the operation is carried by `success` and
/// `httpResponseCode` rather than by the HTTP status line.
///
/// ```json
/// {
///   "success": false,
///   "message": "You have insufficient funds",
///   "httpResponseCode": 406
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T = ()> {
    pub success: bool,
    pub message: String,
    pub http_response_code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            http_response_code: StatusCode::OK.as_u16(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            message: message.into(),
            http_response_code: status.as_u16(),
            data: None,
        }
    }
}
