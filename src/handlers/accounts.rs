//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /v1/accounts - Create new account
//! - GET /v1/accounts/{accountId} - Get account by ID
//! - GET /v1/accounts/{accountId}/balance - Get balance wrapped in the envelope

use crate::{
    app::AppState,
    error::AppError,
    models::{
        account::{AccountResponse, BalanceData, CreateAccountRequest},
        envelope::Envelope,
    },
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// Create a new account.
///
/// # Endpoint
///
/// `POST /v1/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "accountId": "Id-123",
///   "balance": 1000
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Empty body
/// - **Error (400)**: Missing body, missing or empty `accountId`, missing or
///   negative `balance`, or an account with this id already exists
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    let account_id = request
        .account_id
        .ok_or_else(|| AppError::InvalidRequest("accountId is required".to_string()))?;
    let balance = request
        .balance
        .ok_or_else(|| AppError::InvalidRequest("balance is required".to_string()))?;

    state.accounts.create_account(account_id, balance).await?;

    Ok(StatusCode::CREATED)
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: `{"accountId": "Id-123", "balance": 123.45}`
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    tracing::debug!(%account_id, "retrieving account");

    let account = state.accounts.get_account(&account_id).await?;

    Ok(Json(account.into()))
}

/// Get an account's balance.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "message": "",
///   "httpResponseCode": 200,
///   "data": { "balance": 400.0 }
/// }
/// ```
///
/// Unknown accounts return the standard 404 error response.
pub async fn get_balance(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<Envelope<BalanceData>>, AppError> {
    let balance = state.accounts.get_balance(&account_id).await?;

    Ok(Json(Envelope::success("", BalanceData { balance })))
}
