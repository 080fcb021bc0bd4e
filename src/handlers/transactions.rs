//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /v1/accounts/{accountId}/deposit - Add money to account
//! - POST /v1/accounts/{accountId}/withdrawal - Remove money from account
//!
//! Both answer with HTTP 200 and an [`Envelope`]. A limit rejection is a
//! normal outcome: `success` is false and `httpResponseCode` is 406. Missing
//! accounts, invalid amounts and storage failures use the standard error
//! response instead.

use crate::{
    app::AppState,
    error::AppError,
    models::{
        envelope::Envelope,
        transaction::{ReceiptData, TransactionRequest, TransactionType},
    },
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// Deposit into an account.
///
/// # Request Body
///
/// ```json
/// { "amount": 15000 }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "success": true,
///   "message": "Deposit successfully transacted",
///   "httpResponseCode": 200,
///   "data": {
///     "transactionId": "770e8400-...",
///     "amount": 15000.0,
///     "balance": 55000.0
///   }
/// }
/// ```
pub async fn create_deposit(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<Envelope<ReceiptData>>, AppError> {
    execute(state, account_id, TransactionType::Deposit, payload).await
}

/// Withdraw from an account.
///
/// # Validation
///
/// - Amount must not exceed the balance
/// - Daily amount, per-transaction amount and daily count caps apply
pub async fn create_withdrawal(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<Envelope<ReceiptData>>, AppError> {
    execute(state, account_id, TransactionType::Withdrawal, payload).await
}

async fn execute(
    state: AppState,
    account_id: String,
    transaction_type: TransactionType,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<Envelope<ReceiptData>>, AppError> {
    let Json(request) = payload?;
    let amount = request
        .amount
        .ok_or_else(|| AppError::InvalidRequest("amount is required".to_string()))?;

    match state
        .transactions
        .process(&account_id, transaction_type, amount)
        .await
    {
        Ok(receipt) => Ok(Json(Envelope::success(
            success_message(transaction_type),
            ReceiptData {
                transaction_id: receipt.transaction.id,
                amount: receipt.transaction.amount,
                balance: receipt.balance,
            },
        ))),
        Err(AppError::LimitExceeded(violation)) => Ok(Json(Envelope::failure(
            violation.to_string(),
            StatusCode::NOT_ACCEPTABLE,
        ))),
        Err(err) => Err(err),
    }
}

fn success_message(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Deposit => "Deposit successfully transacted",
        TransactionType::Withdrawal => "Withdrawal successfully transacted",
    }
}
