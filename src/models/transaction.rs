//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `TransactionType`: Deposit or withdrawal
//! - `Transaction`: Immutable entry of the transaction log
//! - `TransactionRequest`: Request body for deposits and withdrawals
//! - `ReceiptData`: Payload returned inside the envelope on success

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of balance movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Deposit => f.write_str("deposit"),
            TransactionType::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// An applied deposit or withdrawal.
///
/// Entries are only created once the limit policy has admitted them and are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,

    /// Account the transaction was applied to
    pub account_id: String,

    pub transaction_type: TransactionType,

    /// Always positive
    pub amount: Decimal,

    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        account_id: impl Into<String>,
        transaction_type: TransactionType,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: account_id.into(),
            transaction_type,
            amount,
            timestamp,
        }
    }
}

/// Request body for deposits and withdrawals.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 15000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    /// Must be a JSON number; strings are rejected
    #[serde(default, deserialize_with = "crate::models::number::deserialize_option")]
    pub amount: Option<Decimal>,
}

/// Envelope payload for an admitted transaction.
///
/// ```json
/// {
///   "transactionId": "770e8400-e29b-41d4-a716-446655440002",
///   "amount": 15000.0,
///   "balance": 55000.0
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptData {
    pub transaction_id: Uuid,

    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Balance after the transaction was applied
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}
