//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Stored account record
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an account record held by the account store.
///
/// # Balance
///
/// Balances are `Decimal` values, never floats. A balance is never negative:
/// it starts at the non-negative amount given on creation and is only changed
/// by the transaction processor, which refuses withdrawals larger than it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Caller-chosen unique identifier, never empty
    pub account_id: String,

    /// Current balance
    pub balance: Decimal,
}

impl Account {
    pub fn new(account_id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
        }
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountId": "Id-123",
///   "balance": 1000
/// }
/// ```
///
/// Both fields are optional at the serde level so a missing field surfaces as
/// a 400 validation error rather than a body rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_id: Option<String>,

    /// Must be a JSON number; strings are rejected
    #[serde(default, deserialize_with = "crate::models::number::deserialize_option")]
    pub balance: Option<Decimal>,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountId": "Id-123",
///   "balance": 123.45
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: String,

    /// Serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            balance: account.balance,
        }
    }
}

/// Payload of the balance envelope.
#[derive(Debug, Serialize)]
pub struct BalanceData {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}
