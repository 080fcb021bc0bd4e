//! Storage abstractions for accounts and the transaction log.
//!
//! The service talks to storage only through the [`AccountStore`] and
//! [`TransactionLog`] traits. Both are shared as `Arc<dyn _>` so handlers,
//! services and tests can swap implementations freely.
//!
//! In-memory implementations backed by `DashMap` live in the submodules.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{
    account::Account,
    transaction::{Transaction, TransactionType},
};

mod accounts;
mod transactions;

pub use accounts::InMemoryAccountStore;
pub use transactions::InMemoryTransactionLog;

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not complete the operation.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Account records keyed by account id.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert or replace the record for `account.account_id`.
    async fn put(&self, account: Account) -> Result<(), StoreError>;

    async fn get(&self, account_id: &str) -> Result<Option<Account>, StoreError>;

    async fn exists(&self, account_id: &str) -> Result<bool, StoreError>;

    /// Number of stored accounts.
    async fn count(&self) -> Result<usize, StoreError>;
}

/// Append-only record of applied transactions.
#[async_trait]
pub trait TransactionLog: Send + Sync {
    async fn append(&self, transaction: Transaction) -> Result<(), StoreError>;

    /// Transactions of `transaction_type` for `account_id` with a timestamp in
    /// `[start, end)`, in append order.
    async fn find_by_date_range_and_type(
        &self,
        account_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        transaction_type: TransactionType,
    ) -> Result<Vec<Transaction>, StoreError>;
}
