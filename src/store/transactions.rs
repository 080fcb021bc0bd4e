//! In-memory transaction log.
//!
//! Entries are grouped per account so a range query only scans the history of
//! the account it is asked about.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::{StoreError, TransactionLog};
use crate::models::transaction::{Transaction, TransactionType};

#[derive(Default)]
pub struct InMemoryTransactionLog {
    /// Map: account_id -> transactions in append order
    entries: DashMap<String, Vec<Transaction>>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

#[async_trait]
impl TransactionLog for InMemoryTransactionLog {
    async fn append(&self, transaction: Transaction) -> Result<(), StoreError> {
        self.entries
            .entry(transaction.account_id.clone())
            .or_default()
            .push(transaction);
        Ok(())
    }

    async fn find_by_date_range_and_type(
        &self,
        account_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        transaction_type: TransactionType,
    ) -> Result<Vec<Transaction>, StoreError> {
        let Some(history) = self.entries.get(account_id) else {
            return Ok(Vec::new());
        };

        Ok(history
            .iter()
            .filter(|tx| tx.transaction_type == transaction_type)
            .filter(|tx| tx.timestamp >= start && tx.timestamp < end)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn range_query_filters_account_type_and_window() {
        let log = InMemoryTransactionLog::new();
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(1);

        let inside = Transaction::new("A", TransactionType::Deposit, dec!(100), start);
        log.append(inside.clone()).await.unwrap();
        // Same account and window, other type
        log.append(Transaction::new("A", TransactionType::Withdrawal, dec!(5), start))
            .await
            .unwrap();
        // Other account
        log.append(Transaction::new("B", TransactionType::Deposit, dec!(7), start))
            .await
            .unwrap();
        // End of the window is exclusive
        log.append(Transaction::new("A", TransactionType::Deposit, dec!(9), end))
            .await
            .unwrap();
        log.append(Transaction::new(
            "A",
            TransactionType::Deposit,
            dec!(11),
            start - Duration::seconds(1),
        ))
        .await
        .unwrap();

        let found = log
            .find_by_date_range_and_type("A", start, end, TransactionType::Deposit)
            .await
            .unwrap();

        assert_eq!(found, vec![inside]);
    }

    #[tokio::test]
    async fn unknown_account_has_empty_history() {
        let log = InMemoryTransactionLog::new();
        let now = Utc::now();

        let found = log
            .find_by_date_range_and_type("ghost", now, now, TransactionType::Withdrawal)
            .await
            .unwrap();

        assert!(found.is_empty());
    }
}
