use async_trait::async_trait;
use dashmap::DashMap;

use super::{AccountStore, StoreError};
use crate::models::account::Account;

/// Account store kept in process memory.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<String, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn put(&self, account: Account) -> Result<(), StoreError> {
        self.accounts.insert(account.account_id.clone(), account);
        Ok(())
    }

    async fn get(&self, account_id: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(account_id).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, account_id: &str) -> Result<bool, StoreError> {
        Ok(self.accounts.contains_key(account_id))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn put_replaces_existing_record() {
        let store = InMemoryAccountStore::new();
        store.put(Account::new("Id-1", dec!(10))).await.unwrap();
        store.put(Account::new("Id-1", dec!(25.50))).await.unwrap();

        let account = store.get("Id-1").await.unwrap().unwrap();
        assert_eq!(account.balance, dec!(25.50));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_account_is_absent() {
        let store = InMemoryAccountStore::new();

        assert!(store.get("nope").await.unwrap().is_none());
        assert!(!store.exists("nope").await.unwrap());
    }
}
