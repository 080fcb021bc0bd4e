//! Account creation and lookup.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::{
    error::AppError,
    models::account::Account,
    services::locks::AccountLocks,
    store::AccountStore,
};

pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    locks: AccountLocks,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountStore>, locks: AccountLocks) -> Self {
        Self { accounts, locks }
    }

    /// Create a new account with an opening balance.
    ///
    /// The existence check and the insert run under the account's lock, so two
    /// concurrent requests for the same id cannot both succeed.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: Empty id or negative balance
    /// - `DuplicateAccount`: An account with this id already exists
    /// - `Store`: Account store failed
    pub async fn create_account(
        &self,
        account_id: String,
        balance: Decimal,
    ) -> Result<Account, AppError> {
        if account_id.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "accountId must not be empty".to_string(),
            ));
        }
        if balance < Decimal::ZERO {
            return Err(AppError::InvalidRequest(
                "Initial balance must not be negative".to_string(),
            ));
        }

        let _guard = self.locks.lock(&account_id).await;

        if self.accounts.exists(&account_id).await? {
            return Err(AppError::DuplicateAccount(account_id));
        }

        let account = Account::new(account_id, balance);
        self.accounts.put(account.clone()).await?;

        tracing::info!(account_id = %account.account_id, balance = %account.balance, "account created");

        Ok(account)
    }

    pub async fn get_account(&self, account_id: &str) -> Result<Account, AppError> {
        self.accounts
            .get(account_id)
            .await?
            .ok_or(AppError::AccountNotFound)
    }

    pub async fn get_balance(&self, account_id: &str) -> Result<Decimal, AppError> {
        Ok(self.get_account(account_id).await?.balance)
    }

    /// Number of accounts, reported by the health check.
    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.accounts.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAccountStore;
    use rust_decimal_macros::dec;

    fn service() -> AccountService {
        AccountService::new(Arc::new(InMemoryAccountStore::new()), AccountLocks::new())
    }

    #[tokio::test]
    async fn created_account_can_be_fetched() {
        let service = service();

        service
            .create_account("Id-123".to_string(), dec!(1000))
            .await
            .unwrap();

        let account = service.get_account("Id-123").await.unwrap();
        assert_eq!(account, Account::new("Id-123", dec!(1000)));
        assert_eq!(service.get_balance("Id-123").await.unwrap(), dec!(1000));
    }

    #[tokio::test]
    async fn duplicate_id_keeps_original_balance() {
        let service = service();
        service
            .create_account("Id-123".to_string(), dec!(1000))
            .await
            .unwrap();

        let result = service
            .create_account("Id-123".to_string(), dec!(5))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateAccount(id)) if id == "Id-123"));
        assert_eq!(service.get_balance("Id-123").await.unwrap(), dec!(1000));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_empty_id_and_negative_balance() {
        let service = service();

        let empty = service.create_account(String::new(), dec!(1)).await;
        assert!(matches!(empty, Err(AppError::InvalidRequest(_))));

        let negative = service
            .create_account("Id-1".to_string(), dec!(-1000))
            .await;
        assert!(matches!(negative, Err(AppError::InvalidRequest(_))));

        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn zero_opening_balance_is_allowed() {
        let service = service();

        let account = service
            .create_account("Id-0".to_string(), Decimal::ZERO)
            .await
            .unwrap();

        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let service = service();

        assert!(matches!(
            service.get_account("nope").await,
            Err(AppError::AccountNotFound)
        ));
    }
}
