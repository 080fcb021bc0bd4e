//! Transaction service - Core business logic for deposits and withdrawals.
//!
//! This service handles:
//! - Amount validation
//! - Daily aggregation of the account's history
//! - Limit policy evaluation
//! - Atomic balance update and log append
//!
//! # Atomicity Guarantees
//!
//! Every request for an account runs under that account's lock, from the
//! balance read through the log append. The balance is written first; if the
//! log append then fails the previous account record is put back, so a
//! request either leaves both a new log entry and a new balance or neither.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::{
    clock::{Clock, day_bounds},
    error::AppError,
    models::{
        account::Account,
        transaction::{Transaction, TransactionType},
    },
    services::{limit_policy::LimitPolicy, locks::AccountLocks},
    store::{AccountStore, TransactionLog},
};

/// Result of an admitted transaction.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub transaction: Transaction,

    /// Balance after the transaction was applied
    pub balance: Decimal,
}

/// Applies deposits and withdrawals to accounts.
pub struct TransactionProcessor {
    accounts: Arc<dyn AccountStore>,
    log: Arc<dyn TransactionLog>,
    policy: LimitPolicy,
    clock: Arc<dyn Clock>,
    locks: AccountLocks,
}

impl TransactionProcessor {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        log: Arc<dyn TransactionLog>,
        policy: LimitPolicy,
        clock: Arc<dyn Clock>,
        locks: AccountLocks,
    ) -> Self {
        Self {
            accounts,
            log,
            policy,
            clock,
            locks,
        }
    }

    /// Validate and apply a deposit or withdrawal.
    ///
    /// # Process
    ///
    /// 1. Reject non-positive amounts
    /// 2. Lock the account
    /// 3. Read the balance and today's same-type transactions
    /// 4. Run the limit policy
    /// 5. Write the new balance, append the transaction
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: Amount is zero or negative, or the new balance overflows
    /// - `AccountNotFound`: Account doesn't exist
    /// - `LimitExceeded`: The limit policy refused the transaction
    /// - `Store`: Account store or transaction log failed
    pub async fn process(
        &self,
        account_id: &str,
        transaction_type: TransactionType,
        amount: Decimal,
    ) -> Result<Receipt, AppError> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidRequest(
                "Amount must be positive".to_string(),
            ));
        }

        // Accounts are never deleted, so checking before locking only avoids
        // registering locks for unknown ids
        if !self.accounts.exists(account_id).await? {
            return Err(AppError::AccountNotFound);
        }

        let _guard = self.locks.lock(account_id).await;

        let account = self
            .accounts
            .get(account_id)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        let now = self.clock.now();
        let (start_of_day, end_of_day) = day_bounds(now);
        let today = self
            .log
            .find_by_date_range_and_type(account_id, start_of_day, end_of_day, transaction_type)
            .await?;

        if let Err(violation) =
            self.policy
                .evaluate(transaction_type, amount, &today, account.balance)
        {
            tracing::warn!(
                account_id,
                %transaction_type,
                %amount,
                reason = %violation,
                "transaction rejected"
            );
            return Err(violation.into());
        }

        let new_balance = match transaction_type {
            TransactionType::Deposit => account.balance.checked_add(amount),
            TransactionType::Withdrawal => account.balance.checked_sub(amount),
        }
        .ok_or_else(|| AppError::InvalidRequest("Amount is too large".to_string()))?;

        let transaction = Transaction::new(account_id, transaction_type, amount, now);

        self.accounts
            .put(Account::new(account_id, new_balance))
            .await?;

        if let Err(append_err) = self.log.append(transaction.clone()).await {
            // The restore is a second write; a backend where it can fail needs
            // a real transaction spanning both stores
            match self.accounts.put(account).await {
                Ok(()) => tracing::error!(
                    account_id,
                    error = %append_err,
                    "transaction log append failed, balance restored"
                ),
                Err(restore_err) => tracing::error!(
                    account_id,
                    append_error = %append_err,
                    restore_error = %restore_err,
                    "transaction log append failed and balance restore failed"
                ),
            }
            return Err(append_err.into());
        }

        tracing::info!(
            account_id,
            transaction_id = %transaction.id,
            %transaction_type,
            %amount,
            balance = %new_balance,
            "transaction applied"
        );

        Ok(Receipt {
            transaction,
            balance: new_balance,
        })
    }
}
