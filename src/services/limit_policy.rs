//! Deposit and withdrawal limits.
//!
//! The policy is a pure function of the proposed transaction, today's
//! same-type history for the account and the current balance. Rules run in a
//! fixed order and the first failing rule decides the rejection:
//!
//! 1. Withdrawals larger than the balance
//! 2. Daily amount cap (today's total plus the proposed amount)
//! 3. Per-transaction amount cap
//! 4. Daily transaction count cap

use rust_decimal::Decimal;

use crate::models::transaction::{Transaction, TransactionType};

/// Caps applying to one transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_per_transaction: Decimal,
    pub max_per_day: Decimal,
    pub max_transactions_per_day: usize,
}

impl Limits {
    pub fn default_deposit() -> Self {
        Self {
            max_per_transaction: Decimal::from(20_000),
            max_per_day: Decimal::from(100_000),
            max_transactions_per_day: 10,
        }
    }

    pub fn default_withdrawal() -> Self {
        Self {
            max_per_transaction: Decimal::from(20_000),
            max_per_day: Decimal::from(50_000),
            max_transactions_per_day: 3,
        }
    }
}

/// Reason a transaction was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitViolation {
    #[error("You have insufficient funds")]
    InsufficientFunds,

    #[error("{}", daily_amount_message(.transaction_type, .cap))]
    DailyAmountExceeded {
        transaction_type: TransactionType,
        cap: Decimal,
    },

    #[error("{}", per_transaction_message(.transaction_type, .cap))]
    PerTransactionAmountExceeded {
        transaction_type: TransactionType,
        cap: Decimal,
    },

    #[error("Maximum {transaction_type} transactions for the day exceeded")]
    DailyCountExceeded {
        transaction_type: TransactionType,
        cap: usize,
    },
}

fn daily_amount_message(transaction_type: &TransactionType, cap: &Decimal) -> String {
    match transaction_type {
        TransactionType::Deposit => format!(
            "Deposit for the day should not be more than {}",
            format_cap(cap)
        ),
        TransactionType::Withdrawal => format!(
            "Withdrawal per day should not be more than {}",
            format_cap(cap)
        ),
    }
}

fn per_transaction_message(transaction_type: &TransactionType, cap: &Decimal) -> String {
    match transaction_type {
        TransactionType::Deposit => format!(
            "Deposit per transaction should not be more than {}",
            format_cap(cap)
        ),
        TransactionType::Withdrawal => "Exceeded maximum withdrawal per transaction".to_string(),
    }
}

/// Renders whole thousands as `₹100K`, anything else as `₹1234.5`.
fn format_cap(cap: &Decimal) -> String {
    let thousand = Decimal::from(1_000);
    if *cap >= thousand && (*cap % thousand).is_zero() {
        format!("₹{}K", (*cap / thousand).normalize())
    } else {
        format!("₹{}", cap.normalize())
    }
}

/// Deposit and withdrawal caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPolicy {
    deposit: Limits,
    withdrawal: Limits,
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self::new(Limits::default_deposit(), Limits::default_withdrawal())
    }
}

impl LimitPolicy {
    pub fn new(deposit: Limits, withdrawal: Limits) -> Self {
        Self {
            deposit,
            withdrawal,
        }
    }

    pub fn limits_for(&self, transaction_type: TransactionType) -> &Limits {
        match transaction_type {
            TransactionType::Deposit => &self.deposit,
            TransactionType::Withdrawal => &self.withdrawal,
        }
    }

    /// Decide whether `amount` may be applied.
    ///
    /// `today` must hold only the account's transactions of `transaction_type`
    /// from the current calendar day. `balance` is consulted for withdrawals
    /// only.
    pub fn evaluate(
        &self,
        transaction_type: TransactionType,
        amount: Decimal,
        today: &[Transaction],
        balance: Decimal,
    ) -> Result<(), LimitViolation> {
        if transaction_type == TransactionType::Withdrawal && amount > balance {
            return Err(LimitViolation::InsufficientFunds);
        }

        let limits = self.limits_for(transaction_type);

        let total_today: Decimal = today.iter().map(|tx| tx.amount).sum();
        if total_today + amount > limits.max_per_day {
            return Err(LimitViolation::DailyAmountExceeded {
                transaction_type,
                cap: limits.max_per_day,
            });
        }

        if amount > limits.max_per_transaction {
            return Err(LimitViolation::PerTransactionAmountExceeded {
                transaction_type,
                cap: limits.max_per_transaction,
            });
        }

        if today.len() >= limits.max_transactions_per_day {
            return Err(LimitViolation::DailyCountExceeded {
                transaction_type,
                cap: limits.max_transactions_per_day,
            });
        }

        Ok(())
    }
}
