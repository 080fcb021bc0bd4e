//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::services::limit_policy::{LimitPolicy, Limits};

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// All optional:
///
/// - `SERVER_PORT`: HTTP server port, defaults to 3000
/// - `DEPOSIT_MAX_PER_TRANSACTION`: defaults to 20000
/// - `DEPOSIT_MAX_PER_DAY`: defaults to 100000
/// - `DEPOSIT_MAX_TRANSACTIONS_PER_DAY`: defaults to 10
/// - `WITHDRAWAL_MAX_PER_TRANSACTION`: defaults to 20000
/// - `WITHDRAWAL_MAX_PER_DAY`: defaults to 50000
/// - `WITHDRAWAL_MAX_TRANSACTIONS_PER_DAY`: defaults to 3
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_deposit_max_per_transaction")]
    pub deposit_max_per_transaction: Decimal,

    #[serde(default = "default_deposit_max_per_day")]
    pub deposit_max_per_day: Decimal,

    #[serde(default = "default_deposit_max_transactions_per_day")]
    pub deposit_max_transactions_per_day: usize,

    #[serde(default = "default_withdrawal_max_per_transaction")]
    pub withdrawal_max_per_transaction: Decimal,

    #[serde(default = "default_withdrawal_max_per_day")]
    pub withdrawal_max_per_day: Decimal,

    #[serde(default = "default_withdrawal_max_transactions_per_day")]
    pub withdrawal_max_transactions_per_day: usize,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_deposit_max_per_transaction() -> Decimal {
    Limits::default_deposit().max_per_transaction
}

fn default_deposit_max_per_day() -> Decimal {
    Limits::default_deposit().max_per_day
}

fn default_deposit_max_transactions_per_day() -> usize {
    Limits::default_deposit().max_transactions_per_day
}

fn default_withdrawal_max_per_transaction() -> Decimal {
    Limits::default_withdrawal().max_per_transaction
}

fn default_withdrawal_max_per_day() -> Decimal {
    Limits::default_withdrawal().max_per_day
}

fn default_withdrawal_max_transactions_per_day() -> usize {
    Limits::default_withdrawal().max_transactions_per_day
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types.
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }

    /// Limit policy built from the configured caps.
    pub fn limit_policy(&self) -> LimitPolicy {
        LimitPolicy::new(
            Limits {
                max_per_transaction: self.deposit_max_per_transaction,
                max_per_day: self.deposit_max_per_day,
                max_transactions_per_day: self.deposit_max_transactions_per_day,
            },
            Limits {
                max_per_transaction: self.withdrawal_max_per_transaction,
                max_per_day: self.withdrawal_max_per_day,
                max_transactions_per_day: self.withdrawal_max_transactions_per_day,
            },
        )
    }
}
