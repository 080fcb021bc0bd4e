//! Shared application state and HTTP routing.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    clock::Clock,
    handlers,
    services::{
        account_service::AccountService, limit_policy::LimitPolicy, locks::AccountLocks,
        transaction_service::TransactionProcessor,
    },
    store::{AccountStore, InMemoryAccountStore, InMemoryTransactionLog, TransactionLog},
};

/// State shared with every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub transactions: Arc<TransactionProcessor>,
}

impl AppState {
    /// Wire the services to the given stores.
    ///
    /// Account creation and transaction processing share one lock registry so
    /// both are serialized per account id.
    pub fn new(
        account_store: Arc<dyn AccountStore>,
        transaction_log: Arc<dyn TransactionLog>,
        policy: LimitPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let locks = AccountLocks::new();

        Self {
            accounts: Arc::new(AccountService::new(account_store.clone(), locks.clone())),
            transactions: Arc::new(TransactionProcessor::new(
                account_store,
                transaction_log,
                policy,
                clock,
                locks,
            )),
        }
    }

    /// State backed by the in-memory account store and transaction log.
    pub fn in_memory(policy: LimitPolicy, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Arc::new(InMemoryAccountStore::new()),
            Arc::new(InMemoryTransactionLog::new()),
            policy,
            clock,
        )
    }
}

/// Build the HTTP router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Account management routes
        .route("/v1/accounts", post(handlers::accounts::create_account))
        .route(
            "/v1/accounts/{account_id}",
            get(handlers::accounts::get_account),
        )
        .route(
            "/v1/accounts/{account_id}/balance",
            get(handlers::accounts::get_balance),
        )
        // Transaction routes
        .route(
            "/v1/accounts/{account_id}/deposit",
            post(handlers::transactions::create_deposit),
        )
        .route(
            "/v1/accounts/{account_id}/withdrawal",
            post(handlers::transactions::create_withdrawal),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
