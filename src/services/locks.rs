//! Per-account critical sections.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per account id.
///
/// Holding the guard returned by [`AccountLocks::lock`] serializes every
/// read-modify-write on that account; other accounts are unaffected.
#[derive(Clone, Default)]
pub struct AccountLocks {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, account_id: &str) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the map shard is released before awaiting
        let mutex = self
            .locks
            .entry(account_id.to_string())
            .or_default()
            .clone();
        mutex.lock_owned().await
    }
}
