//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They own validation, limit checks and the per-account critical sections.

pub mod account_service;
pub mod limit_policy;
pub mod locks;
pub mod transaction_service;
