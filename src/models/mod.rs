//! Data models for stored records and the HTTP API.

/// Account record and account endpoint bodies
pub mod account;
/// Success/failure response envelope
pub mod envelope;
/// Number-only deserialization for money fields
pub mod number;
/// Transaction log entries and transaction endpoint bodies
pub mod transaction;
