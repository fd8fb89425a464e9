//! # Storage Error Types
//!
//! Error types for storage-medium and cart-session operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CartStore caller (the UI-binding layer)                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Transient notification, or silent retry on next mutation           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Restore Is Special
//! `CartStore::open` swallows storage errors entirely: a missing key, an
//! unreachable medium, or a corrupt payload all degrade to the empty cart.
//! These variants therefore only surface from *writes*.

use thiserror::Error;

use spark_core::CoreError;

/// Storage and session operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium could not be reached.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A read or write against the medium failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// The cart snapshot could not be serialized.
    ///
    /// Deserialization failures never surface here: restore falls back to
    /// the empty cart instead.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),

    /// A cart business rule was violated (wraps CoreError).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// True when the error is the empty-cart checkout rejection, the only
    /// variant with dedicated UI copy.
    pub fn is_empty_checkout(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::EmptyCheckout))
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → StoreError::PoolExhausted
/// sqlx::Error::PoolClosed     → StoreError::ConnectionFailed
/// Other                       → StoreError::QueryFailed
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),
            other => StoreError::QueryFailed(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_checkout_detection() {
        let err = StoreError::Core(CoreError::EmptyCheckout);
        assert!(err.is_empty_checkout());
        assert_eq!(err.to_string(), "Your cart is empty!");

        let other = StoreError::QueryFailed("boom".to_string());
        assert!(!other.is_empty_checkout());
    }
}
