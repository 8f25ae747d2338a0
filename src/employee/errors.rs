//! # Store Errors
//!
//! Error types for employee store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Employee store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An employee with this identifier is already stored
    #[error("employee with ID {0} already exists")]
    DuplicateKey(i64),

    /// A writer panicked while holding the store lock
    #[error("employee store lock poisoned")]
    LockPoisoned,
}
