//! Store error types
//!
//! Two domain-level failure kinds exist: a key that is absent for
//! get/update/delete, and a key that already exists for add. Everything
//! else is an unexpected backend failure and propagates unmodified.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by configuration store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item exists for the requested key
    #[error("no configuration item with key \"{0}\"")]
    NotFound(String),

    /// An item with this key already exists
    #[error("configuration item with key \"{0}\" already exists")]
    Conflict(String),

    /// Underlying SQLite failure
    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    /// Connection pool failure
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Internal store failure (poisoned lock in the in-memory backend)
    #[error("internal store error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_the_key() {
        let err = StoreError::NotFound("app/theme".to_string());
        assert!(err.to_string().contains("app/theme"));
    }

    #[test]
    fn test_conflict_display_names_the_key() {
        let err = StoreError::Conflict("app/theme".to_string());
        let display = err.to_string();
        assert!(display.contains("app/theme"));
        assert!(display.contains("already exists"));
    }
}
