//! Error types for Bookshelf
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors fall into two groups: failures establishing storage (fatal to store
//! construction) and failures of a single operation (returned to the caller,
//! never retried internally).

use thiserror::Error;

/// Result type alias using our BookshelfError type
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Main error type for Bookshelf
#[derive(Error, Debug)]
pub enum BookshelfError {
    // ===== Startup Errors =====

    /// Connection pool or schema could not be established
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // ===== Operation Errors =====

    /// Statement execution failed (malformed SQL, constraint violation, lost connection)
    #[error("Storage error: {0}")]
    StorageError(#[from] sqlx::Error),

    /// Listing cursor is not a non-negative decimal offset
    #[error("Invalid cursor: {cursor:?}")]
    InvalidCursor { cursor: String },

    /// No book is stored under the requested id
    #[error("Book not found: {0}")]
    BookNotFound(i64),
}

impl BookshelfError {
    /// Create a StorageUnavailable error from any displayable cause
    pub fn unavailable<E: std::fmt::Display>(context: &str, err: E) -> Self {
        BookshelfError::StorageUnavailable(format!("{}: {}", context, err))
    }

    /// Create an InvalidCursor error for the rejected input
    pub fn invalid_cursor<S: Into<String>>(cursor: S) -> Self {
        BookshelfError::InvalidCursor {
            cursor: cursor.into(),
        }
    }

    /// Check if error means the requested book does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookshelfError::BookNotFound(_))
    }

    /// Check if error is transient and the caller may retry the operation
    ///
    /// The store itself never retries. Pool exhaustion and I/O failures are
    /// reported here so callers can apply their own backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BookshelfError::StorageError(sqlx::Error::PoolTimedOut)
                | BookshelfError::StorageError(sqlx::Error::Io(_))
        )
    }

    /// Get user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            BookshelfError::StorageUnavailable(_) => {
                "The book database is unavailable. Check SQL_DATABASE_URL and try again.".to_string()
            }
            BookshelfError::BookNotFound(id) => format!("No book with id {} exists.", id),
            BookshelfError::InvalidCursor { cursor } => {
                format!("'{}' is not a valid page token.", cursor)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookshelfError::BookNotFound(42);
        assert_eq!(err.to_string(), "Book not found: 42");

        let err = BookshelfError::invalid_cursor("abc");
        assert_eq!(err.to_string(), "Invalid cursor: \"abc\"");
    }

    #[test]
    fn test_unavailable_carries_context() {
        let err = BookshelfError::unavailable("failed to create books table", "disk full");
        assert_eq!(
            err.to_string(),
            "Storage unavailable: failed to create books table: disk full"
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(BookshelfError::BookNotFound(1).is_not_found());
        assert!(!BookshelfError::invalid_cursor("x").is_not_found());

        assert!(BookshelfError::StorageError(sqlx::Error::PoolTimedOut).is_retryable());
        assert!(!BookshelfError::StorageError(sqlx::Error::RowNotFound).is_retryable());
        assert!(!BookshelfError::BookNotFound(1).is_retryable());
    }

    #[test]
    fn test_user_message() {
        let msg = BookshelfError::BookNotFound(7).user_message();
        assert!(msg.contains("7"));

        let msg = BookshelfError::StorageUnavailable("x".into()).user_message();
        assert!(msg.contains("SQL_DATABASE_URL"));
    }
}
