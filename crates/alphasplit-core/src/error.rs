//! Unified error handling for Alphasplit Core.
//!
//! Wraps application errors behind one type with a category and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Alphasplit Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Errors from the application layer (I/O during a run).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the input word list does not exist.
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn not_found_message_names_path() {
        let err: CoreError = ApplicationError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        }
        .into();
        assert_eq!(err.to_string(), "The file 'missing.txt' was not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn write_failure_is_io() {
        let err: CoreError = ApplicationError::Write {
            path: PathBuf::from("A.txt"),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn poisoned_lock_is_internal() {
        let err: CoreError = ApplicationError::LockPoisoned.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_not_found());
    }
}
