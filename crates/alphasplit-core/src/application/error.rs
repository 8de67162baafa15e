//! Application layer errors.
//!
//! These errors represent failures of the categorize run itself (reading the
//! word list, creating and writing letter files), not key derivation.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while categorizing a word list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The input word list does not exist.
    #[error("The file '{}' was not found.", path.display())]
    InputNotFound { path: PathBuf },

    /// The input could not be opened or read (permissions, bad encoding).
    #[error("Failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// A letter file could not be created.
    #[error("Failed to create {}: {reason}", path.display())]
    CreateOutput { path: PathBuf, reason: String },

    /// Writing to (or flushing) a letter file failed.
    #[error("Failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// Filesystem state lock poisoned (in-memory adapter only).
    #[error("Filesystem state is unavailable")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputNotFound { path } => vec![
                format!("No word list at: {}", path.display()),
                "Pass the word list path as the first argument".into(),
                "Or run from the directory containing all-words.txt".into(),
            ],
            Self::Read { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that you have read permissions".into(),
                "The word list must be UTF-8 text".into(),
            ],
            Self::CreateOutput { path, .. } | Self::Write { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the output directory exists".into(),
                "Check available disk space".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } => ErrorCategory::NotFound,
            Self::Read { .. } | Self::CreateOutput { .. } | Self::Write { .. } => {
                ErrorCategory::Io
            }
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
