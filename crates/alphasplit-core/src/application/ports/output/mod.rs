//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `alphasplit-adapters` crate provides implementations.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `alphasplit_adapters::filesystem::LocalFilesystem` (production)
/// - `alphasplit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `open_read` maps a missing file to `ApplicationError::InputNotFound`;
///   every other failure is `ApplicationError::Read`.
/// - `create_write` truncates an existing file. The returned writer owns the
///   handle: dropping it closes the file.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Open a text file for buffered, line-oriented reading.
    fn open_read(&self, path: &Path) -> CoreResult<Box<dyn BufRead>>;

    /// Create (or truncate) a file for writing.
    fn create_write(&self, path: &Path) -> CoreResult<Box<dyn Write>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;
}
