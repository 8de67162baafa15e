//! Application layer for Alphasplit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`CategorizeService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CategorizeReport, CategorizeService, GroupSummary};

pub use ports::Filesystem;

pub use error::ApplicationError;
