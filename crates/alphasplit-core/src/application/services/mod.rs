//! Application services - orchestrate use cases.

pub mod categorize_service;
mod groups;

pub use categorize_service::{CategorizeReport, CategorizeService, GroupSummary};
