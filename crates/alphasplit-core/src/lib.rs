//! Alphasplit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Alphasplit
//! word-list splitter, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          alphasplit-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (CategorizeService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   alphasplit-adapters (Infrastructure)  │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │              (Letter)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use alphasplit_core::application::CategorizeService;
//!
//! let service = CategorizeService::new(Box::new(filesystem));
//! let report = service.categorize("all-words.txt", ".")?;
//! for group in &report.groups {
//!     println!("- {}", group.file_name);
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CategorizeReport, CategorizeService, GroupSummary, ports::Filesystem,
    };
    pub use crate::domain::Letter;
    pub use crate::error::{CoreError, CoreResult};
}
