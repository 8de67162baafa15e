//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `alphasplit-adapters`
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: reading the word list, writing letter files

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
