//! # cs-core
//!
//! Core domain model and ports for clipstash.
//!
//! This crate contains the pure history, format, and configuration
//! logic without any infrastructure dependencies.

// Public module exports
pub mod codec;
pub mod config;
pub mod errors;
pub mod history;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use errors::{ClipboardError, MonitorError, SelectError, StorageError};
pub use history::{HistoryEntry, HistoryLog};
