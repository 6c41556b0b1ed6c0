//! Port interfaces between the use cases and the outside world.
//!
//! Ports define the contract between the application logic and the
//! infrastructure implementations, keeping the core history rules
//! independent of files and subprocesses. The concrete xclip and file
//! adapters live in cs-infra.

pub mod activity_log;
pub mod clipboard;
pub mod history_store;

pub use activity_log::ActivityLogPort;
pub use clipboard::ClipboardPort;
pub use history_store::HistoryStorePort;
