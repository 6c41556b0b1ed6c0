//! # cs-app
//!
//! Application layer for clipstash: one use case per CLI action plus
//! the clipboard polling monitor. Everything here talks to the outside
//! world through the cs-core ports.

pub mod monitor;
pub mod usecases;

pub use monitor::{ClipboardMonitor, MonitorEvent, StopReason};
pub use usecases::{
    CaptureClipboard, CaptureOutcome, ClearHistory, ListHistory, RestoreEntry, RestoreOutcome,
};
