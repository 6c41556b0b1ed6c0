//! # cs-infra
//!
//! File and subprocess adapters behind the cs-core ports: the
//! history file store, the xclip clipboard bridge, and the monitor
//! activity log.

pub mod activity;
pub mod clipboard;
pub mod store;

pub use activity::FileActivityLog;
pub use clipboard::{ClipboardCommand, XclipClipboard};
pub use store::FileHistoryStore;
