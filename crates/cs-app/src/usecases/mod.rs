//! Business logic use cases.
//!
//! Each CLI action maps onto one use case; the interactive browser
//! combines ListHistory, RestoreEntry, and ClearHistory.

pub mod capture_clipboard;
pub mod clear_history;
pub mod list_history;
pub mod restore_entry;

pub use capture_clipboard::{CaptureClipboard, CaptureOutcome};
pub use clear_history::ClearHistory;
pub use list_history::ListHistory;
pub use restore_entry::{RestoreEntry, RestoreOutcome};
