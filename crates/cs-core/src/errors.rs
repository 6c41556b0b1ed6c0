//! Error taxonomy shared across the clipstash crates.
//!
//! Each enum covers one concern so callers can match on exactly the
//! failures they can handle: clipboard access is transient, storage
//! failures abort the current operation, selection errors keep an
//! interactive session alive.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure of a single clipboard read or write.
///
/// Every variant is transient from the caller's point of view: the
/// monitor retries with backoff, one-shot commands report and move on.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard command timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("clipboard command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("clipboard content is not valid UTF-8")]
    InvalidData,
}

/// Failure to read or write the files clipstash owns.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("home directory is not available")]
    HomeDirUnavailable,
}

/// Failure to resolve a 1-based entry selection.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("no entry {index}: history holds {len} entries")]
    OutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Terminal failure of the monitor loop.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("giving up after {failures} consecutive clipboard failures")]
    TooManyFailures { failures: u32 },
}
