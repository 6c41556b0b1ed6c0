use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use cs_core::errors::{ClipboardError, SelectError};
use cs_core::ports::{ClipboardPort, HistoryStorePort};

/// What a restore attempt did.
#[derive(Debug)]
pub enum RestoreOutcome {
    /// Entry copied back onto the clipboard.
    Restored,
    /// No entry at that number; the browsing session continues.
    OutOfRange { index: usize, len: usize },
    /// The clipboard write failed; the entry stays in the history.
    ClipboardUnavailable(ClipboardError),
}

/// Use case for copying a numbered history entry back to the clipboard.
pub struct RestoreEntry {
    store: Arc<dyn HistoryStorePort>,
    clipboard: Arc<dyn ClipboardPort>,
}

impl RestoreEntry {
    pub fn from_arc(
        store: Arc<dyn HistoryStorePort>,
        clipboard: Arc<dyn ClipboardPort>,
    ) -> Self {
        Self { store, clipboard }
    }

    /// `index` is 1-based, matching the numbered menu.
    pub async fn execute(&self, index: usize) -> Result<RestoreOutcome> {
        let entry = match self.store.select(index).await {
            Ok(entry) => entry,
            Err(SelectError::OutOfRange { index, len }) => {
                return Ok(RestoreOutcome::OutOfRange { index, len });
            }
            Err(SelectError::Storage(err)) => {
                return Err(err).context("read history for restore");
            }
        };

        match self.clipboard.write(entry.content()).await {
            Ok(()) => Ok(RestoreOutcome::Restored),
            Err(err) => {
                debug!(error = %err, "clipboard write failed");
                Ok(RestoreOutcome::ClipboardUnavailable(err))
            }
        }
    }
}
