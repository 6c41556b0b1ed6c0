use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use cs_core::errors::ClipboardError;
use cs_core::ports::{ClipboardPort, HistoryStorePort};

/// What a single capture attempt did.
#[derive(Debug)]
pub enum CaptureOutcome {
    /// Stored as the newest entry.
    Stored,
    /// Empty, whitespace-only, or equal to the current head; history
    /// untouched.
    Skipped,
    /// The clipboard could not be read. Transient: the caller reports
    /// it and moves on.
    ClipboardUnavailable(ClipboardError),
}

/// Use case for the one-shot `add` action: read the clipboard once and
/// offer the content to the history store.
pub struct CaptureClipboard {
    clipboard: Arc<dyn ClipboardPort>,
    store: Arc<dyn HistoryStorePort>,
}

impl CaptureClipboard {
    pub fn from_arc(
        clipboard: Arc<dyn ClipboardPort>,
        store: Arc<dyn HistoryStorePort>,
    ) -> Self {
        Self { clipboard, store }
    }

    /// A clipboard read failure becomes [`CaptureOutcome::ClipboardUnavailable`],
    /// not an error: the command stays usable when no clipboard is
    /// around. Storage failures do error, since the user asked to
    /// persist something and nothing was persisted.
    pub async fn execute(&self) -> Result<CaptureOutcome> {
        let content = match self.clipboard.read().await {
            Ok(content) => content,
            Err(err) => {
                debug!(error = %err, "clipboard read failed");
                return Ok(CaptureOutcome::ClipboardUnavailable(err));
            }
        };

        let stored = self
            .store
            .add(&content)
            .await
            .context("save clipboard content to history")?;
        Ok(if stored {
            CaptureOutcome::Stored
        } else {
            CaptureOutcome::Skipped
        })
    }
}
