//! Clipboard port - abstracts access to the system clipboard.

use async_trait::async_trait;

use crate::errors::ClipboardError;

/// Read and write the system clipboard as plain text.
///
/// Implementations must bound every call: a hung clipboard provider
/// surfaces as [`ClipboardError::Timeout`], never as an indefinite
/// block. All failures are transient; callers decide whether to retry.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Current clipboard text.
    async fn read(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard content with `text`.
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}
