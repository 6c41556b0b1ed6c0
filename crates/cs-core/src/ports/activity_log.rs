//! Activity log port - the append-only monitor diagnostic file.

use async_trait::async_trait;

use crate::errors::StorageError;

/// Append-only, timestamped event log.
///
/// Diagnostic output only; nothing ever parses it back. Callers treat
/// append failures as non-fatal.
#[async_trait]
pub trait ActivityLogPort: Send + Sync {
    /// Append one event line, timestamped by the implementation.
    async fn append(&self, message: &str) -> Result<(), StorageError>;
}
