//! History store port - persistence for the clipboard history.

use async_trait::async_trait;

use crate::errors::{SelectError, StorageError};
use crate::history::HistoryEntry;

/// Persistent, bounded clipboard history.
///
/// Implementations re-read the backing storage on every call, so
/// separate invocations of the tool observe each other's writes, and
/// serialize their own mutations internally. Ordering and
/// deduplication follow [`HistoryLog`](crate::history::HistoryLog).
#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    /// Store `candidate` as the newest entry.
    ///
    /// Returns `Ok(false)` without touching storage when the candidate
    /// is empty, whitespace-only, or equal to the current head after
    /// trimming; `Ok(true)` once the entry is persisted and the
    /// history trimmed to capacity.
    async fn add(&self, candidate: &str) -> Result<bool, StorageError>;

    /// All entries, most recent first, never more than the configured
    /// capacity. A missing or unreadable history reads as empty.
    async fn list(&self) -> Result<Vec<HistoryEntry>, StorageError>;

    /// Entry at the given 1-based position of [`list`](Self::list).
    async fn select(&self, index: usize) -> Result<HistoryEntry, SelectError>;

    /// Drop all entries.
    async fn clear(&self) -> Result<(), StorageError>;
}
