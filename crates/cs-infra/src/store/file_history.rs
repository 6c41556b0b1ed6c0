use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use cs_core::codec;
use cs_core::errors::{SelectError, StorageError};
use cs_core::history::{HistoryEntry, HistoryLog};
use cs_core::ports::HistoryStorePort;
use cs_core::Config;

/// File-backed history store.
///
/// Every operation re-reads the history file and applies the pure
/// [`HistoryLog`] rules; mutations replace the file through a
/// temp-file rename so a crash never leaves a half-written history.
/// Mutations within one process serialize on an internal mutex.
/// Writers in other processes are not locked out; for a single-user
/// tool the rename at least keeps the file internally consistent.
pub struct FileHistoryStore {
    path: PathBuf,
    separator: String,
    max_entries: usize,
    write_lock: Mutex<()>,
}

impl FileHistoryStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.history_path.clone(),
            separator: config.separator_token.clone(),
            max_entries: config.max_entries,
            write_lock: Mutex::new(()),
        }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read and decode the current file. Missing reads as empty;
    /// any other read failure is surfaced so a mutation never
    /// clobbers a history it could not read.
    async fn load(&self) -> Result<HistoryLog, StorageError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(self.io_error(err)),
        };
        Ok(HistoryLog::from_entries(
            codec::decode(&text, &self.separator),
            self.max_entries,
        ))
    }

    /// Like [`load`](Self::load), but an unreadable file degrades to an
    /// empty log so read-only commands keep working.
    async fn load_lenient(&self) -> HistoryLog {
        match self.load().await {
            Ok(log) => log,
            Err(err) => {
                warn!(error = %err, "history unreadable, treating as empty");
                HistoryLog::new(self.max_entries)
            }
        }
    }

    async fn atomic_write(&self, content: &str) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        // `with_extension` would eat part of a dotfile name, so build
        // the sibling name by hand.
        let mut tmp_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)
            .await
            .map_err(|source| StorageError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| self.io_error(source))
    }
}

#[async_trait]
impl HistoryStorePort for FileHistoryStore {
    async fn add(&self, candidate: &str) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut log = self.load().await?;
        if !log.push(candidate) {
            return Ok(false);
        }
        self.atomic_write(&codec::encode(log.entries(), &self.separator))
            .await?;
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        Ok(self.load_lenient().await.entries().to_vec())
    }

    async fn select(&self, index: usize) -> Result<HistoryEntry, SelectError> {
        let log = self.load_lenient().await;
        Ok(log.select(index)?.clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.atomic_write("").await
    }
}
