//! Append-only activity log for the monitor.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use cs_core::errors::StorageError;
use cs_core::ports::ActivityLogPort;

/// Appends timestamped event lines to the monitor log file.
///
/// Line format: `[2026-08-23 09:30:12] monitor started`. The file is
/// created on first append and never rotated or parsed back. The file
/// is opened per append, so a long-running monitor keeps no handle
/// open between events.
pub struct FileActivityLog {
    path: PathBuf,
}

impl FileActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ActivityLogPort for FileActivityLog {
    async fn append(&self, message: &str) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|err| self.io_error(err))?;
        }

        let line = format!(
            "[{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| self.io_error(err))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|err| self.io_error(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::tempdir;

    #[tokio::test]
    async fn appends_timestamped_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".clipstash_monitor.log");
        let log = FileActivityLog::new(&path);

        log.append("monitor started").await.unwrap();
        log.append("clipboard updated").await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] monitor started"));
        assert!(lines[1].ends_with("] clipboard updated"));

        let stamp = lines[0]
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .unwrap();
        NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").unwrap();
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("activity.log");
        let log = FileActivityLog::new(&path);

        log.append("error: clipboard command timed out").await.unwrap();

        assert!(path.exists());
    }
}
