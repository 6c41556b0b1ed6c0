//! Runtime configuration.
//!
//! Every tunable lives here and is passed in at construction time;
//! nothing reads globals or environment variables. Tests swap in
//! temporary paths and shorter intervals through the same struct.

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::StorageError;

pub const HISTORY_FILE_NAME: &str = ".clipstash_history";
pub const MONITOR_LOG_FILE_NAME: &str = ".clipstash_monitor.log";
pub const DEFAULT_SEPARATOR_TOKEN: &str = "---CLIPSTASH_ENTRY_SEPARATOR---";
pub const DEFAULT_MAX_ENTRIES: usize = 5;
pub const DEFAULT_MAX_RETRIES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the history file lives.
    pub history_path: PathBuf,
    /// Where monitor activity lines are appended.
    pub log_path: PathBuf,
    /// Upper bound on stored entries; oldest are dropped first.
    pub max_entries: usize,
    /// Line separating entry blocks in the history file.
    pub separator_token: String,
    /// Cadence of monitor polls after a successful read.
    pub poll_interval: Duration,
    /// Wait after a failed clipboard read before the next attempt.
    pub retry_backoff: Duration,
    /// Consecutive clipboard failures tolerated before the monitor
    /// gives up.
    pub max_retries: u32,
    /// Upper bound on a single clipboard subprocess call.
    pub clipboard_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(HISTORY_FILE_NAME),
            log_path: PathBuf::from(MONITOR_LOG_FILE_NAME),
            max_entries: DEFAULT_MAX_ENTRIES,
            separator_token: DEFAULT_SEPARATOR_TOKEN.to_string(),
            poll_interval: Duration::from_secs(1),
            retry_backoff: Duration::from_secs(5),
            max_retries: DEFAULT_MAX_RETRIES,
            clipboard_timeout: Duration::from_secs(2),
        }
    }
}

impl Config {
    /// Per-user configuration with both files directly under the home
    /// directory.
    pub fn resolve() -> Result<Self, StorageError> {
        let home = dirs::home_dir().ok_or(StorageError::HomeDirUnavailable)?;
        Ok(Self {
            history_path: home.join(HISTORY_FILE_NAME),
            log_path: home.join(MONITOR_LOG_FILE_NAME),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_tunables() {
        let config = Config::default();
        assert_eq!(config.max_entries, 5);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert_eq!(config.retry_backoff, Duration::from_secs(5));
        assert_eq!(config.clipboard_timeout, Duration::from_secs(2));
        assert_eq!(config.separator_token, DEFAULT_SEPARATOR_TOKEN);
    }

    #[test]
    fn resolve_places_files_under_home() {
        let config = Config::resolve().unwrap();
        assert_eq!(
            config.history_path.file_name().unwrap(),
            HISTORY_FILE_NAME
        );
        assert_eq!(
            config.log_path.file_name().unwrap(),
            MONITOR_LOG_FILE_NAME
        );
        assert_ne!(config.history_path, PathBuf::from(HISTORY_FILE_NAME));
    }
}
