use std::sync::Arc;

use anyhow::{Context, Result};

use cs_core::history::HistoryEntry;
use cs_core::ports::HistoryStorePort;

/// Use case for reading the history, most recent first.
pub struct ListHistory {
    store: Arc<dyn HistoryStorePort>,
}

impl ListHistory {
    pub fn from_arc(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<HistoryEntry>> {
        self.store.list().await.context("read clipboard history")
    }
}
