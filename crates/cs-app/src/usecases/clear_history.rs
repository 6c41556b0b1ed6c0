use std::sync::Arc;

use anyhow::{Context, Result};

use cs_core::ports::HistoryStorePort;

/// Use case for dropping every stored entry.
pub struct ClearHistory {
    store: Arc<dyn HistoryStorePort>,
}

impl ClearHistory {
    pub fn from_arc(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<()> {
        self.store.clear().await.context("clear clipboard history")
    }
}
