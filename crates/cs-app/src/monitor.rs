//! The clipboard polling loop.
//!
//! One cooperative task: read the clipboard on a fixed cadence, hand
//! changed content to the history store, and back off after failures.
//! Observations are emitted as [`MonitorEvent`]s over a channel; the
//! binary decides how to print and log them.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;
use tracing::{debug, warn};

use cs_core::errors::MonitorError;
use cs_core::ports::{ClipboardPort, HistoryStorePort};
use cs_core::Config;

/// What the monitor observed, in emission order.
#[derive(Debug, Clone)]
pub enum MonitorEvent {
    Started,
    /// A new entry went into the history.
    Updated { at: DateTime<Local> },
    /// One poll failed (clipboard read or history write); `failures`
    /// counts the consecutive run.
    PollFailed { failures: u32, message: String },
    /// The startup access test failed. Not counted against the
    /// failure budget.
    ProbeFailed { message: String },
    /// Always the final event.
    Stopped { reason: StopReason },
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Shutdown was requested; not an error.
    Cancelled,
    /// The consecutive-failure budget is exhausted.
    TooManyFailures,
}

enum PollOutcome {
    Ok,
    Failed(String),
}

/// Polls the clipboard and feeds the history store.
///
/// `run` consumes the monitor: the loop is one-shot, and dropping the
/// event sender on return is what tells the consumer the stream is
/// complete.
pub struct ClipboardMonitor {
    clipboard: Arc<dyn ClipboardPort>,
    store: Arc<dyn HistoryStorePort>,
    config: Config,
    events: mpsc::Sender<MonitorEvent>,
}

impl ClipboardMonitor {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        store: Arc<dyn HistoryStorePort>,
        config: Config,
        events: mpsc::Sender<MonitorEvent>,
    ) -> Self {
        Self {
            clipboard,
            store,
            config,
            events,
        }
    }

    /// Poll until shutdown is signalled or the failure budget runs out.
    ///
    /// `max_retries` consecutive failed polls stop the loop with
    /// [`MonitorError::TooManyFailures`]; any successful read resets
    /// the count. A failed poll waits `retry_backoff` instead of the
    /// normal `poll_interval` before the next attempt. Cancellation
    /// wins from any sub-state and is not an error.
    pub async fn run(
        self,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), MonitorError> {
        self.emit(MonitorEvent::Started).await;
        self.probe().await;

        // The baseline is empty on purpose: content already sitting on
        // the clipboard at startup becomes the first capture unless the
        // store holds it as head.
        let mut last_observed = String::new();
        let mut failures: u32 = 0;

        loop {
            let wait = match self.poll_once(&mut last_observed).await {
                PollOutcome::Ok => {
                    failures = 0;
                    self.config.poll_interval
                }
                PollOutcome::Failed(message) => {
                    failures += 1;
                    warn!(failures, %message, "clipboard poll failed");
                    self.emit(MonitorEvent::PollFailed { failures, message })
                        .await;
                    if failures >= self.config.max_retries {
                        self.emit(MonitorEvent::Stopped {
                            reason: StopReason::TooManyFailures,
                        })
                        .await;
                        return Err(MonitorError::TooManyFailures { failures });
                    }
                    self.config.retry_backoff
                }
            };

            tokio::select! {
                _ = shutdown.changed() => {
                    self.emit(MonitorEvent::Stopped {
                        reason: StopReason::Cancelled,
                    })
                    .await;
                    return Ok(());
                }
                _ = sleep(wait) => {}
            }
        }
    }

    /// One tick: read the clipboard and store changed content.
    ///
    /// `last_observed` is updated on every successful read, stored or
    /// not, so an entry that was merely a duplicate of the head is not
    /// re-offered every second. It stays untouched when the read or
    /// the store fails, so the same content is retried next tick.
    async fn poll_once(&self, last_observed: &mut String) -> PollOutcome {
        let content = match self.clipboard.read().await {
            Ok(content) => content,
            Err(err) => return PollOutcome::Failed(err.to_string()),
        };

        if content.trim() != last_observed.trim() {
            match self.store.add(&content).await {
                Ok(true) => {
                    self.emit(MonitorEvent::Updated { at: Local::now() }).await;
                }
                Ok(false) => {
                    debug!("clipboard change not stored (empty or duplicate of head)");
                }
                Err(err) => return PollOutcome::Failed(err.to_string()),
            }
        }
        *last_observed = content;
        PollOutcome::Ok
    }

    /// Startup access test. Logged and emitted, never counted against
    /// the failure budget.
    async fn probe(&self) {
        match self.clipboard.read().await {
            Ok(_) => debug!("initial clipboard probe ok"),
            Err(err) => {
                warn!(error = %err, "initial clipboard probe failed");
                self.emit(MonitorEvent::ProbeFailed {
                    message: err.to_string(),
                })
                .await;
            }
        }
    }

    async fn emit(&self, event: MonitorEvent) {
        // A dropped receiver just means nobody is watching anymore.
        if self.events.send(event).await.is_err() {
            debug!("monitor event receiver dropped");
        }
    }
}
