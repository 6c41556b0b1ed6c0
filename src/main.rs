//! clipstash command-line entry point.
//!
//! Wires the xclip adapter, the file-backed store, and the activity
//! log together, then dispatches to one of four actions. All console
//! output happens here; the library crates only return values and
//! emit events.

mod browser;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::signal::ctrl_c;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use cs_app::{
    CaptureClipboard, CaptureOutcome, ClearHistory, ClipboardMonitor, MonitorEvent, StopReason,
};
use cs_core::ports::{ActivityLogPort, ClipboardPort, HistoryStorePort};
use cs_core::Config;
use cs_infra::{FileActivityLog, FileHistoryStore, XclipClipboard};

#[derive(Parser)]
#[command(
    name = "clipstash",
    version,
    about = "Bounded clipboard history with an interactive restore menu"
)]
struct Cli {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Save the current clipboard content to the history
    Add,
    /// Browse the history and copy an entry back to the clipboard
    Show,
    /// Watch the clipboard and record every change
    Monitor,
    /// Delete all stored history
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::resolve().context("locate per-user clipstash files")?;

    let store: Arc<dyn HistoryStorePort> = Arc::new(FileHistoryStore::new(&config));
    let clipboard: Arc<dyn ClipboardPort> =
        Arc::new(XclipClipboard::new(config.clipboard_timeout));

    match cli.action {
        Action::Add => add(clipboard, store).await,
        Action::Show => browser::Browser::new(store, clipboard).run().await,
        Action::Monitor => monitor(clipboard, store, config).await,
        Action::Clear => clear(store).await,
    }
}

/// One-shot capture. An unreachable clipboard is reported but is not a
/// failure exit; storage errors are.
async fn add(clipboard: Arc<dyn ClipboardPort>, store: Arc<dyn HistoryStorePort>) -> Result<()> {
    match CaptureClipboard::from_arc(clipboard, store).execute().await? {
        CaptureOutcome::Stored => debug!("clipboard content stored"),
        CaptureOutcome::Skipped => debug!("clipboard content skipped"),
        CaptureOutcome::ClipboardUnavailable(err) => {
            debug!(error = %err, "clipboard unavailable");
            println!("Error accessing clipboard");
        }
    }
    Ok(())
}

async fn clear(store: Arc<dyn HistoryStorePort>) -> Result<()> {
    ClearHistory::from_arc(store).execute().await?;
    println!("Clipboard history cleared.");
    Ok(())
}

/// Run the monitor until ctrl-c or its failure budget is exhausted.
///
/// The spawned task owns the polling; this loop turns its events into
/// console lines and activity-log entries, and forwards ctrl-c as a
/// shutdown request. `None` from the event channel means the task has
/// returned and its exit result is ready to collect.
async fn monitor(
    clipboard: Arc<dyn ClipboardPort>,
    store: Arc<dyn HistoryStorePort>,
    config: Config,
) -> Result<()> {
    let activity: Arc<dyn ActivityLogPort> =
        Arc::new(FileActivityLog::new(config.log_path.clone()));
    let max_retries = config.max_retries;

    let (event_tx, mut event_rx) = mpsc::channel(16);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let monitor = ClipboardMonitor::new(clipboard, store, config, event_tx);
    let task = tokio::spawn(monitor.run(shutdown_rx));

    loop {
        tokio::select! {
            maybe = event_rx.recv() => match maybe {
                Some(event) => handle_event(activity.as_ref(), &event, max_retries).await,
                None => break,
            },
            _ = ctrl_c() => {
                debug!("ctrl-c received, requesting monitor shutdown");
                let _ = shutdown_tx.send(true);
            }
        }
    }

    task.await.context("join monitor task")??;
    Ok(())
}

async fn handle_event(activity: &dyn ActivityLogPort, event: &MonitorEvent, max_retries: u32) {
    match event {
        MonitorEvent::Started => println!("Starting clipboard monitor..."),
        MonitorEvent::Updated { at } => {
            println!("Clipboard updated at {}", at.format("%H:%M:%S"));
        }
        // Individual failures only reach the activity log; the console
        // stays quiet until the budget runs out.
        MonitorEvent::PollFailed { .. } => {}
        MonitorEvent::ProbeFailed { .. } => println!("Error accessing clipboard"),
        MonitorEvent::Stopped {
            reason: StopReason::Cancelled,
        } => println!("\nStopping clipboard monitor."),
        MonitorEvent::Stopped {
            reason: StopReason::TooManyFailures,
        } => println!("Too many errors ({max_retries}), exiting"),
    }

    if let Err(err) = activity.append(&activity_line(event)).await {
        warn!(error = %err, "activity log append failed");
    }
}

fn activity_line(event: &MonitorEvent) -> String {
    match event {
        MonitorEvent::Started => "monitor started".to_string(),
        MonitorEvent::Updated { .. } => "clipboard updated".to_string(),
        MonitorEvent::PollFailed { message, .. } | MonitorEvent::ProbeFailed { message } => {
            format!("error: {message}")
        }
        MonitorEvent::Stopped { .. } => "monitor stopped".to_string(),
    }
}
