//! Interactive history browser for the `show` action.
//!
//! Command parsing is split from dispatch: [`parse_command`] turns one
//! line of input into a [`BrowserCommand`] without touching history or
//! clipboard, and [`Browser::run`] loops over stdin applying them.

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use cs_app::{ClearHistory, ListHistory, RestoreEntry, RestoreOutcome};
use cs_core::ports::{ClipboardPort, HistoryStorePort};
use cs_core::HistoryEntry;

use crate::render;

/// One parsed line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCommand {
    /// `q`: leave the browser.
    Quit,
    /// `c`: clear the history after confirmation.
    Clear,
    /// `p <n>` or `p<n>`: show the full content of entry `n`.
    Preview(usize),
    /// A bare number: copy that entry back to the clipboard.
    Select(usize),
    /// Anything else, including `p` without a number and index zero.
    Invalid,
}

/// Parse one line of menu input.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// Indices are the 1-based menu numbers; zero and non-numeric input
/// are [`BrowserCommand::Invalid`]. Range checking happens later,
/// against the history the menu was rendered from.
pub fn parse_command(line: &str) -> BrowserCommand {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "q" => return BrowserCommand::Quit,
        "c" => return BrowserCommand::Clear,
        _ => {}
    }
    if let Some(rest) = input.strip_prefix('p') {
        return match parse_index(rest) {
            Some(index) => BrowserCommand::Preview(index),
            None => BrowserCommand::Invalid,
        };
    }
    match parse_index(&input) {
        Some(index) => BrowserCommand::Select(index),
        None => BrowserCommand::Invalid,
    }
}

fn parse_index(text: &str) -> Option<usize> {
    match text.trim().parse::<usize>() {
        Ok(index) if index >= 1 => Some(index),
        _ => None,
    }
}

/// The numbered menu over stored history.
pub struct Browser {
    list: ListHistory,
    restore: RestoreEntry,
    clear: ClearHistory,
}

impl Browser {
    pub fn new(store: Arc<dyn HistoryStorePort>, clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self {
            list: ListHistory::from_arc(store.clone()),
            restore: RestoreEntry::from_arc(store.clone(), clipboard),
            clear: ClearHistory::from_arc(store),
        }
    }

    /// Run the menu loop until the user quits, copies an entry, clears
    /// the history, or closes stdin.
    ///
    /// The history is re-read on every iteration, so entries captured
    /// by a concurrently running monitor show up while browsing.
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let entries = self.list.execute().await?;
            if entries.is_empty() {
                println!("Clipboard history is empty");
                return Ok(());
            }
            print_menu(&entries);

            let Some(line) = prompt(&mut lines, "> ").await? else {
                return Ok(());
            };

            match parse_command(&line) {
                BrowserCommand::Quit => return Ok(()),
                BrowserCommand::Clear => {
                    if self.confirm_and_clear(&mut lines).await? {
                        return Ok(());
                    }
                }
                BrowserCommand::Preview(index) => {
                    match entries.get(index - 1) {
                        Some(entry) => {
                            println!("\n=== Preview ===");
                            println!("{}", render::preview(entry));
                            if prompt(&mut lines, "\nPress Enter to continue").await?.is_none() {
                                return Ok(());
                            }
                        }
                        None => println!("Invalid number"),
                    }
                }
                BrowserCommand::Select(index) => match self.restore.execute(index).await? {
                    RestoreOutcome::Restored => {
                        println!("Copied to clipboard!");
                        return Ok(());
                    }
                    RestoreOutcome::OutOfRange { .. } => println!("Invalid number"),
                    RestoreOutcome::ClipboardUnavailable(_) => {
                        println!("Error setting clipboard content");
                    }
                },
                BrowserCommand::Invalid => {
                    println!("Please enter a valid number, 'p <n>', 'c', or 'q'");
                }
            }
        }
    }

    /// Returns `true` when the history was cleared and the browser
    /// should close.
    async fn confirm_and_clear(&self, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
        let Some(answer) = prompt(
            lines,
            "Are you sure you want to clear clipboard history? (y/n): ",
        )
        .await?
        else {
            return Ok(false);
        };
        let answer = answer.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            return Ok(false);
        }
        self.clear.execute().await?;
        println!("Clipboard history cleared.");
        Ok(true)
    }
}

fn print_menu(entries: &[HistoryEntry]) {
    println!("\n=== Clipboard History ===");
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, render::menu_line(entry));
    }
    println!("\nEnter a number to copy, 'p <n>' to preview, 'c' to clear all, 'q' to quit");
}

/// Print `text` without a trailing newline and read one line back.
/// `None` means stdin was closed.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
