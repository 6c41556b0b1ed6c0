//! The in-memory clipboard history and its ordering rules.

use crate::errors::SelectError;

/// One captured clipboard payload.
///
/// Entries carry no identity beyond their content and their position in
/// the log; two captures of the same text are indistinguishable. Content
/// is kept verbatim, including surrounding whitespace, so restoring an
/// entry puts back exactly what was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn content(&self) -> &str {
        &self.0
    }

    /// First line of the trimmed content, for one-line listings.
    pub fn first_line(&self) -> &str {
        self.0.trim().split('\n').next().unwrap_or("")
    }

    /// Whether the trimmed content spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.0.trim().contains('\n')
    }
}

/// Bounded, deduplicated clipboard history, most recent first.
///
/// Pure in-memory value; persistence wraps it in cs-infra. After every
/// mutation:
/// - at most `max_entries` entries are kept, oldest dropped first;
/// - the newest entry sits at index 0;
/// - pushing content equal to the current head (after trimming
///   surrounding whitespace) is a no-op, so adjacent duplicates never
///   occur. Matching an older entry is not a duplicate: re-copying
///   something from last week should surface it as recent again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl HistoryLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Rebuild a log from already-decoded entries, enforcing capacity.
    pub fn from_entries(entries: Vec<HistoryEntry>, max_entries: usize) -> Self {
        let mut log = Self {
            entries,
            max_entries,
        };
        log.entries.truncate(log.max_entries);
        log
    }

    /// Store `candidate` as the newest entry.
    ///
    /// Returns `false` without mutating when the candidate is empty or
    /// whitespace-only, or when it matches the current head after
    /// trimming. Otherwise prepends the entry and drops the oldest
    /// entries beyond capacity.
    pub fn push(&mut self, candidate: &str) -> bool {
        if candidate.trim().is_empty() {
            return false;
        }
        if let Some(head) = self.entries.first() {
            if head.content().trim() == candidate.trim() {
                return false;
            }
        }
        self.entries.insert(0, HistoryEntry::new(candidate));
        self.entries.truncate(self.max_entries);
        true
    }

    /// Resolve a 1-based index as shown in the numbered menu.
    pub fn select(&self, index: usize) -> Result<&HistoryEntry, SelectError> {
        if index == 0 || index > self.entries.len() {
            return Err(SelectError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(&self.entries[index - 1])
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
