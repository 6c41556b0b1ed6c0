//! Plain-text history file format.
//!
//! Entry blocks are stored newest first, joined by a separator line.
//! Content lines that could be mistaken for the separator, and lines
//! already starting with a backslash, are prefixed with a backslash on
//! encode and unescaped on decode, so arbitrary content round-trips
//! exactly even when it contains the separator token itself.

use crate::history::HistoryEntry;

/// Render entries into the history file text.
pub fn encode(entries: &[HistoryEntry], separator: &str) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| escape_block(entry.content(), separator))
        .collect();
    blocks.join(&format!("\n{separator}\n"))
}

/// Parse history file text back into entries.
///
/// Blocks that are empty or whitespace-only are skipped: the store
/// never writes them, but a hand-edited or truncated file may contain
/// them and must not produce phantom entries.
pub fn decode(text: &str, separator: &str) -> Vec<HistoryEntry> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut blocks: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if line == separator {
            blocks.push(current.join("\n"));
            current = Vec::new();
        } else {
            current.push(unescape_line(line));
        }
    }
    blocks.push(current.join("\n"));

    blocks
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .map(HistoryEntry::new)
        .collect()
}

fn escape_block(content: &str, separator: &str) -> String {
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            if line == separator || line.starts_with('\\') {
                format!("\\{line}")
            } else {
                line.to_string()
            }
        })
        .collect();
    lines.join("\n")
}

fn unescape_line(line: &str) -> String {
    line.strip_prefix('\\').unwrap_or(line).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: &str = "---CLIPSTASH_ENTRY_SEPARATOR---";

    fn entries(contents: &[&str]) -> Vec<HistoryEntry> {
        contents.iter().copied().map(HistoryEntry::new).collect()
    }

    fn round_trip(contents: &[&str]) {
        let original = entries(contents);
        let decoded = decode(&encode(&original, SEP), SEP);
        assert_eq!(decoded, original);
    }

    #[test]
    fn encodes_blocks_joined_by_separator_line() {
        let text = encode(&entries(&["newest", "older"]), SEP);
        assert_eq!(text, format!("newest\n{SEP}\nolder"));
    }

    #[test]
    fn round_trips_multiline_and_whitespace_content() {
        round_trip(&["one"]);
        round_trip(&["first\nsecond\nthird", "single"]);
        round_trip(&["keeps trailing newline\n", "  keeps indent"]);
        round_trip(&["inner\n\nblank line kept"]);
    }

    #[test]
    fn round_trips_content_containing_the_separator() {
        let tricky = format!("above\n{SEP}\nbelow");
        round_trip(&[&tricky, "plain"]);
    }

    #[test]
    fn round_trips_backslash_prefixed_lines() {
        round_trip(&["\\not an escape", &format!("\\{SEP}")]);
    }

    #[test]
    fn escaped_separator_never_splits_the_block() {
        let tricky = format!("above\n{SEP}\nbelow");
        let decoded = decode(&encode(&entries(&[&tricky]), SEP), SEP);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].content(), tricky);
    }

    #[test]
    fn decodes_empty_input_to_no_entries() {
        assert!(decode("", SEP).is_empty());
        assert!(decode("   \n\t", SEP).is_empty());
    }

    #[test]
    fn skips_blank_blocks_from_edited_files() {
        let text = format!("real\n{SEP}\n\n{SEP}\nalso real\n{SEP}\n");
        let decoded = decode(&text, SEP);
        assert_eq!(decoded, entries(&["real", "also real"]));
    }

    #[test]
    fn empty_entry_list_encodes_to_empty_text() {
        assert_eq!(encode(&[], SEP), "");
    }
}
