//! Console rendering for the history menu and entry previews.

use cs_core::HistoryEntry;

/// Longest first line shown in a menu row before truncation.
const MENU_LINE_LIMIT: usize = 60;
/// Number of lines shown in a preview before the rest is elided.
const PREVIEW_LINE_LIMIT: usize = 10;

/// One numbered-menu row: the entry's first line, truncated to
/// [`MENU_LINE_LIMIT`] characters, with a ` [...]` marker when the
/// entry has more lines than the one shown.
pub fn menu_line(entry: &HistoryEntry) -> String {
    let first_line = entry.first_line();
    let mut row = if first_line.chars().count() > MENU_LINE_LIMIT {
        // Counted in chars, not bytes, so multibyte content never splits.
        let kept: String = first_line.chars().take(MENU_LINE_LIMIT - 3).collect();
        format!("{kept}...")
    } else {
        first_line.to_owned()
    };
    if entry.is_multiline() {
        row.push_str(" [...]");
    }
    row
}

/// Preview body: the full entry up to [`PREVIEW_LINE_LIMIT`] lines,
/// followed by a truncation notice when lines were cut.
pub fn preview(entry: &HistoryEntry) -> String {
    let content = entry.content().trim();
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() <= PREVIEW_LINE_LIMIT {
        return content.to_owned();
    }
    let shown = lines[..PREVIEW_LINE_LIMIT].join("\n");
    format!("{shown}\n\n(Content truncated...)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_single_line_renders_unchanged() {
        let entry = HistoryEntry::new("hello world");
        assert_eq!(menu_line(&entry), "hello world");
    }

    #[test]
    fn long_first_line_is_truncated_with_ellipsis() {
        let entry = HistoryEntry::new("x".repeat(61));
        let row = menu_line(&entry);
        assert_eq!(row.chars().count(), 60);
        assert!(row.ends_with("..."));
        assert!(row.starts_with(&"x".repeat(57)));
    }

    #[test]
    fn sixty_char_line_is_not_truncated() {
        let entry = HistoryEntry::new("y".repeat(60));
        assert_eq!(menu_line(&entry), "y".repeat(60));
    }

    #[test]
    fn multibyte_first_line_truncates_on_char_boundaries() {
        let entry = HistoryEntry::new("猫".repeat(80));
        let row = menu_line(&entry);
        assert_eq!(row.chars().count(), 60);
        assert!(row.ends_with("..."));
    }

    #[test]
    fn multiline_entry_gets_a_marker() {
        let entry = HistoryEntry::new("first line\nsecond line");
        assert_eq!(menu_line(&entry), "first line [...]");
    }

    #[test]
    fn long_and_multiline_combine_marker_with_ellipsis() {
        let entry = HistoryEntry::new(format!("{}\nmore", "z".repeat(70)));
        let row = menu_line(&entry);
        assert!(row.ends_with("... [...]"));
    }

    #[test]
    fn short_preview_is_the_full_content() {
        let entry = HistoryEntry::new("one\ntwo\nthree");
        assert_eq!(preview(&entry), "one\ntwo\nthree");
    }

    #[test]
    fn ten_line_preview_is_not_truncated() {
        let content = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let entry = HistoryEntry::new(&content);
        assert_eq!(preview(&entry), content);
    }

    #[test]
    fn eleventh_line_triggers_the_truncation_notice() {
        let content = (1..=11).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let entry = HistoryEntry::new(content);
        let body = preview(&entry);
        assert!(body.ends_with("\n\n(Content truncated...)"));
        assert!(body.contains("10"));
        assert!(!body.contains("11"));
    }
}
