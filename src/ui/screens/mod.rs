//! Screen rendering
//!
//! One module per screen, each exporting a `render_*` function that draws a
//! [`Snapshot`](crate::snapshot::Snapshot) into a frame area and keeps no state
//! of its own:
//!
//! - [`start`]: title, description and question count
//! - [`question`]: the current prompt with its options
//! - [`score`]: final score and per-question review
//! - [`status`]: bottom bar with progress and keybindings

pub mod question;
pub mod score;
pub mod start;
pub mod status;

pub use question::render_question_screen;
pub use score::render_score_screen;
pub use start::render_start_screen;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding},
};

/// Columns taken by the card's borders and horizontal padding
pub(super) const CARD_H_INSET: u16 = 2 + 4;

/// Rows taken by the card's borders and vertical padding
pub(super) const CARD_V_INSET: u16 = 2 + 2;

/// Centered card the screens draw into, capped at 80 columns
pub(super) fn card_area(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(80)])
        .flex(Flex::Center)
        .areas(area);
    column
}

pub(super) fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(2, 2, 1, 1))
}

/// Display width of `text` in terminal columns
pub(super) fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Greedy word wrap by display width. Words wider than a row are split
/// between characters, which is also how unspaced CJK text breaks.
pub(super) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if !current.is_empty() && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if !current.is_empty() {
            if word_width <= width || current_width + 1 >= width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            } else {
                // Too wide for any row: start it here and break mid-word
                current.push(' ');
                current_width += 1;
            }
        }

        let mut buf = [0u8; 4];
        for ch in word.chars() {
            let ch_width = display_width(ch.encode_utf8(&mut buf));
            if !current.is_empty() && current_width + ch_width > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Append `text` wrapped to `width`, every row prefixed with `indent`
pub(super) fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    indent: &str,
    text: &str,
    width: usize,
    style: Style,
) {
    let text_width = width.saturating_sub(display_width(indent)).max(1);
    for row in wrap_text(text, text_width) {
        lines.push(Line::from(Span::styled(format!("{}{}", indent, row), style)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_long_word_splits_by_char() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_wide_characters() {
        // Each kana is two columns wide
        let rows = wrap_text("あいうえお", 4);
        assert_eq!(rows, vec!["あい", "うえ", "お"]);
        assert!(rows.iter().all(|r| display_width(r) <= 4));
    }

    #[test]
    fn test_wrap_keeps_prefix_before_unspaced_text() {
        assert_eq!(wrap_text("2. あいうえお", 6), vec!["2. あ", "いう", "えお"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_push_wrapped_indents_every_row() {
        let mut lines = Vec::new();
        push_wrapped(&mut lines, "  ", "aaaa bbbb", 6, Style::default());
        let rows: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(rows, vec!["  aaaa", "  bbbb"]);
    }
}
