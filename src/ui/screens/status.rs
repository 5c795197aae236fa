//! Status bar rendering with keybindings and progress

use crate::snapshot::{Screen, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, snapshot: &Snapshot, message: &str) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: progress badge and status message
    let total = snapshot.questions().len();
    let (badge, badge_color) = match (snapshot.screen(), snapshot.current_index()) {
        (Screen::Question, Some(index)) => (
            format!(" Q {}/{} ", index + 1, total),
            DEFAULT_THEME.primary,
        ),
        (Screen::Score, _) => (
            format!(" {}/{} ", snapshot.score(), total),
            DEFAULT_THEME.success,
        ),
        _ => (String::from(" START "), DEFAULT_THEME.secondary),
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(DEFAULT_THEME.bar_bg).fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds for the current screen
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().bg(DEFAULT_THEME.bar_bg).fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = match snapshot.screen() {
        Screen::Start => &[(" ↵ ", " start ")],
        Screen::Question if snapshot.is_answered() => &[(" ↵ / n ", " next "), (" r ", " restart ")],
        Screen::Question => &[(" 1-9 ", " answer "), (" ↑/↓ ↵ ", " pick "), (" r ", " restart ")],
        Screen::Score => &[(" ↑/↓ ", " scroll "), (" ↵ / r ", " try again ")],
    };

    let mut right_spans = Vec::new();
    for (key, desc) in bindings.iter().chain(std::iter::once(&(" q ", " quit "))) {
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
        right_spans.push(Span::styled("│", sep_style));
    }
    right_spans.pop();

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
