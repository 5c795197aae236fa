//! Start screen

use super::{card_area, card_block};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the introduction shown before the quiz starts
pub fn render_start_screen(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let questions = snapshot.questions();
    let labels = questions.labels();
    let mut lines = Vec::new();

    if let Some(description) = questions.description() {
        for text in description.lines() {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            )));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        labels.question_count(questions.len()),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" {} ", labels.start),
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .block(card_block(questions.title()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, card_area(area));
}
