//! Score screen with the per-question review

use super::{CARD_H_INSET, CARD_V_INSET, card_area, card_block, push_wrapped};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the final score followed by every question, the user's answer and,
/// for misses, the correct answer.
///
/// Text is wrapped here rather than by the paragraph so that the scroll
/// offset can be clamped against the real row count.
pub fn render_score_screen(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    scroll_offset: &mut usize,
) {
    let questions = snapshot.questions();
    let labels = questions.labels();
    let area = card_area(area);
    let width = area.width.saturating_sub(CARD_H_INSET) as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();
    push_wrapped(
        &mut lines,
        "",
        &labels.score(snapshot.score(), questions.len()),
        width,
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    );
    lines.push(Line::default());

    for entry in snapshot.review() {
        push_wrapped(
            &mut lines,
            "",
            &format!("{}. {}", entry.number, entry.question.text),
            width,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        );

        let answer_color = if entry.is_correct() {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        };
        push_wrapped(
            &mut lines,
            "   ",
            &format!(
                "{}: {}",
                labels.your_answer,
                entry.answer_text().unwrap_or("-")
            ),
            width,
            Style::default().fg(answer_color),
        );

        if !entry.is_correct() {
            push_wrapped(
                &mut lines,
                "   ",
                &format!("{}: {}", labels.correct_answer, entry.correct_text()),
                width,
                Style::default().fg(DEFAULT_THEME.success),
            );
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled(
            " ↵ ",
            Style::default().bg(DEFAULT_THEME.primary).fg(Color::Black),
        ),
        Span::styled(
            format!(" {}", labels.retry),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
    ]));

    let visible_height = area.height.saturating_sub(CARD_V_INSET).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(card_block(questions.title()))
        .scroll((*scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
