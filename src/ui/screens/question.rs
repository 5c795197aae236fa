//! Question screen: prompt, options and the advance hint

use super::{card_area, card_block};
use crate::snapshot::{OptionMark, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the current question.
///
/// `highlighted` is the cursor row; it is only drawn while the question is
/// still unanswered.
pub fn render_question_screen(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    highlighted: usize,
) {
    let (Some(index), Some(question)) = (snapshot.current_index(), snapshot.current_question())
    else {
        return;
    };
    let questions = snapshot.questions();

    let mut lines = vec![
        Line::from(Span::styled(
            questions.labels().progress(index + 1, questions.len()),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            question.text.clone(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let (marker, style) = match snapshot.option_mark(i) {
            OptionMark::Available if i == highlighted => (
                "›",
                Style::default()
                    .bg(DEFAULT_THEME.highlight_bg)
                    .fg(DEFAULT_THEME.fg),
            ),
            OptionMark::Available => (" ", Style::default().fg(DEFAULT_THEME.fg)),
            OptionMark::Selected => (
                "●",
                Style::default()
                    .bg(DEFAULT_THEME.selected_bg)
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            OptionMark::Locked => (" ", Style::default().fg(DEFAULT_THEME.comment)),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} {}. ", marker, i + 1), style),
            Span::styled(option.clone(), style),
        ]));
    }

    if snapshot.is_answered() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                " ↵ ",
                Style::default().bg(DEFAULT_THEME.primary).fg(Color::Black),
            ),
            Span::styled(
                format!(" {}", snapshot.advance_label()),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(card_block(questions.title()))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, card_area(area));
}
