//! Main TUI application state and logic

use crate::quiz::{QuizError, QuizSession, Transition};
use crate::snapshot::Screen;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App<'q> {
    /// The session being played
    pub session: QuizSession<'q>,

    /// Option under the cursor on the question screen
    pub highlighted: usize,

    /// Scroll offset of the review list on the score screen
    pub review_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl<'q> App<'q> {
    pub fn new(session: QuizSession<'q>) -> Self {
        App {
            session,
            highlighted: 0,
            review_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let snapshot = self.session.snapshot();

        match snapshot.screen() {
            Screen::Start => super::screens::render_start_screen(frame, chunks[0], &snapshot),
            Screen::Question => super::screens::render_question_screen(
                frame,
                chunks[0],
                &snapshot,
                self.highlighted,
            ),
            Screen::Score => super::screens::render_score_screen(
                frame,
                chunks[0],
                &snapshot,
                &mut self.review_scroll,
            ),
        }

        super::screens::render_status_bar(frame, chunks[1], &snapshot, &self.status_message);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let result = self.session.restart();
                self.apply(result);
                return;
            }
            _ => {}
        }

        match self.session.snapshot().screen() {
            Screen::Start => self.handle_start_key(key.code),
            Screen::Question => self.handle_question_key(key.code),
            Screen::Score => self.handle_score_key(key.code),
        }
    }

    fn handle_start_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
            let result = self.session.start();
            self.apply(result);
        }
    }

    fn handle_question_key(&mut self, code: KeyCode) {
        let option_count = self
            .session
            .current_question()
            .map_or(0, |q| q.options.len());

        match code {
            KeyCode::Char(c @ '1'..='9') => {
                // '1'..='9' always parses
                let option = c.to_digit(10).unwrap_or(1) as usize - 1;
                self.select(option);
            }
            KeyCode::Up => {
                if !self.session.is_answered() {
                    self.highlighted = self.highlighted.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if !self.session.is_answered() && self.highlighted + 1 < option_count {
                    self.highlighted += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.session.is_answered() {
                    let result = self.session.advance();
                    self.apply(result);
                } else {
                    self.select(self.highlighted);
                }
            }
            KeyCode::Char('n') | KeyCode::Right => {
                let result = self.session.advance();
                self.apply(result);
            }
            _ => {}
        }
    }

    fn handle_score_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let result = self.session.restart();
                self.apply(result);
            }
            KeyCode::Up => {
                self.review_scroll = self.review_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                // Clamped against content height during render
                self.review_scroll = self.review_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn select(&mut self, option: usize) {
        let result = self.session.select_answer(option);
        if result.is_ok() {
            self.highlighted = option;
        }
        self.apply(result);
    }

    /// Update view state and the status line after an operation
    fn apply(&mut self, result: Result<Transition, QuizError>) {
        let questions = self.session.questions();
        let labels = questions.labels();
        let total = questions.len();
        match result {
            Ok(Transition::Started) => {
                self.highlighted = 0;
                self.status_message = labels.progress(1, total);
            }
            Ok(Transition::Answered { .. }) => {
                self.status_message = format!("↵ {}", self.session.snapshot().advance_label());
            }
            Ok(Transition::Advanced { index }) => {
                self.highlighted = 0;
                self.status_message = labels.progress(index + 1, total);
            }
            Ok(Transition::Finished { score }) => {
                self.review_scroll = 0;
                self.status_message = labels.score(score, total);
            }
            Ok(Transition::Restarted) => {
                self.highlighted = 0;
                self.review_scroll = 0;
                self.status_message = String::from("Ready!");
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }
}
