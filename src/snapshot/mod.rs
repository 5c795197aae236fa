// Read-only session state handed to the renderer

use crate::quiz::{Phase, Question, QuestionSet};

/// Which screen the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Question,
    Score,
}

/// How a single option is drawn on the question screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Selectable
    Available,
    /// The recorded answer
    Selected,
    /// Another option on an answered question
    Locked,
}

/// Copy of a session's state at one point in time.
///
/// Only [`QuizSession::snapshot`](crate::quiz::QuizSession::snapshot) builds
/// one, so the fields always describe a reachable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'q> {
    pub(crate) questions: &'q QuestionSet,
    pub(crate) phase: Phase,
    pub(crate) current_index: Option<usize>,
    pub(crate) answered: bool,
    pub(crate) selected_option: Option<usize>,
    pub(crate) score: usize,
    pub(crate) user_answers: Vec<usize>,
}

impl<'q> Snapshot<'q> {
    pub fn questions(&self) -> &'q QuestionSet {
        self.questions
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn user_answers(&self) -> &[usize] {
        &self.user_answers
    }

    pub fn screen(&self) -> Screen {
        match self.phase {
            Phase::NotStarted => Screen::Start,
            Phase::InProgress { .. } => Screen::Question,
            Phase::Finished => Screen::Score,
        }
    }

    pub fn current_question(&self) -> Option<&'q Question> {
        let questions: &'q QuestionSet = self.questions;
        self.current_index.and_then(|i| questions.get(i))
    }

    pub fn option_mark(&self, option: usize) -> OptionMark {
        match self.selected_option {
            None => OptionMark::Available,
            Some(selected) if selected == option => OptionMark::Selected,
            Some(_) => OptionMark::Locked,
        }
    }

    /// Label for the advance action, which differs on the last question
    pub fn advance_label(&self) -> &'q str {
        let questions: &'q QuestionSet = self.questions;
        let labels = questions.labels();
        match self.current_index {
            Some(i) if i + 1 == questions.len() => labels.results.as_str(),
            _ => labels.next.as_str(),
        }
    }

    /// One entry per question, in order; unanswered questions have no answer
    pub fn review(&self) -> Vec<ReviewEntry<'q>> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, question)| ReviewEntry {
                number: i + 1,
                question,
                answer: self.user_answers.get(i).copied(),
            })
            .collect()
    }
}

/// A question paired with the user's answer, as shown on the score screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEntry<'q> {
    /// 1-based position in the set
    pub number: usize,
    pub question: &'q Question,
    pub answer: Option<usize>,
}

impl<'q> ReviewEntry<'q> {
    pub fn is_correct(&self) -> bool {
        self.answer.is_some_and(|a| self.question.is_correct(a))
    }

    pub fn answer_text(&self) -> Option<&'q str> {
        let question: &'q Question = self.question;
        self.answer
            .and_then(|a| question.options.get(a))
            .map(String::as_str)
    }

    pub fn correct_text(&self) -> &'q str {
        let question: &'q Question = self.question;
        question.correct_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizSession;

    fn set() -> QuestionSet {
        QuestionSet::new(
            "Snap",
            vec![
                Question::new(1, "One", &["x", "y"], 1),
                Question::new(2, "Two", &["x", "y", "z"], 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_screen_follows_phase() {
        let set = set();
        let mut session = QuizSession::new(&set);
        assert_eq!(session.snapshot().screen(), Screen::Start);
        session.start().unwrap();
        assert_eq!(session.snapshot().screen(), Screen::Question);
        session.select_answer(0).unwrap();
        session.advance().unwrap();
        session.select_answer(2).unwrap();
        session.advance().unwrap();
        assert_eq!(session.snapshot().screen(), Screen::Score);
    }

    #[test]
    fn test_option_marks() {
        let set = set();
        let mut session = QuizSession::new(&set);
        session.start().unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.option_mark(0), OptionMark::Available);
        assert_eq!(snap.advance_label(), "Next question");

        session.select_answer(1).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.option_mark(0), OptionMark::Locked);
        assert_eq!(snap.option_mark(1), OptionMark::Selected);

        session.advance().unwrap();
        assert_eq!(session.snapshot().advance_label(), "See results");
    }

    #[test]
    fn test_review_entries() {
        let set = set();
        let mut session = QuizSession::new(&set);
        session.start().unwrap();
        session.select_answer(1).unwrap();
        session.advance().unwrap();
        session.select_answer(0).unwrap();
        session.advance().unwrap();

        let review = session.review();
        assert_eq!(review.len(), 2);
        assert!(review[0].is_correct());
        assert_eq!(review[0].answer_text(), Some("y"));
        assert!(!review[1].is_correct());
        assert_eq!(review[1].number, 2);
        assert_eq!(review[1].answer_text(), Some("x"));
        assert_eq!(review[1].correct_text(), "z");
    }

    #[test]
    fn test_current_question_out_of_range_is_none() {
        let set = set();
        let snap = Snapshot {
            questions: &set,
            phase: Phase::InProgress {
                current: 5,
                selected: None,
            },
            current_index: Some(5),
            answered: false,
            selected_option: None,
            score: 0,
            user_answers: Vec::new(),
        };
        assert_eq!(snap.current_question(), None);
        assert_eq!(snap.screen(), Screen::Question);
    }

    #[test]
    fn test_accessors_mirror_session() {
        let set = set();
        let mut session = QuizSession::new(&set);
        session.start().unwrap();
        session.select_answer(1).unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.phase(), session.phase());
        assert_eq!(snap.current_index(), Some(0));
        assert!(snap.is_answered());
        assert_eq!(snap.selected_option(), Some(1));
        assert_eq!(snap.score(), 1);
        assert_eq!(snap.user_answers(), &[1]);
        assert_eq!(snap.questions().title(), "Snap");
        assert_eq!(snap.current_question().map(|q| q.id), Some(1));
    }

    #[test]
    fn test_review_of_unanswered_questions() {
        let set = set();
        let session = QuizSession::new(&set);
        let review = session.review();
        assert!(review.iter().all(|e| e.answer.is_none() && !e.is_correct()));
        assert_eq!(review[0].answer_text(), None);
    }
}
