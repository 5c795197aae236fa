//! The quiz session state machine
//!
//! ```text
//! NotStarted --start()--> InProgress
//! InProgress --select_answer(i)--> InProgress (answered)     [once per question]
//! InProgress(answered) --advance()--> InProgress (next)      [if more remain]
//! InProgress(answered) --advance()--> Finished               [on the last question]
//! any --restart()--> NotStarted
//! ```
//!
//! Every operation either applies completely and returns the [`Transition`]
//! it made, or returns a rejection error and leaves the session untouched.

use std::fmt;

use super::errors::{QuizError, Result};
use super::question::{Question, QuestionSet};
use crate::snapshot::{ReviewEntry, Snapshot};

/// The four state-mutating operations, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    SelectAnswer,
    Advance,
    Restart,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Start => "start",
            Operation::SelectAnswer => "select an answer",
            Operation::Advance => "advance",
            Operation::Restart => "restart",
        };
        f.write_str(name)
    }
}

/// Coarse session state. Question position only exists while in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress {
        current: usize,
        /// `Some` once the current question has been answered
        selected: Option<usize>,
    },
    Finished,
}

impl Phase {
    fn describe(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::InProgress { selected: None, .. } => "waiting for an answer",
            Phase::InProgress { selected: Some(_), .. } => "the question is answered",
            Phase::Finished => "finished",
        }
    }
}

/// What a successful operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Answered { option: usize, correct: bool },
    Advanced { index: usize },
    Finished { score: usize },
    Restarted,
}

/// One playthrough of a fixed question set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession<'q> {
    questions: &'q QuestionSet,
    phase: Phase,
    score: usize,
    user_answers: Vec<usize>,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q QuestionSet) -> Self {
        QuizSession {
            questions,
            phase: Phase::NotStarted,
            score: 0,
            user_answers: Vec::with_capacity(questions.len()),
        }
    }

    /// Begin the quiz at the first question
    pub fn start(&mut self) -> Result<Transition> {
        if self.phase != Phase::NotStarted {
            return Err(self.reject(Operation::Start));
        }

        self.phase = Phase::InProgress {
            current: 0,
            selected: None,
        };
        tracing::debug!(questions = self.questions.len(), "Quiz started");
        Ok(Transition::Started)
    }

    /// Record the answer to the current question.
    ///
    /// Only the first selection per question counts; later calls are
    /// rejected with [`QuizError::InvalidTransition`].
    pub fn select_answer(&mut self, option: usize) -> Result<Transition> {
        let current = match self.phase {
            Phase::InProgress {
                current,
                selected: None,
            } => current,
            _ => return Err(self.reject(Operation::SelectAnswer)),
        };

        let question = &self.questions[current];
        if option >= question.options.len() {
            tracing::debug!(option, current, "Rejected out-of-range selection");
            return Err(QuizError::OutOfRangeSelection {
                index: option,
                len: question.options.len(),
            });
        }

        let correct = question.is_correct(option);
        self.phase = Phase::InProgress {
            current,
            selected: Some(option),
        };
        self.user_answers.push(option);
        if correct {
            self.score += 1;
        }
        debug_assert_eq!(self.score, self.count_correct());

        tracing::debug!(question = question.id, option, correct, "Answer recorded");
        Ok(Transition::Answered { option, correct })
    }

    /// Move past an answered question, finishing after the last one
    pub fn advance(&mut self) -> Result<Transition> {
        let current = match self.phase {
            Phase::InProgress {
                current,
                selected: Some(_),
            } => current,
            _ => return Err(self.reject(Operation::Advance)),
        };

        let next = current + 1;
        if next < self.questions.len() {
            self.phase = Phase::InProgress {
                current: next,
                selected: None,
            };
            Ok(Transition::Advanced { index: next })
        } else {
            self.phase = Phase::Finished;
            tracing::info!(
                score = self.score,
                total = self.questions.len(),
                "Quiz finished"
            );
            Ok(Transition::Finished { score: self.score })
        }
    }

    /// Discard all answers and return to the start screen. Allowed in any phase.
    pub fn restart(&mut self) -> Result<Transition> {
        tracing::debug!(phase = self.phase.describe(), "Quiz restarted");
        self.phase = Phase::NotStarted;
        self.score = 0;
        self.user_answers.clear();
        Ok(Transition::Restarted)
    }

    fn reject(&self, operation: Operation) -> QuizError {
        tracing::debug!(%operation, phase = self.phase.describe(), "Rejected operation");
        QuizError::InvalidTransition {
            operation,
            phase: self.phase.describe(),
        }
    }

    fn count_correct(&self) -> usize {
        self.user_answers
            .iter()
            .zip(self.questions)
            .filter(|(answer, question)| question.is_correct(**answer))
            .count()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &'q QuestionSet {
        self.questions
    }

    /// Index of the displayed question, `None` outside `InProgress`
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress { current, .. } => Some(current),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&'q Question> {
        self.current_index().map(|i| &self.questions[i])
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option().is_some()
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress { selected, .. } => selected,
            _ => None,
        }
    }

    /// True while the final question is displayed
    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 == self.questions.len())
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn user_answers(&self) -> &[usize] {
        &self.user_answers
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn review(&self) -> Vec<ReviewEntry<'q>> {
        self.snapshot().review()
    }

    /// Read-only copy of the state for the renderer
    pub fn snapshot(&self) -> Snapshot<'q> {
        Snapshot {
            questions: self.questions,
            phase: self.phase,
            current_index: self.current_index(),
            answered: self.is_answered(),
            selected_option: self.selected_option(),
            score: self.score,
            user_answers: self.user_answers.clone(),
        }
    }
}
