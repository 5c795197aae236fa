//! Error types for the quiz core
//!
//! [`QuizError`] covers two unrelated families:
//!
//! - **Call ordering** ([`QuizError::OutOfRangeSelection`],
//!   [`QuizError::InvalidTransition`]): an operation was invoked while its
//!   precondition did not hold. These are always recoverable and the session
//!   is left exactly as it was.
//! - **Loading** (everything else): a question set failed validation or could
//!   not be read. These only occur before a session exists.

use std::path::PathBuf;
use thiserror::Error;

use super::session::Operation;

/// Errors produced by question loading and session operations
#[derive(Debug, Error)]
pub enum QuizError {
    /// `select_answer` with an index past the current question's options
    #[error("Option {index} is out of range: question has {len} options")]
    OutOfRangeSelection { index: usize, len: usize },

    /// An operation was called in a phase where it is not allowed
    #[error("Cannot {operation} while {phase}")]
    InvalidTransition {
        operation: Operation,
        phase: &'static str,
    },

    /// A question set must contain at least one question
    #[error("Question set is empty")]
    EmptyQuestionSet,

    /// Every question needs a prompt
    #[error("Question {id} has an empty prompt")]
    EmptyPrompt { id: u32 },

    /// A question must offer a real choice
    #[error("Question {id} has {count} option(s), at least 2 are required")]
    TooFewOptions { id: u32, count: usize },

    /// The correct option index does not name an option
    #[error("Question {id}: correct option {correct} is out of range for {count} options")]
    CorrectOptionOutOfRange { id: u32, correct: usize, count: usize },

    /// Question identifiers must be unique within a set
    #[error("Duplicate question id {id}")]
    DuplicateId { id: u32 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse question file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl QuizError {
    /// Whether this error is a rejected operation rather than a load failure.
    ///
    /// Rejected operations never change session state, so callers driving a
    /// session from user input can safely ignore them.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            QuizError::OutOfRangeSelection { .. } | QuizError::InvalidTransition { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
