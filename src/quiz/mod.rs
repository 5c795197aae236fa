//! Quiz core
//!
//! - [`question`]: question records and the validated [`QuestionSet`]
//! - [`session`]: the [`QuizSession`] state machine
//! - [`labels`]: screen text carried by a question set
//! - [`builtin`]: the question set bundled into the binary
//! - [`errors`]: [`QuizError`] for both loading and rejected operations
//!
//! Nothing in this module performs terminal I/O. The only file access is
//! [`QuestionSet::load`].

pub mod builtin;
pub mod errors;
pub mod labels;
pub mod question;
pub mod session;

pub use errors::{QuizError, Result};
pub use labels::Labels;
pub use question::{Question, QuestionSet};
pub use session::{Operation, Phase, QuizSession, Transition};
