//! The question set bundled into the binary

use super::errors::Result;
use super::question::QuestionSet;

const AI_BASICS: &str = include_str!("../../data/ai_basics.toml");

/// Three introductory AI questions, used when no file is given
pub fn ai_basics() -> Result<QuestionSet> {
    QuestionSet::from_toml_str(AI_BASICS)
}
