//! Screen text that belongs to a question set
//!
//! Question files may carry a `[labels]` table so the screens speak the same
//! language as the questions. Missing keys fall back to English. Templates
//! use `{n}`, `{total}` and `{score}` placeholders.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub start: String,
    pub question_count: String,
    pub progress: String,
    pub next: String,
    pub results: String,
    pub score: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub retry: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            start: String::from("Press Enter to start"),
            question_count: String::from("{total} questions"),
            progress: String::from("Question {n}/{total}"),
            next: String::from("Next question"),
            results: String::from("See results"),
            score: String::from("You got {score} of {total} correct"),
            your_answer: String::from("Your answer"),
            correct_answer: String::from("Correct answer"),
            retry: String::from("Try again"),
        }
    }
}

impl Labels {
    pub fn question_count(&self, total: usize) -> String {
        fill(&self.question_count, &[("total", total)])
    }

    /// `n` is 1-based
    pub fn progress(&self, n: usize, total: usize) -> String {
        fill(&self.progress, &[("n", n), ("total", total)])
    }

    pub fn score(&self, score: usize, total: usize) -> String {
        fill(&self.score, &[("score", score), ("total", total)])
    }
}

fn fill(template: &str, values: &[(&str, usize)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{}}}", key), &value.to_string())
        })
}
