//! # Introduction
//!
//! quiztty runs a fixed set of multiple-choice questions in the terminal,
//! one at a time, then shows the score and a review of every answer.
//!
//! ## Flow
//!
//! ```text
//! TOML file / bundled set → QuestionSet → QuizSession → Snapshot → TUI
//! ```
//!
//! 1. [`quiz`] — question data, validation and the [`quiz::QuizSession`]
//!    state machine (start, select an answer, advance, restart).
//! 2. [`snapshot`] — the read-only [`snapshot::Snapshot`] a renderer works
//!    from: current screen, option marks and review entries.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Question files
//!
//! ```toml
//! title = "Capitals"
//! description = "Name the capital."
//!
//! [[questions]]
//! id = 1
//! text = "Capital of France?"
//! options = ["Lyon", "Paris", "Nice"]
//! correct = 1
//! ```

pub mod quiz;
pub mod snapshot;
pub mod ui;
