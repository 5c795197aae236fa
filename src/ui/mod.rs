//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, key-to-operation mapping
//! - **[`screens`]** — stateless render functions for the start, question and score
//!   screens plus the status bar
//! - **[`theme`]** — centralized color palette used by all screens
//!
//! The entry point for consumers is [`App`]: construct it with a [`QuizSession`] and
//! call [`App::run`] to start the event loop.
//!
//! [`QuizSession`]: crate::quiz::QuizSession
//! [`App::run`]: app::App::run

pub mod app;
pub mod screens;
pub mod theme;

pub use app::App;
