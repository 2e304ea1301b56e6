//! # smartme-test
//!
//! Academic quiz runtime for Junior and Senior High School subjects, with a
//! terminal front-end.
//!
//! The [`quiz`] module holds the parts that have behaviour worth testing on
//! their own: the question source, the session state machine, the countdown
//! and the swipe classifier. The rest of the crate wires them to a terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use smartme_test::{Quiz, QuizConfig, QuizError, QuestionBank};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), QuizError> {
//!     let config = QuizConfig {
//!         category: "shs-science".to_string(),
//!         ..QuizConfig::default()
//!     };
//!
//!     // Built-in pools; use `QuestionBank::from_json` to add your own.
//!     let quiz = Quiz::new(config, QuestionBank::builtin(), None)?;
//!     quiz.run().await
//! }
//! ```
//!
//! Driving a session directly:
//!
//! ```rust
//! use smartme_test::config::Difficulty;
//! use smartme_test::quiz::{QuestionBank, QuizSession};
//!
//! let questions = QuestionBank::builtin().generate("jhs-english", Difficulty::Easy, 3);
//! let mut session = QuizSession::start(questions, 0);
//!
//! while let Some(question) = session.current_question().cloned() {
//!     session.submit(Some(&question.correct_answer));
//!     session.advance();
//! }
//! assert_eq!(session.percentage(), 100);
//! ```

mod app;
pub mod config;
mod data;
pub mod history;
pub mod logging;
pub mod models;
pub mod quiz;
mod runtime;
pub mod terminal;
mod ui;

use std::io;

use thiserror::Error;

pub use app::{App, Feedback};
pub use config::{ConfigError, Difficulty, QuizConfig};
pub use data::{builtin_pools, load_pools_from_json, LoadError};
pub use history::{HistoryStore, StoreError};
pub use models::{AppState, Category, Level, Question};
pub use quiz::{QuestionBank, QuizSession};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("invalid quiz settings: {0}")]
    Config(#[from] ConfigError),
    #[error("results history: {0}")]
    Store(#[from] StoreError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Validates `config` and prepares the welcome screen.
    ///
    /// Results are recorded to `history` when one is given.
    pub fn new(
        config: QuizConfig,
        bank: QuestionBank,
        history: Option<HistoryStore>,
    ) -> Result<Self, QuizError> {
        config.validate()?;
        Ok(Self {
            app: App::new(config, bank, history),
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = runtime::run(&mut term, &mut self.app).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
