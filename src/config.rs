//! Quiz setup options.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::DEFAULT_CATEGORY;

/// Question counts offered on the setup screen.
pub const QUESTION_COUNTS: [usize; 4] = [5, 10, 15, 20];
/// Per-question time limits offered on the setup screen; `0` means untimed.
pub const TIME_LIMITS: [u32; 5] = [30, 60, 90, 120, 0];

pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_TIME_LIMIT: u32 = 60;
pub const DEFAULT_PLAYER: &str = "student";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Basic concepts and fundamentals",
            Difficulty::Medium => "Intermediate academic challenges",
            Difficulty::Hard => "Advanced concepts and problem-solving",
            Difficulty::Mixed => "A combination of all difficulty levels",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("question count must be at least 1")]
    ZeroCount,
    #[error("player name must not be empty")]
    EmptyPlayer,
}

/// Settings for one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub category: String,
    pub difficulty: Difficulty,
    pub count: usize,
    /// Seconds per question, `0` for untimed.
    pub time_limit: u32,
    /// Study mode plays without a countdown.
    pub study_mode: bool,
    pub sound: bool,
    pub player: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            difficulty: Difficulty::default(),
            count: DEFAULT_COUNT,
            time_limit: DEFAULT_TIME_LIMIT,
            study_mode: false,
            sound: true,
            player: DEFAULT_PLAYER.to_string(),
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if self.player.trim().is_empty() {
            return Err(ConfigError::EmptyPlayer);
        }
        Ok(())
    }

    /// Time limit the session should run with.
    pub fn effective_time_limit(&self) -> u32 {
        if self.study_mode { 0 } else { self.time_limit }
    }
}
