pub mod category;
mod question;

pub use category::{Category, Level, CATEGORIES, DEFAULT_CATEGORY};
pub use question::{Question, MAX_OPTIONS, MIN_OPTIONS};

/// Which screen the terminal front-end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
    Leaderboard,
}
