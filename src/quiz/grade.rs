//! Scoring presentation helpers.

/// Percentage at or above which a result counts as a pass.
pub const PASS_MARK: u32 = 70;

/// Seconds under which the countdown is shown as urgent.
pub const URGENT_SECONDS: u32 = 10;

/// `round(100 * score / total)`, `0` for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Outstanding,
    Great,
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::Outstanding,
            70..=89 => Grade::Great,
            50..=69 => Grade::Good,
            _ => Grade::KeepPracticing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Outstanding => "Outstanding! You're a true expert!",
            Grade::Great => "Great job! You know your stuff!",
            Grade::Good => "Good effort! Keep learning!",
            Grade::KeepPracticing => "Keep practicing! You'll improve with time!",
        }
    }
}

pub fn is_pass(percentage: u32) -> bool {
    percentage >= PASS_MARK
}

pub fn share_text(score: usize, total: usize, category: &str) -> String {
    format!(
        "I scored {}/{} ({}%) on the {} quiz! Can you beat my score?",
        score,
        total,
        percentage(score, total),
        category
    )
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
