//! Subject categories offered on the setup screen.

use std::fmt;

use serde::{Deserialize, Serialize};

/// School level a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Junior High School.
    Jhs,
    /// Senior High School.
    Shs,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Jhs => "Junior High School",
            Level::Shs => "Senior High School",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Jhs => write!(f, "JHS"),
            Level::Shs => write!(f, "SHS"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub level: Level,
}

impl Category {
    pub const fn new(id: &'static str, name: &'static str, level: Level) -> Self {
        Self { id, name, level }
    }
}

/// Category used when a requested key has no pool.
pub const DEFAULT_CATEGORY: &str = "jhs-mathematics";

pub const CATEGORIES: [Category; 10] = [
    Category::new("jhs-mathematics", "Mathematics", Level::Jhs),
    Category::new("jhs-science", "Science", Level::Jhs),
    Category::new("jhs-english", "English", Level::Jhs),
    Category::new("jhs-social-studies", "Social Studies", Level::Jhs),
    Category::new("shs-mathematics", "Advanced Mathematics", Level::Shs),
    Category::new("shs-science", "Science", Level::Shs),
    Category::new("shs-english", "English Literature", Level::Shs),
    Category::new("shs-history", "History", Level::Shs),
    Category::new("shs-languages", "Languages", Level::Shs),
    Category::new("shs-arts", "Arts & Literature", Level::Shs),
];

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

pub fn categories_for(level: Level) -> impl Iterator<Item = &'static Category> {
    CATEGORIES.iter().filter(move |category| category.level == level)
}

/// Human readable name for a category key, falling back to the key itself for
/// categories that only exist in a loaded question file.
pub fn display_name(id: &str) -> String {
    match find_category(id) {
        Some(category) => format!("{} {}", category.level, category.name),
        None => id.to_string(),
    }
}
