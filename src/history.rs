//! Finished quiz records, persisted as a JSON array.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Difficulty;
use crate::quiz::QuizSession;

pub const DEFAULT_HISTORY_PATH: &str = "smartme-history.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history file {path} is corrupt: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: Uuid,
    pub player: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    /// Seconds per question, `0` for untimed.
    pub time_limit: u32,
    /// Unix timestamp in seconds.
    pub finished_at: u64,
}

impl QuizRecord {
    pub fn from_session(
        session: &QuizSession,
        player: &str,
        category: &str,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player: player.to_string(),
            category: category.to_string(),
            difficulty,
            score: session.score(),
            total: session.total_questions(),
            percentage: session.percentage(),
            time_limit: session.time_limit(),
            finished_at: unix_now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player: String,
    pub total_score: usize,
    pub quizzes_taken: usize,
    pub average_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub player: String,
    pub quizzes_taken: usize,
    pub total_score: usize,
    pub average_percentage: u32,
    pub best_percentage: u32,
    pub last_quiz_at: u64,
}

pub struct HistoryStore {
    path: PathBuf,
    records: Vec<QuizRecord>,
}

impl HistoryStore {
    /// Opens the history at `path`. A missing file is an empty history.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let records = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Vec::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        debug!(path = %path.display(), records = records.len(), "opened history");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[QuizRecord] {
        &self.records
    }

    /// Appends a record and writes the file.
    pub fn record(&mut self, record: QuizRecord) -> Result<(), StoreError> {
        info!(
            player = %record.player,
            category = %record.category,
            score = record.score,
            total = record.total,
            "recording quiz result"
        );
        self.records.push(record);
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Players ranked by total score, ties going to whoever got there first.
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut players: Vec<PlayerStats> = self.group_by_player().into_values().collect();

        players.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then(a.last_quiz_at.cmp(&b.last_quiz_at))
                .then_with(|| a.player.cmp(&b.player))
        });

        players
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, stats)| LeaderboardEntry {
                rank: i + 1,
                player: stats.player,
                total_score: stats.total_score,
                quizzes_taken: stats.quizzes_taken,
                average_percentage: stats.average_percentage,
            })
            .collect()
    }

    pub fn player_stats(&self, player: &str) -> Option<PlayerStats> {
        self.group_by_player().remove(player)
    }

    fn group_by_player(&self) -> BTreeMap<String, PlayerStats> {
        let mut grouped: BTreeMap<String, Vec<&QuizRecord>> = BTreeMap::new();
        for record in &self.records {
            grouped.entry(record.player.clone()).or_default().push(record);
        }

        grouped
            .into_iter()
            .map(|(player, records)| {
                let quizzes_taken = records.len();
                let percentage_sum: u32 = records.iter().map(|r| r.percentage).sum();
                let average = percentage_sum as f64 / quizzes_taken as f64;
                let stats = PlayerStats {
                    player: player.clone(),
                    quizzes_taken,
                    total_score: records.iter().map(|r| r.score).sum(),
                    average_percentage: average.round() as u32,
                    best_percentage: records.iter().map(|r| r.percentage).max().unwrap_or(0),
                    last_quiz_at: records.iter().map(|r| r.finished_at).max().unwrap_or(0),
                };
                (player, stats)
            })
            .collect()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
