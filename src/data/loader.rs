use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::Question;

/// Errors raised while reading a question bank file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("category '{category}' in {path} has no questions")]
    EmptyPool { path: PathBuf, category: String },

    #[error("question {index} of '{category}' is invalid: {reason}")]
    InvalidQuestion {
        category: String,
        index: usize,
        reason: &'static str,
    },
}

/// Reads a JSON object mapping category ids to question arrays.
pub fn load_pools_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<BTreeMap<String, Vec<Question>>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pools: BTreeMap<String, Vec<Question>> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for (category, questions) in &pools {
        if questions.is_empty() {
            return Err(LoadError::EmptyPool {
                path: path.to_path_buf(),
                category: category.clone(),
            });
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate().map_err(|reason| LoadError::InvalidQuestion {
                category: category.clone(),
                index,
                reason,
            })?;
        }
    }

    info!(path = %path.display(), categories = pools.len(), "loaded question file");
    Ok(pools)
}
