//! Question source: shuffled question sets drawn from category pools.

use std::collections::BTreeMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Difficulty;
use crate::data::{builtin_pools, load_pools_from_json, LoadError};
use crate::models::{Question, DEFAULT_CATEGORY};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

/// All question pools available to a quiz, keyed by category id.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pools: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    /// Bank holding only the built-in pools.
    pub fn builtin() -> Self {
        Self {
            pools: builtin_pools(),
        }
    }

    /// Built-in pools, with `pools` replacing any category of the same id.
    pub fn with_pools(pools: BTreeMap<String, Vec<Question>>) -> Self {
        let mut bank = Self::builtin();
        bank.pools.extend(pools);
        bank
    }

    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::with_pools(load_pools_from_json(path)?))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.pools.contains_key(category)
    }

    pub fn pool_size(&self, category: &str) -> Option<usize> {
        self.pools.get(category).map(Vec::len)
    }

    /// Category ids with their pool sizes, in id order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.pools.iter().map(|(id, pool)| (id.as_str(), pool.len()))
    }

    /// The category a request for `category` is served from.
    pub fn resolve<'a>(&self, category: &'a str) -> &'a str {
        if self.contains(category) { category } else { DEFAULT_CATEGORY }
    }

    pub fn generate(&self, category: &str, difficulty: Difficulty, count: usize) -> Vec<Question> {
        self.generate_with_rng(category, difficulty, count, &mut rand::thread_rng())
    }

    /// Unknown categories are served from the default pool.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        category: &str,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        match self.try_generate_with_rng(category, difficulty, count, rng) {
            Ok(questions) => questions,
            Err(err) => {
                warn!(%err, fallback = DEFAULT_CATEGORY, "serving default category");
                match self.pools.get(DEFAULT_CATEGORY) {
                    Some(pool) => shuffled(pool, count, rng),
                    None => Vec::new(),
                }
            }
        }
    }

    pub fn try_generate(
        &self,
        category: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Vec<Question>, UnknownCategory> {
        self.try_generate_with_rng(category, difficulty, count, &mut rand::thread_rng())
    }

    pub fn try_generate_with_rng<R: Rng + ?Sized>(
        &self,
        category: &str,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Question>, UnknownCategory> {
        let pool = self
            .pools
            .get(category)
            .ok_or_else(|| UnknownCategory(category.to_string()))?;

        // Difficulty is recorded but pools are not split by it.
        debug!(category, %difficulty, count, pool = pool.len(), "generating questions");
        Ok(shuffled(pool, count, rng))
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn shuffled<R: Rng + ?Sized>(pool: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    let mut questions = pool.to_vec();
    questions.shuffle(rng);
    questions.truncate(count);
    questions
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_generate_truncates_to_count() {
        let bank = QuestionBank::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let questions = bank.generate_with_rng("shs-arts", Difficulty::Easy, 3, &mut rng);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn test_generate_returns_whole_pool_when_short() {
        let bank = QuestionBank::builtin();
        let questions = bank.generate("jhs-science", Difficulty::Hard, 20);
        assert_eq!(questions.len(), 5);

        let texts: HashSet<_> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts.len(), 5);
        assert!(questions.iter().all(|q| q.has_option(&q.correct_answer)));
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let bank = QuestionBank::builtin();
        let questions = bank.generate("unknown-category", Difficulty::Medium, 10);
        assert_eq!(questions.len(), 5);

        let default_pool: HashSet<_> = builtin_pools()[DEFAULT_CATEGORY]
            .iter()
            .map(|q| q.text.clone())
            .collect();
        assert!(questions.iter().all(|q| default_pool.contains(&q.text)));
    }

    #[test]
    fn test_try_generate_reports_unknown_category() {
        let bank = QuestionBank::builtin();
        let err = bank.try_generate("nope", Difficulty::Mixed, 5).unwrap_err();
        assert_eq!(err, UnknownCategory("nope".to_string()));
        assert_eq!(bank.resolve("nope"), DEFAULT_CATEGORY);
        assert_eq!(bank.resolve("shs-history"), "shs-history");
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let bank = QuestionBank::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut first = bank.generate_with_rng("shs-history", Difficulty::Medium, 5, &mut rng);
        let mut original = builtin_pools()["shs-history"].clone();
        first.sort_by(|a, b| a.text.cmp(&b.text));
        original.sort_by(|a, b| a.text.cmp(&b.text));
        assert_eq!(first, original);
    }

    #[test]
    fn test_custom_pools_replace_builtin() {
        let mut pools = BTreeMap::new();
        pools.insert(
            "jhs-science".to_string(),
            vec![Question::new("Only one?", ["yes", "no"], "yes")],
        );
        let bank = QuestionBank::with_pools(pools);
        assert_eq!(bank.pool_size("jhs-science"), Some(1));
        assert_eq!(bank.pool_size("shs-arts"), Some(5));
    }
}
