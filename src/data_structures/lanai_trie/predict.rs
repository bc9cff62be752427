//! Popularity-ranked prediction for the Lanai Trie.
//!
//! Candidates are every stored word below the prefix node, the prefix itself
//! included. They are ranked by popularity descending (absent counts as `0`),
//! then by the configured [`TieBreak`](super::TieBreak).

use super::analytics::walk_words;
use super::LanaiTrie;
use serde::{Deserialize, Serialize};

/// A ranked prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// The predicted word
    pub word: String,

    /// The stored popularity of the word
    pub popularity: Option<i64>,
}

impl Prediction {
    /// Popularity used for ranking.
    pub fn score(&self) -> i64 {
        self.popularity.unwrap_or(0)
    }
}

impl LanaiTrie {
    /// Predicts the most popular word starting with `prefix`.
    ///
    /// # Returns
    ///
    /// The best ranked word, or `None` if no stored word has that prefix.
    pub fn predict<P: AsRef<str>>(&self, prefix: P) -> Option<String> {
        self.predictions(prefix, 1)
            .into_iter()
            .next()
            .map(|prediction| prediction.word)
    }

    /// Predicts the (at most) `n` most popular words starting with `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix of the predicted words.
    /// * `n` - The maximum number of words to return.
    ///
    /// # Returns
    ///
    /// The words in rank order; empty if nothing matches or `n` is zero.
    pub fn predict_n<P: AsRef<str>>(&self, prefix: P, n: usize) -> Vec<String> {
        self.predictions(prefix, n)
            .into_iter()
            .map(|prediction| prediction.word)
            .collect()
    }

    /// Ranked predictions with their popularity.
    ///
    /// Same candidates and ordering as [`LanaiTrie::predict_n`].
    pub fn predictions<P: AsRef<str>>(&self, prefix: P, n: usize) -> Vec<Prediction> {
        if n == 0 {
            return Vec::new();
        }

        let prefix = prefix.as_ref();
        let Some(start) = self.root.descend(prefix.chars()) else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        let mut spelling = String::from(prefix);
        walk_words(start, &mut spelling, &mut |word: &str, popularity: Option<i64>| {
            candidates.push(Prediction {
                word: word.to_string(),
                popularity,
            });
        });

        let tie_break = self.config.tie_break;
        candidates.sort_by(|a, b| {
            b.score()
                .cmp(&a.score())
                .then_with(|| tie_break.compare(&a.word, &b.word))
        });
        candidates.truncate(n);
        candidates
    }
}
