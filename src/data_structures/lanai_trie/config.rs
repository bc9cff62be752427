//! Configuration options for the Lanai Trie.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How an explicit popularity of `0` is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPopularity {
    /// `0` is a real score and is stored as `Some(0)`.
    #[default]
    Score,

    /// `0` means "no popularity" and is stored as `None`.
    Absent,
}

impl ZeroPopularity {
    /// Applies the policy to a requested popularity.
    pub fn normalize(self, popularity: Option<i64>) -> Option<i64> {
        match (self, popularity) {
            (ZeroPopularity::Absent, Some(0)) => None,
            (_, popularity) => popularity,
        }
    }
}

/// Secondary ordering for predictions with equal popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Ascending `char` order ("ab" before "ac").
    #[default]
    Lexicographic,

    /// Descending `char` order ("ac" before "ab").
    ReverseLexicographic,
}

impl TieBreak {
    /// Compares two words according to this tie-break.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            TieBreak::Lexicographic => a.cmp(b),
            TieBreak::ReverseLexicographic => b.cmp(a),
        }
    }
}

/// Configuration for the Lanai Trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LanaiTrieConfig {
    /// Storage policy for an explicit popularity of `0`
    pub zero_popularity: ZeroPopularity,

    /// Ordering of equally popular predictions
    pub tie_break: TieBreak,
}

impl LanaiTrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zero-popularity storage policy.
    ///
    /// # Arguments
    ///
    /// * `zero_popularity` - How an explicit `0` popularity is stored.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_zero_popularity(mut self, zero_popularity: ZeroPopularity) -> Self {
        self.zero_popularity = zero_popularity;
        self
    }

    /// Sets the prediction tie-break order.
    ///
    /// # Arguments
    ///
    /// * `tie_break` - Ordering applied to equally popular words.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_popularity_policy() {
        assert_eq!(ZeroPopularity::Score.normalize(Some(0)), Some(0));
        assert_eq!(ZeroPopularity::Absent.normalize(Some(0)), None);
        assert_eq!(ZeroPopularity::Absent.normalize(Some(-3)), Some(-3));
        assert_eq!(ZeroPopularity::Score.normalize(None), None);
    }

    #[test]
    fn test_tie_break_compare() {
        assert_eq!(TieBreak::Lexicographic.compare("ab", "ac"), Ordering::Less);
        assert_eq!(
            TieBreak::ReverseLexicographic.compare("ab", "ac"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_config_serde_names() {
        let config = LanaiTrieConfig::new()
            .with_zero_popularity(ZeroPopularity::Absent)
            .with_tie_break(TieBreak::ReverseLexicographic);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"zero_popularity":"absent","tie_break":"reverse_lexicographic"}"#
        );
    }
}
