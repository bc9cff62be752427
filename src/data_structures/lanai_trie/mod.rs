//! Lanai Dictionary Trie Implementation
//!
//! This module provides a character trie that stores a dictionary of words,
//! each optionally tagged with an integer popularity. On top of membership and
//! mutation it offers popularity-ranked prediction from a prefix and a set of
//! whole-tree analytics.
//!
//! The tree is single-owner: every node exclusively owns its children and
//! mutation requires `&mut self`. Callers that need shared access should wrap
//! the whole trie in one lock.

mod analytics;
mod config;
mod node;
mod predict;

pub use analytics::TrieStats;
pub use self::config::{LanaiTrieConfig, TieBreak, ZeroPopularity};
pub use node::TrieNode;
pub use predict::Prediction;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A word with its optional popularity, as fed to bulk insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The word to store
    pub word: String,

    /// Popularity used to rank the word in predictions
    pub popularity: Option<i64>,
}

impl WordEntry {
    /// Creates an entry without popularity.
    pub fn new<W: Into<String>>(word: W) -> Self {
        Self {
            word: word.into(),
            popularity: None,
        }
    }

    /// Creates an entry with the given popularity.
    pub fn with_popularity<W: Into<String>>(word: W, popularity: i64) -> Self {
        Self {
            word: word.into(),
            popularity: Some(popularity),
        }
    }
}

/// Lanai Trie is a prefix tree of words ranked by popularity.
///
/// Key features:
/// * Insertion with optional popularity, overwriting on re-insert
/// * Removal that keeps every other stored word intact
/// * Top-n prediction by popularity from any prefix
/// * Structural analytics and a generic bottom-up fold
#[derive(Debug, Clone, Default)]
pub struct LanaiTrie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Number of stored words
    words: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// A new `LanaiTrie` instance.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// # Returns
    ///
    /// A new `LanaiTrie` instance.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word without popularity.
    ///
    /// If the word is already stored its popularity is reset to absent.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it was updated.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) -> bool {
        self.insert_entry(word.as_ref(), None)
    }

    /// Inserts a word with the given popularity.
    ///
    /// If the word is already stored its popularity is overwritten. An explicit
    /// `0` is stored according to the configured [`ZeroPopularity`] policy.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    /// * `popularity` - The popularity to record, any value including negatives.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it was updated.
    pub fn insert_with_popularity<W: AsRef<str>>(&mut self, word: W, popularity: i64) -> bool {
        self.insert_entry(word.as_ref(), Some(popularity))
    }

    fn insert_entry(&mut self, word: &str, popularity: Option<i64>) -> bool {
        // The root is never a word.
        if word.is_empty() {
            debug!("Ignoring insertion of the empty word");
            return false;
        }

        let popularity = self.config.zero_popularity.normalize(popularity);

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = node.mark(popularity);
        if is_new {
            self.words += 1;
        }
        is_new
    }

    /// Checks if a word is stored in the trie.
    ///
    /// Prefixes of stored words that are not words themselves are not contained.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.root
            .descend(word.as_ref().chars())
            .is_some_and(TrieNode::is_end_of_word)
    }

    /// Returns the popularity recorded for a stored word.
    ///
    /// `None` if the word is not stored or was stored without popularity.
    pub fn popularity<W: AsRef<str>>(&self, word: W) -> Option<i64> {
        self.root
            .descend(word.as_ref().chars())
            .and_then(TrieNode::popularity)
    }

    /// Removes a word from the trie.
    ///
    /// Only the nodes that no other stored word depends on are detached. The
    /// tree is left untouched when the word is not stored.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// `true` if the word was removed, `false` if it wasn't found.
    pub fn remove<W: AsRef<str>>(&mut self, word: W) -> bool {
        let chars: Vec<char> = word.as_ref().chars().collect();
        if chars.is_empty() {
            return false;
        }

        // Locate pass: find the deepest node on the path, short of the final
        // one, that another word still needs (a word end or a branch point).
        let mut anchor = 0;
        let mut node = &self.root;
        for (depth, &c) in chars.iter().enumerate() {
            if node.is_end_of_word() || node.child_count() > 1 {
                anchor = depth;
            }
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }

        if !node.is_end_of_word() {
            return false;
        }
        let extends_further = !node.is_leaf();

        if extends_further {
            if let Some(target) = self.root.descend_mut(&chars) {
                target.unmark();
            }
        } else if let Some(anchor_node) = self.root.descend_mut(&chars[..anchor]) {
            debug!(
                word = word.as_ref(),
                anchor,
                pruned = chars.len() - anchor,
                "Pruning removed word"
            );
            anchor_node.remove_child(chars[anchor]);
        }

        self.words -= 1;
        true
    }

    /// Returns the number of words stored in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Removes every word from the trie, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.words = 0;
    }
}

impl Extend<WordEntry> for LanaiTrie {
    fn extend<I: IntoIterator<Item = WordEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert_entry(&entry.word, entry.popularity);
        }
    }
}

impl FromIterator<WordEntry> for LanaiTrie {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        let mut trie = LanaiTrie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = LanaiTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert!(!trie.contains("hello"));

        // Test insertion
        assert!(trie.insert("hello"));
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("hello"));
        assert!(!trie.contains("hell"));
        assert!(!trie.contains("hellos"));

        // Test update
        assert!(!trie.insert_with_popularity("hello", 5));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.popularity("hello"), Some(5));

        // Test removal
        assert!(trie.remove("hello"));
        assert!(trie.is_empty());
        assert!(!trie.remove("hello"));
        assert_eq!(trie.root(), &TrieNode::new());
    }

    #[test]
    fn test_plain_insert_resets_popularity() {
        let mut trie = LanaiTrie::new();
        trie.insert_with_popularity("word", 12);
        trie.insert("word");
        assert!(trie.contains("word"));
        assert_eq!(trie.popularity("word"), None);
    }

    #[test]
    fn test_empty_word_is_ignored() {
        let mut trie = LanaiTrie::new();
        assert!(!trie.insert(""));
        assert!(!trie.insert_with_popularity("", 3));
        assert!(!trie.contains(""));
        assert!(!trie.remove(""));
        assert!(!trie.root().is_end_of_word());
        assert!(trie.is_empty());
    }

    #[test]
    fn test_zero_popularity_absent_policy() {
        let config = LanaiTrieConfig::new().with_zero_popularity(ZeroPopularity::Absent);
        let mut trie = LanaiTrie::with_config(config);
        trie.insert_with_popularity("zero", 0);
        trie.insert_with_popularity("one", 1);
        assert_eq!(trie.popularity("zero"), None);
        assert_eq!(trie.popularity("one"), Some(1));

        let mut trie = LanaiTrie::new();
        trie.insert_with_popularity("zero", 0);
        assert_eq!(trie.popularity("zero"), Some(0));
    }

    #[test]
    fn test_collect_from_entries() {
        let trie: LanaiTrie = vec![
            WordEntry::new("alpha"),
            WordEntry::with_popularity("beta", 3),
            WordEntry::with_popularity("alpha", 9),
        ]
        .into_iter()
        .collect();

        assert_eq!(trie.len(), 2);
        assert_eq!(trie.popularity("alpha"), Some(9));
        assert_eq!(trie.popularity("beta"), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut trie = LanaiTrie::new();
        trie.insert("one");
        trie.insert("two");
        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.contains("one"));
        assert_eq!(trie.root().child_count(), 0);
    }
}
