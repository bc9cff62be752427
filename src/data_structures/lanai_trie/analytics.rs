//! Whole-tree analytics for the Lanai Trie.
//!
//! Every operation here is a read-only traversal. The node-counting
//! measurements are expressed through [`LanaiTrie::fold`].

use super::{LanaiTrie, TrieNode};
use serde::{Deserialize, Serialize};

/// Aggregate structural measurements of a trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Number of stored words
    pub words: usize,

    /// Number of nodes, root included
    pub size: usize,

    /// Number of childless nodes
    pub num_leaves: usize,

    /// Largest number of children held by one node
    pub maximum_branching: usize,

    /// Length in characters of the longest word
    pub height: usize,

    /// The longest stored word
    pub longest_word: String,
}

impl LanaiTrie {
    /// Folds the tree bottom-up.
    ///
    /// Each child of a node is folded first and the results are collected into
    /// a `Vec`; the node's own result is then `f(node, child_results)`. The
    /// order of `child_results` is not part of the contract.
    ///
    /// # Arguments
    ///
    /// * `f` - The combining function.
    ///
    /// # Returns
    ///
    /// The result for the root.
    pub fn fold<A, F>(&self, f: F) -> A
    where
        F: Fn(&TrieNode, Vec<A>) -> A,
    {
        fold_node(&self.root, &f)
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn size(&self) -> usize {
        self.fold(|_, children: Vec<usize>| 1 + children.into_iter().sum::<usize>())
    }

    /// Returns the number of nodes without children.
    ///
    /// An empty tree has one leaf: the root.
    pub fn num_leaves(&self) -> usize {
        self.fold(|node, children: Vec<usize>| {
            if node.is_leaf() {
                1
            } else {
                children.into_iter().sum()
            }
        })
    }

    /// Returns the maximum number of children held by any node.
    pub fn maximum_branching(&self) -> usize {
        self.fold(|node, children: Vec<usize>| {
            children
                .into_iter()
                .fold(node.child_count(), usize::max)
        })
    }

    /// Returns the length in characters of the longest stored word.
    pub fn height(&self) -> usize {
        self.longest_word().chars().count()
    }

    /// Returns the longest stored word.
    ///
    /// Among words of equal length the first one met in pre-order wins. An
    /// empty tree yields an empty string.
    pub fn longest_word(&self) -> String {
        let mut best = String::new();
        let mut best_len = 0;
        self.visit_words(|word, _| {
            let len = word.chars().count();
            if len > best_len {
                best_len = len;
                best = word.to_string();
            }
        });
        best
    }

    /// Returns every stored word in pre-order, children in insertion order.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        self.visit_words(|word, _| words.push(word.to_string()));
        words
    }

    /// Computes all structural measurements at once.
    pub fn stats(&self) -> TrieStats {
        TrieStats {
            words: self.len(),
            size: self.size(),
            num_leaves: self.num_leaves(),
            maximum_branching: self.maximum_branching(),
            height: self.height(),
            longest_word: self.longest_word(),
        }
    }

    /// Calls `visit` with every stored word and its popularity, in pre-order.
    pub fn visit_words<F>(&self, mut visit: F)
    where
        F: FnMut(&str, Option<i64>),
    {
        let mut spelling = String::new();
        walk_words(&self.root, &mut spelling, &mut visit);
    }
}

/// A node whose children are still being folded.
struct FoldFrame<'a, I, A> {
    node: &'a TrieNode,
    children: I,
    results: Vec<A>,
}

/// Post-order fold driven by an explicit stack of frames.
fn fold_node<A, F>(root: &TrieNode, f: &F) -> A
where
    F: Fn(&TrieNode, Vec<A>) -> A,
{
    let mut ancestors = Vec::new();
    let mut current = FoldFrame {
        node: root,
        children: root.children(),
        results: Vec::new(),
    };

    loop {
        match current.children.next() {
            Some((_, child)) => {
                let descended = FoldFrame {
                    node: child,
                    children: child.children(),
                    results: Vec::new(),
                };
                ancestors.push(std::mem::replace(&mut current, descended));
            }
            None => {
                let value = f(current.node, current.results);
                match ancestors.pop() {
                    Some(mut parent) => {
                        parent.results.push(value);
                        current = parent;
                    }
                    None => return value,
                }
            }
        }
    }
}

/// Visits every word at or below `start` in pre-order.
///
/// `spelling` holds the path to `start` on entry and is restored on return.
pub(super) fn walk_words<F>(start: &TrieNode, spelling: &mut String, visit: &mut F)
where
    F: FnMut(&str, Option<i64>),
{
    if start.is_end_of_word() {
        visit(spelling.as_str(), start.popularity());
    }

    let mut stack = vec![start.children()];
    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some((c, child)) => {
                spelling.push(c);
                if child.is_end_of_word() {
                    visit(spelling.as_str(), child.popularity());
                }
                stack.push(child.children());
            }
            None => {
                stack.pop();
                if !stack.is_empty() {
                    spelling.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_measurements() {
        let trie = LanaiTrie::new();
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.num_leaves(), 1);
        assert_eq!(trie.maximum_branching(), 0);
        assert_eq!(trie.height(), 0);
        assert_eq!(trie.longest_word(), "");
        assert!(trie.all_words().is_empty());
    }

    #[test]
    fn test_fold_counts_end_of_word_nodes() {
        let mut trie = LanaiTrie::new();
        for word in ["a", "ab", "abc", "b"] {
            trie.insert(word);
        }
        let words = trie.fold(|node, children: Vec<usize>| {
            usize::from(node.is_end_of_word()) + children.into_iter().sum::<usize>()
        });
        assert_eq!(words, 4);

        let depth = trie.fold(|_, children: Vec<usize>| {
            children.into_iter().max().map_or(0, |d| d + 1)
        });
        assert_eq!(depth, 3);
    }

    #[test]
    fn test_all_words_follow_insertion_order() {
        let mut trie = LanaiTrie::new();
        for word in ["zeta", "alpha", "ze", "al"] {
            trie.insert(word);
        }
        assert_eq!(trie.all_words(), vec!["ze", "zeta", "al", "alpha"]);
    }

    #[test]
    fn test_longest_word_first_wins_on_tie() {
        let mut trie = LanaiTrie::new();
        trie.insert("dog");
        trie.insert("cat");
        trie.insert("ox");
        assert_eq!(trie.longest_word(), "dog");
        assert_eq!(trie.height(), 3);
    }

    #[test]
    fn test_height_counts_chars() {
        let mut trie = LanaiTrie::new();
        trie.insert("héllo");
        assert_eq!(trie.height(), 5);
    }

    #[test]
    fn test_stats() {
        let mut trie = LanaiTrie::new();
        trie.insert("word");
        trie.insert("wdrd");
        let stats = trie.stats();
        assert_eq!(
            stats,
            TrieStats {
                words: 2,
                size: 8,
                num_leaves: 2,
                maximum_branching: 2,
                height: 4,
                longest_word: "word".to_string(),
            }
        );
    }
}
