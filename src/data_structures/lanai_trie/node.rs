//! Node implementation for the Lanai Trie.
//!
//! This module provides the `TrieNode` structure used in the Lanai Trie implementation.
//! Each node owns its children directly; there are no shared or back references,
//! so the whole tree is dropped together with its root.
//!
//! A chain is as deep as the longest word, and word length is unbounded. Tree
//! walks, cloning, comparison and dropping all keep an explicit stack.

/// A node in the Lanai Trie.
///
/// Each node represents one prefix position. The edge leading into the node is
/// stored by its parent, so a node does not know its own character.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child nodes keyed by their incoming character, in insertion order
    children: Vec<(char, TrieNode)>,

    /// Whether the path to this node spells a stored word
    end_of_word: bool,

    /// Popularity of the stored word (only meaningful when `end_of_word` is set)
    popularity: Option<i64>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the path to this node spells a stored word.
    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    /// Returns the popularity recorded for the word ending at this node.
    ///
    /// Always `None` for nodes that do not end a word.
    pub fn popularity(&self) -> Option<i64> {
        if self.end_of_word {
            self.popularity
        } else {
            None
        }
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterates over the children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Returns the child reached through the edge labelled `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, node)| node)
    }

    /// Walks `path` from this node, returning the node it spells.
    pub fn descend<I>(&self, path: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in path {
            node = node.child(c)?;
        }
        Some(node)
    }

    pub(super) fn child_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        self.children
            .iter_mut()
            .find(|(key, _)| *key == c)
            .map(|(_, node)| node)
    }

    pub(super) fn descend_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        let mut node = self;
        for &c in path {
            node = node.child_mut(c)?;
        }
        Some(node)
    }

    /// Returns the child for `c`, appending an empty one if the edge is missing.
    pub(super) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        let index = match self.children.iter().position(|(key, _)| *key == c) {
            Some(index) => index,
            None => {
                self.children.push((c, TrieNode::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    /// Detaches the child subtree labelled `c`.
    pub(super) fn remove_child(&mut self, c: char) -> Option<TrieNode> {
        let index = self.children.iter().position(|(key, _)| *key == c)?;
        Some(self.children.remove(index).1)
    }

    /// Marks this node as the end of a word with the given popularity.
    ///
    /// Returns `true` if the node was not already marked.
    pub(super) fn mark(&mut self, popularity: Option<i64>) -> bool {
        let is_new = !self.end_of_word;
        self.end_of_word = true;
        self.popularity = popularity;
        is_new
    }

    pub(super) fn unmark(&mut self) {
        self.end_of_word = false;
        self.popularity = None;
    }
}

/// A node whose children are still being copied.
struct CloneFrame<'a> {
    source: &'a TrieNode,
    edge: char,
    pending: std::slice::Iter<'a, (char, TrieNode)>,
    children: Vec<(char, TrieNode)>,
}

impl<'a> CloneFrame<'a> {
    fn new(source: &'a TrieNode, edge: char) -> Self {
        Self {
            source,
            edge,
            pending: source.children.iter(),
            children: Vec::with_capacity(source.children.len()),
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut ancestors = Vec::new();
        let mut current = CloneFrame::new(self, '\0');

        loop {
            match current.pending.next() {
                Some((c, child)) => {
                    ancestors.push(std::mem::replace(&mut current, CloneFrame::new(child, *c)));
                }
                None => {
                    let node = TrieNode {
                        children: current.children,
                        end_of_word: current.source.end_of_word,
                        popularity: current.source.popularity,
                    };
                    match ancestors.pop() {
                        Some(mut parent) => {
                            parent.children.push((current.edge, node));
                            current = parent;
                        }
                        None => return node,
                    }
                }
            }
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.end_of_word != b.end_of_word
                || a.popularity != b.popularity
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children.iter().zip(&b.children) {
                if ca != cb {
                    return false;
                }
                pending.push((na, nb));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

// Tear subtrees down from a worklist, not through recursive drop glue.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain(..).map(|(_, node)| node).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_keep_insertion_order() {
        let mut node = TrieNode::new();
        node.child_or_insert('z');
        node.child_or_insert('a');
        node.child_or_insert('m');
        node.child_or_insert('a');

        let keys: Vec<char> = node.children().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!['z', 'a', 'm']);
        assert_eq!(node.child_count(), 3);
    }

    #[test]
    fn test_popularity_hidden_unless_marked() {
        let mut node = TrieNode::new();
        assert_eq!(node.popularity(), None);

        assert!(node.mark(Some(7)));
        assert_eq!(node.popularity(), Some(7));
        assert!(!node.mark(Some(9)));
        assert_eq!(node.popularity(), Some(9));

        node.unmark();
        assert!(!node.is_end_of_word());
        assert_eq!(node.popularity(), None);
    }

    #[test]
    fn test_descend_and_remove_child() {
        let mut root = TrieNode::new();
        root.child_or_insert('a').child_or_insert('b');
        root.child_or_insert('c');

        assert!(root.descend("ab".chars()).is_some());
        assert!(root.descend("ax".chars()).is_none());
        assert!(root.descend_mut(&['a', 'b']).is_some());

        assert!(root.remove_child('a').is_some());
        assert!(root.remove_child('a').is_none());
        assert_eq!(root.children().map(|(c, _)| c).collect::<String>(), "c");
    }

    #[test]
    fn test_clone_and_eq_compare_whole_subtree() {
        let mut root = TrieNode::new();
        root.child_or_insert('a').child_or_insert('b').mark(Some(3));
        root.child_or_insert('c').mark(None);

        let mut copy = root.clone();
        assert_eq!(copy, root);
        assert_eq!(copy.descend("ab".chars()).and_then(TrieNode::popularity), Some(3));

        if let Some(node) = copy.descend_mut(&['a', 'b']) {
            node.mark(Some(4));
        }
        assert_ne!(copy, root);

        let mut reordered = TrieNode::new();
        reordered.child_or_insert('c').mark(None);
        reordered.child_or_insert('a').child_or_insert('b').mark(Some(3));
        assert_ne!(reordered, root);
    }
}
