//! Data structures for the Mauka Dictionary.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single-owner trees with no shared or back references
//! - Total operations: lookups and mutations never fail

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{
    LanaiTrie, LanaiTrieConfig, Prediction, TieBreak, TrieNode, TrieStats, WordEntry,
    ZeroPopularity,
};
