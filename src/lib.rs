//! Mauka Dictionary Library
//!
//! This library contains the core components of the Mauka Dictionary: a
//! popularity-ranked prefix tree, the word-list loader that feeds it, and an
//! interactive session over it. The library is designed to be used by the
//! binary crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - `data_structures`: the Lanai Trie (storage, mutation, prediction, analytics)
//! - `loader`: line-oriented word-list ingestion
//! - `session`: textual command surface over a trie
//! - `config` / `error`: layered configuration and error types

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Mauka Dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds an empty trie configured from `config`.
pub fn build_trie(config: &config::MaukaConfig) -> data_structures::LanaiTrie {
    data_structures::LanaiTrie::with_config(config.trie)
}
