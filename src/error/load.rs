//! Word-list loading error module.

use thiserror::Error;

/// Errors that can occur while reading a word list into a trie.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The popularity field of a record is not an integer.
    #[error("Line {line}: invalid popularity '{value}'")]
    InvalidPopularity {
        /// 1-based line number
        line: usize,
        /// The offending field
        value: String,
    },

    /// A record has more fields than `word<delimiter>popularity`.
    #[error("Line {line}: malformed record '{record}'")]
    MalformedRecord {
        /// 1-based line number
        line: usize,
        /// The offending record
        record: String,
    },

    /// The word list could not be read.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
