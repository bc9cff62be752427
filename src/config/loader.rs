//! Word-list loader configuration module.
//!
//! Controls how each line of a word list is turned into a word and an
//! optional popularity.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Where the popularity of each loaded word comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PopularityMode {
    /// The whole line is the word; no popularity is recorded.
    None,

    /// The whole line is the word; its 1-based line number is the popularity.
    LineNumber,

    /// Lines are `word<delimiter>popularity`, the popularity being optional.
    #[default]
    Column,
}

/// Loader configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Popularity source
    pub popularity: PopularityMode,

    /// Field delimiter used in `column` mode
    pub delimiter: String,

    /// Whether to strip surrounding whitespace from each line and field;
    /// whitespace that belongs to the delimiter is kept
    pub trim: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            popularity: PopularityMode::Column,
            delimiter: "\t".to_string(),
            trim: true,
        }
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.popularity == PopularityMode::Column && self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "delimiter must not be empty in column mode".to_string(),
            ));
        }
        Ok(())
    }
}
