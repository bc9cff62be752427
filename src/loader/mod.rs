//! Word-list loader.
//!
//! Reads a word list one line at a time and inserts every record into a
//! [`LanaiTrie`]. The popularity of each word is taken from the record, from
//! the line number, or left absent, depending on [`PopularityMode`].

use crate::config::{LoaderConfig, PopularityMode};
use crate::data_structures::{LanaiTrie, WordEntry};
use crate::error::load::LoadError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Lines read from the source
    pub lines_read: usize,

    /// Words that were not stored before
    pub inserted: usize,

    /// Words that were already stored and got their popularity overwritten
    pub updated: usize,

    /// Blank lines
    pub skipped: usize,
}

/// Loads word lists into a trie.
#[derive(Debug, Clone, Default)]
pub struct WordLoader {
    config: LoaderConfig,
}

impl WordLoader {
    /// Creates a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Parses one line of a word list.
    ///
    /// # Arguments
    ///
    /// * `line_number` - 1-based line number, used for `line_number` mode and errors.
    /// * `line` - The raw line without its terminator.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(WordEntry))` - The record on this line.
    /// * `Ok(None)` - The line is blank.
    /// * `Err(LoadError)` - The record is malformed.
    pub fn parse_line(&self, line_number: usize, line: &str) -> LoadResult<Option<WordEntry>> {
        let blank = if self.config.trim {
            line.trim().is_empty()
        } else {
            line.is_empty()
        };
        if blank {
            return Ok(None);
        }

        let entry = match self.config.popularity {
            PopularityMode::None => WordEntry::new(self.field(line)),
            PopularityMode::LineNumber => {
                let popularity = i64::try_from(line_number).unwrap_or(i64::MAX);
                WordEntry::with_popularity(self.field(line), popularity)
            }
            PopularityMode::Column => self.parse_record(line_number, line)?,
        };

        Ok(Some(entry))
    }

    fn field<'a>(&self, value: &'a str) -> &'a str {
        if self.config.trim {
            value.trim()
        } else {
            value
        }
    }

    fn parse_record(&self, line_number: usize, line: &str) -> LoadResult<WordEntry> {
        let delimiter = self.config.delimiter.as_str();

        // Whitespace that is part of the delimiter is significant.
        let record = if self.config.trim {
            line.trim_matches(|c: char| c.is_whitespace() && !delimiter.contains(c))
        } else {
            line
        };

        let mut fields = record.split(delimiter);
        let word = self.field(fields.next().unwrap_or_default());
        let popularity = fields.next();

        if fields.next().is_some() || word.is_empty() {
            return Err(LoadError::MalformedRecord {
                line: line_number,
                record: line.to_string(),
            });
        }

        match popularity.map(str::trim) {
            None | Some("") => Ok(WordEntry::new(word)),
            Some(value) => value
                .parse::<i64>()
                .map(|popularity| WordEntry::with_popularity(word, popularity))
                .map_err(|_| LoadError::InvalidPopularity {
                    line: line_number,
                    value: value.to_string(),
                }),
        }
    }

    /// Reads every line from `reader` into `trie`.
    ///
    /// Stops at the first malformed record; words read before it stay inserted.
    pub fn load_reader<R: BufRead>(&self, reader: R, trie: &mut LanaiTrie) -> LoadResult<LoadSummary> {
        let mut summary = LoadSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            summary.lines_read += 1;

            match self.parse_line(index + 1, &line)? {
                Some(entry) => {
                    let is_new = match entry.popularity {
                        Some(popularity) => trie.insert_with_popularity(&entry.word, popularity),
                        None => trie.insert(&entry.word),
                    };
                    if is_new {
                        summary.inserted += 1;
                    } else {
                        debug!(word = %entry.word, line = index + 1, "Overwriting duplicate word");
                        summary.updated += 1;
                    }
                }
                None => summary.skipped += 1,
            }
        }

        info!(
            lines = summary.lines_read,
            inserted = summary.inserted,
            updated = summary.updated,
            skipped = summary.skipped,
            "Word list loaded"
        );
        Ok(summary)
    }

    /// Reads the word list at `path` into `trie`.
    pub fn load_file<P: AsRef<Path>>(&self, path: P, trie: &mut LanaiTrie) -> LoadResult<LoadSummary> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading word list");
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file), trie)
    }
}
