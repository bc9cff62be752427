//! Interactive dictionary session.
//!
//! A [`Session`] owns a trie and answers one textual command per line:
//!
//! | Input                 | Effect                                     |
//! |-----------------------|--------------------------------------------|
//! | `<prefix>`            | default number of predictions              |
//! | `\<prefix>`           | predictions for a prefix taken literally   |
//! | `:n <count> <prefix>` | `count` predictions                        |
//! | `? <word>`            | membership test                            |
//! | `+ <word> [pop]`      | insert, with optional popularity           |
//! | `- <word>`            | remove                                     |
//! | `:stats`              | structural measurements                    |
//! | `:words`              | every stored word                          |
//!
//! The `?`, `+` and `-` sigils must be followed by whitespace, so `-i` is a
//! prefix query.

use crate::config::PredictionConfig;
use crate::data_structures::LanaiTrie;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a session command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The command needs a word but none was given.
    #[error("Missing word for '{0}'")]
    MissingWord(&'static str),

    /// A numeric argument could not be parsed.
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// The `:` command is not known.
    #[error("Unknown command ':{0}'")]
    UnknownCommand(String),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Predict with the default count.
    Predict(String),
    /// Predict with an explicit count.
    PredictN(usize, String),
    /// Membership test.
    Contains(String),
    /// Insertion, with optional popularity.
    Insert(String, Option<i64>),
    /// Removal.
    Remove(String),
    /// Structural measurements.
    Stats,
    /// Enumerate every word.
    Words,
}

fn required_word(rest: &str, command: &'static str) -> Result<String, SessionError> {
    let word = rest.trim();
    if word.is_empty() {
        Err(SessionError::MissingWord(command))
    } else {
        Ok(word.to_string())
    }
}

/// Returns the argument text after `sigil` when it starts a command.
fn sigil_argument(line: &str, sigil: char) -> Option<&str> {
    let rest = line.strip_prefix(sigil)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

fn parse_number<T: FromStr>(value: &str) -> Result<T, SessionError> {
    value
        .parse()
        .map_err(|_| SessionError::InvalidNumber(value.to_string()))
}

impl FromStr for SessionCommand {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if let Some(prefix) = line.strip_prefix('\\') {
            return Ok(SessionCommand::Predict(prefix.to_string()));
        }
        if let Some(rest) = sigil_argument(line, '?') {
            return required_word(rest, "?").map(SessionCommand::Contains);
        }
        if let Some(rest) = sigil_argument(line, '-') {
            return required_word(rest, "-").map(SessionCommand::Remove);
        }
        if let Some(rest) = sigil_argument(line, '+') {
            let rest = required_word(rest, "+")?;
            if let Some((word, popularity)) = rest.rsplit_once(char::is_whitespace) {
                if let Ok(popularity) = popularity.parse::<i64>() {
                    return Ok(SessionCommand::Insert(
                        word.trim_end().to_string(),
                        Some(popularity),
                    ));
                }
            }
            return Ok(SessionCommand::Insert(rest, None));
        }
        if let Some(rest) = line.strip_prefix(':') {
            let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            return match name {
                "stats" => Ok(SessionCommand::Stats),
                "words" => Ok(SessionCommand::Words),
                "n" => {
                    let args = args.trim_start();
                    let (count, prefix) = args
                        .split_once(char::is_whitespace)
                        .unwrap_or((args, ""));
                    Ok(SessionCommand::PredictN(
                        parse_number(count)?,
                        prefix.trim().to_string(),
                    ))
                }
                other => Err(SessionError::UnknownCommand(other.to_string())),
            };
        }

        Ok(SessionCommand::Predict(line.to_string()))
    }
}

/// An interactive session over one trie.
#[derive(Debug)]
pub struct Session {
    trie: LanaiTrie,
    prediction: PredictionConfig,
}

impl Session {
    /// Creates a session over `trie`.
    pub fn new(trie: LanaiTrie, prediction: PredictionConfig) -> Self {
        Self { trie, prediction }
    }

    /// Returns the trie behind this session.
    pub fn trie(&self) -> &LanaiTrie {
        &self.trie
    }

    /// Parses and executes one input line, returning the response text.
    pub fn handle_line(&mut self, line: &str) -> String {
        match line.parse::<SessionCommand>() {
            Ok(command) => self.execute(command),
            Err(e) => format!("error: {e}"),
        }
    }

    /// Executes a parsed command, returning the response text.
    pub fn execute(&mut self, command: SessionCommand) -> String {
        match command {
            SessionCommand::Predict(prefix) => {
                let count = self.prediction.resolve(None);
                format_predictions(&self.trie.predict_n(&prefix, count))
            }
            SessionCommand::PredictN(count, prefix) => {
                let count = self.prediction.resolve(Some(count));
                format_predictions(&self.trie.predict_n(&prefix, count))
            }
            SessionCommand::Contains(word) => self.trie.contains(&word).to_string(),
            SessionCommand::Insert(word, popularity) => {
                let is_new = match popularity {
                    Some(popularity) => self.trie.insert_with_popularity(&word, popularity),
                    None => self.trie.insert(&word),
                };
                let reply = if is_new { "inserted" } else { "updated" };
                reply.to_string()
            }
            SessionCommand::Remove(word) => {
                let reply = if self.trie.remove(&word) {
                    "removed"
                } else {
                    "not found"
                };
                reply.to_string()
            }
            SessionCommand::Stats => {
                let stats = self.trie.stats();
                format!(
                    "words={} size={} leaves={} branching={} height={} longest={}",
                    stats.words,
                    stats.size,
                    stats.num_leaves,
                    stats.maximum_branching,
                    stats.height,
                    stats.longest_word
                )
            }
            SessionCommand::Words => self.trie.all_words().join("\n"),
        }
    }
}

fn format_predictions(words: &[String]) -> String {
    if words.is_empty() {
        "(no match)".to_string()
    } else {
        words.join(", ")
    }
}
