//! Mauka Dictionary - Main entrypoint.
//!
//! Loads a word list into a Lanai Trie and answers queries against it,
//! either as one-shot subcommands or as an interactive session on stdin.

use clap::{Parser, Subcommand};
use mauka_dictionary_lib::config::{ConfigLoader, LogConfig, MaukaConfig, ENV_PREFIX};
use mauka_dictionary_lib::data_structures::LanaiTrie;
use mauka_dictionary_lib::error::{
    report_error, set_error_reporter, ErrorContext, MaukaError, MaukaResult, TracingErrorReporter,
};
use mauka_dictionary_lib::loader::WordLoader;
use mauka_dictionary_lib::session::Session;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Mauka Dictionary.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Dictionary", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print structural statistics of a word list
    Stats {
        /// Word list to load
        words: PathBuf,

        /// Print JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// Predict the most popular words for a prefix
    Predict {
        /// Word list to load
        words: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Number of predictions
        #[clap(short = 'n', long)]
        count: Option<usize>,

        /// Print JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// Check whether words are stored
    Contains {
        /// Word list to load
        words: PathBuf,

        /// Words to look up
        #[clap(required = true)]
        queries: Vec<String>,
    },

    /// Print every stored word
    Words {
        /// Word list to load
        words: PathBuf,
    },

    /// Read commands from stdin, one per line
    Interactive {
        /// Word list to load
        words: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_trie(config: &MaukaConfig, path: &Path) -> MaukaResult<LanaiTrie> {
    let mut trie = mauka_dictionary_lib::build_trie(config);
    WordLoader::new(config.loader.clone()).load_file(path, &mut trie)?;
    Ok(trie)
}

fn run(command: Command, config: &MaukaConfig) -> MaukaResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Stats { words, json } => {
            let stats = load_trie(config, &words)?.stats();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(out, "words:             {}", stats.words)?;
                writeln!(out, "size:              {}", stats.size)?;
                writeln!(out, "leaves:            {}", stats.num_leaves)?;
                writeln!(out, "maximum branching: {}", stats.maximum_branching)?;
                writeln!(out, "height:            {}", stats.height)?;
                writeln!(out, "longest word:      {}", stats.longest_word)?;
            }
        }
        Command::Predict {
            words,
            prefix,
            count,
            json,
        } => {
            let trie = load_trie(config, &words)?;
            let predictions = trie.predictions(&prefix, config.prediction.resolve(count));
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&predictions)?)?;
            } else {
                for prediction in predictions {
                    match prediction.popularity {
                        Some(popularity) => writeln!(out, "{}\t{}", prediction.word, popularity)?,
                        None => writeln!(out, "{}", prediction.word)?,
                    }
                }
            }
        }
        Command::Contains { words, queries } => {
            let trie = load_trie(config, &words)?;
            for query in queries {
                writeln!(out, "{}\t{}", query, trie.contains(&query))?;
            }
        }
        Command::Words { words } => {
            for word in load_trie(config, &words)?.all_words() {
                writeln!(out, "{word}")?;
            }
        }
        Command::Interactive { words } => {
            let trie = load_trie(config, &words)?;
            info!(words = trie.len(), "Dictionary ready");
            let mut session = Session::new(trie, config.prediction.clone());

            write!(out, "> ")?;
            out.flush()?;
            for line in io::stdin().lock().lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    writeln!(out, "{}", session.handle_line(&line))?;
                }
                write!(out, "> ")?;
                out.flush()?;
            }
            writeln!(out)?;
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            writeln!(out, "configuration ok")?;
        }
        Command::GenConfig { output } => {
            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&MaukaConfig::default())
                .map_err(|e| MaukaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(&ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = run(args.command, &config) {
        report_error(&ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
