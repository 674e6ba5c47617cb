//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::transducer::Algorithm;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "lazy-levenshtein")]
#[command(about = "Fuzzy dictionary lookup with lazy Levenshtein automata")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Query dictionary for fuzzy matches
    Query {
        /// Query term
        term: String,

        /// Dictionary file (word list, .bin or .json)
        #[arg(short, long)]
        dict: PathBuf,

        /// Maximum edit distance
        #[arg(short = 'm', long, default_value = "2")]
        max_distance: usize,

        /// Levenshtein algorithm
        #[arg(short, long, default_value = "standard")]
        algorithm: Algorithm,

        /// Show distances
        #[arg(short = 's', long)]
        show_distances: bool,

        /// Limit results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Sort the word list instead of rejecting out-of-order terms
        #[arg(long)]
        unsorted: bool,
    },

    /// Check whether a term is in the dictionary
    Contains {
        /// Term to look up
        term: String,

        /// Dictionary file
        #[arg(short, long)]
        dict: PathBuf,

        /// Sort the word list instead of rejecting out-of-order terms
        #[arg(long)]
        unsorted: bool,
    },

    /// Display dictionary information
    Info {
        /// Dictionary file
        #[arg(short, long)]
        dict: PathBuf,

        /// Sort the word list instead of rejecting out-of-order terms
        #[arg(long)]
        unsorted: bool,
    },

    /// Build a dictionary from a word list and save it serialized
    Convert {
        /// Input word list
        input: PathBuf,

        /// Output dictionary file
        output: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "bincode")]
        format: SerializationFormat,

        /// Sort the word list instead of rejecting out-of-order terms
        #[arg(long)]
        unsorted: bool,
    },
}

/// On-disk dictionary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SerializationFormat {
    /// Plain text (one term per line)
    Text,
    /// Bincode binary format
    Bincode,
    /// JSON format
    Json,
}

impl SerializationFormat {
    /// Guess the format of a dictionary file from its extension.
    ///
    /// `.bin` and `.bincode` are bincode, `.json` is JSON, anything else is
    /// read as a word list.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("bin") | Some("bincode") => Self::Bincode,
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

impl std::fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Bincode => write!(f, "bincode"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SerializationFormat::from_path(Path::new("words.bin")), SerializationFormat::Bincode);
        assert_eq!(SerializationFormat::from_path(Path::new("words.JSON")), SerializationFormat::Json);
        assert_eq!(SerializationFormat::from_path(Path::new("words.txt")), SerializationFormat::Text);
        assert_eq!(SerializationFormat::from_path(Path::new("words")), SerializationFormat::Text);
    }

    #[test]
    fn test_parse_query_command() {
        let cli = Cli::try_parse_from([
            "lazy-levenshtein",
            "-vv",
            "query",
            "teh",
            "--dict",
            "words.txt",
            "-a",
            "transposition",
            "-m",
            "1",
            "--show-distances",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Query {
                term,
                algorithm,
                max_distance,
                show_distances,
                limit,
                unsorted,
                ..
            } => {
                assert_eq!(term, "teh");
                assert_eq!(algorithm, Algorithm::Transposition);
                assert_eq!(max_distance, 1);
                assert!(show_distances);
                assert_eq!(limit, None);
                assert!(!unsorted);
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let result = Cli::try_parse_from([
            "lazy-levenshtein",
            "query",
            "x",
            "--dict",
            "words.txt",
            "--algorithm",
            "soundex",
        ]);
        assert!(result.is_err());
    }
}
