//! CLI interface for lazy-levenshtein
//!
//! Provides command-line utilities for dictionary operations and queries.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, SerializationFormat};
