//! lazy-levenshtein - Fuzzy dictionary lookup with lazy Levenshtein automata
//!
//! Provides CLI utilities for building, inspecting and querying dictionaries.

use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::process;

use lazy_levenshtein::cli::commands;
use lazy_levenshtein::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

/// `-v` flags raise the level from `warn`; `RUST_LOG` overrides them.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
