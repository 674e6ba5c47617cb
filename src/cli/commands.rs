//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use crate::dictionary::Dawg;
use crate::serialization::{BincodeSerializer, DictionarySerializer, JsonSerializer};
use crate::transducer::{Algorithm, Candidate, Transducer};

use super::args::{Commands, SerializationFormat};

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Query {
            term,
            dict,
            max_distance,
            algorithm,
            show_distances,
            limit,
            unsorted,
        } => {
            let dict = load_dictionary(&dict, unsorted)?;
            let results = run_query(dict, &term, max_distance, algorithm, limit);
            print_results(&results, show_distances);
            Ok(())
        }
        Commands::Contains {
            term,
            dict,
            unsorted,
        } => cmd_contains(&term, &dict, unsorted),
        Commands::Info { dict, unsorted } => cmd_info(&dict, unsorted),
        Commands::Convert {
            input,
            output,
            format,
            unsorted,
        } => cmd_convert(&input, &output, format, unsorted),
    }
}

/// Find every term within `max_distance` of `term`, closest first.
pub fn run_query(
    dict: Dawg,
    term: &str,
    max_distance: usize,
    algorithm: Algorithm,
    limit: Option<usize>,
) -> Vec<Candidate> {
    let transducer = Transducer::new(dict, algorithm);
    let mut results: Vec<Candidate> = transducer.query_with_distance(term, max_distance).collect();

    results.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.term.cmp(&b.term)));
    if let Some(lim) = limit {
        results.truncate(lim);
    }
    results
}

fn print_results(results: &[Candidate], show_distances: bool) {
    if results.is_empty() {
        println!("{}", "No matches found".yellow());
        return;
    }

    for (i, candidate) in results.iter().enumerate() {
        if show_distances {
            println!("   {}. {} (d={})", i + 1, candidate.term.green(), candidate.distance);
        } else {
            println!("   {}. {}", i + 1, candidate.term.green());
        }
    }
    println!();
    println!("{} match(es) found", results.len());
}

fn cmd_contains(term: &str, dict_path: &Path, unsorted: bool) -> Result<()> {
    let dict = load_dictionary(dict_path, unsorted)?;
    if dict.contains(term) {
        println!("{} {}", "✓".green(), term);
    } else {
        println!("{} {} not found", "✗".red(), term);
    }
    Ok(())
}

fn cmd_info(dict_path: &Path, unsorted: bool) -> Result<()> {
    let dict = load_dictionary(dict_path, unsorted)?;

    println!("{}", "Dictionary Information".bold().underline());
    println!();
    println!("  Path:    {}", dict_path.display().to_string().cyan());
    println!(
        "  Format:  {}",
        SerializationFormat::from_path(dict_path).to_string().green()
    );
    println!("  Terms:   {}", dict.len().to_string().green());
    println!("  Nodes:   {}", dict.node_count().to_string().green());
    println!("  Edges:   {}", dict.edge_count().to_string().green());
    if !dict.is_empty() {
        println!("  Ratio:   {:.2}x", dict.node_count() as f64 / dict.len() as f64);
    }
    println!();

    Ok(())
}

fn cmd_convert(input: &Path, output: &Path, format: SerializationFormat, unsorted: bool) -> Result<()> {
    let dict = load_word_list(input, unsorted)?;
    println!(
        "{}  Input:  {} ({} terms)",
        "→".cyan(),
        input.display().to_string().yellow(),
        dict.len().to_string().green()
    );

    save_dictionary(&dict, output, format)?;
    println!(
        "{}  Output: {} ({})",
        "→".cyan(),
        output.display().to_string().yellow(),
        format.to_string().green()
    );

    println!();
    println!("{}", "Conversion complete!".green().bold());

    Ok(())
}

/// Load a dictionary, choosing the format from the file extension.
pub fn load_dictionary(path: &Path, unsorted: bool) -> Result<Dawg> {
    match SerializationFormat::from_path(path) {
        SerializationFormat::Text => load_word_list(path, unsorted),
        SerializationFormat::Bincode => {
            let file = open(path)?;
            BincodeSerializer::deserialize_dictionary(BufReader::new(file))
                .with_context(|| format!("Failed to read bincode dictionary: {}", path.display()))
        }
        SerializationFormat::Json => {
            let file = open(path)?;
            JsonSerializer::deserialize_dictionary(BufReader::new(file))
                .with_context(|| format!("Failed to read JSON dictionary: {}", path.display()))
        }
    }
}

/// Build a dictionary from a newline-separated word list.
///
/// Blank lines and lines starting with `#` are skipped. The list must be
/// sorted unless `unsorted` is set, in which case it is sorted here.
pub fn load_word_list(path: &Path, unsorted: bool) -> Result<Dawg> {
    let reader = BufReader::new(open(path)?);

    let mut terms = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            terms.push(trimmed.to_string());
        }
    }

    if unsorted {
        return Ok(Dawg::from_terms(terms));
    }

    Dawg::build(&terms, true).with_context(|| {
        format!(
            "Word list {} is not sorted (use --unsorted to sort it on load)",
            path.display()
        )
    })
}

/// Write a dictionary in the given format.
pub fn save_dictionary(dict: &Dawg, path: &Path, format: SerializationFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        SerializationFormat::Text => {
            use std::io::Write;
            for term in dict.iter() {
                writeln!(writer, "{}", term)?;
            }
            writer.flush()?;
        }
        SerializationFormat::Bincode => BincodeSerializer::serialize_dictionary(dict, writer)?,
        SerializationFormat::Json => JsonSerializer::serialize_dictionary(dict, writer)?,
    }

    log::debug!("wrote {} terms to {} as {}", dict.len(), path.display(), format);
    Ok(())
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))
}
