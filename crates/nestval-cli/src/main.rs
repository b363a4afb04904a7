//! `nestval` CLI — merge, query and compare nested JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Layer overrides onto defaults (later files win)
//! nestval merge defaults.json local.json
//!
//! # Read a dotted path, with a fallback
//! nestval get defaults.api_call.request.base_url -i config.json --default '"http://localhost"'
//!
//! # Write a dotted path, creating intermediate objects
//! echo '{}' | nestval set defaults.api_call.response.status 200
//!
//! # Loose structural comparison (exit code 1 when different)
//! nestval eq expected.json actual.json
//!
//! # Identifiers
//! nestval digest --seed build-42
//!
//! # Predicates
//! nestval classify '"https://example.com"'
//! ```

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nestval_core::{
    deep_merge_all, digest, equal_values, is_array_index, is_url, nested, DigestOptions, Value,
};
use std::io::{self, Read};
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nestval",
    version,
    about = "Merge, query and compare nested JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level unless NESTVAL_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep-merge JSON documents left to right
    Merge {
        /// Input files; `-` or no files reads a single document from stdin
        files: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the value at a dotted path
    Get {
        /// Dotted path, e.g. `defaults.api_call.request`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// JSON value to print when the path is absent
        #[arg(long)]
        default: Option<String>,
    },
    /// Set the value at a dotted path and print the document
    Set {
        /// Dotted path, e.g. `defaults.api_call.response.status`
        path: String,
        /// JSON value; anything that does not parse is stored as a string
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compare two JSON documents loosely (exit code 1 when different)
    Eq {
        left: String,
        right: String,
    },
    /// Print a random digest, or a deterministic one for a seed
    Digest {
        #[arg(long)]
        seed: Option<String>,
    },
    /// Report whether a value is an array index and whether it is a URL
    Classify {
        /// JSON value; anything that does not parse is treated as a string
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Merge { files, output } => {
            let layers = read_layers(&files)?;
            debug!(layers = layers.len(), "merging documents");
            let merged = deep_merge_all(&layers);
            write_output(output.as_deref(), &to_pretty_json(&merged)?)?;
        }
        Commands::Get {
            path,
            input,
            default,
        } => {
            let document = read_document(input.as_deref())?;
            let fallback = default
                .as_deref()
                .map(Value::from_json_str)
                .transpose()
                .context("--default is not valid JSON")?;
            let found = match (nested::get(&document, &path), fallback.as_ref()) {
                (Some(found), _) => found,
                (None, Some(fallback)) => fallback,
                (None, None) => anyhow::bail!("No value at path '{}'", path),
            };
            write_output(None, &to_pretty_json(found)?)?;
        }
        Commands::Set {
            path,
            value,
            input,
            output,
        } => {
            let mut document = read_document(input.as_deref())?;
            nested::set(&mut document, &path, parse_value_arg(&value))
                .with_context(|| format!("Failed to set '{}'", path))?;
            write_output(output.as_deref(), &to_pretty_json(&document)?)?;
        }
        Commands::Eq { left, right } => {
            let left = read_document(Some(left.as_str()))?;
            let right = read_document(Some(right.as_str()))?;
            let equal = equal_values(&left, &right);
            println!("{}", equal);
            if !equal {
                process::exit(1);
            }
        }
        Commands::Digest { seed } => {
            println!("{}", digest(&DigestOptions { seed }));
        }
        Commands::Classify { value } => {
            let value = parse_value_arg(&value);
            println!("array_index: {}", is_array_index(&value));
            println!("url: {}", is_url(&value));
        }
    }

    Ok(())
}

/// Read every layer for `merge`. No files, or a lone `-`, means stdin.
fn read_layers(files: &[String]) -> Result<Vec<Value>> {
    if files.is_empty() {
        return Ok(vec![read_document(None)?]);
    }
    files
        .iter()
        .map(|file| read_document(if file == "-" { None } else { Some(file.as_str()) }))
        .collect()
}

/// Read and parse a JSON document. Blank input is treated as `{}`.
fn read_document(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    if text.trim().is_empty() {
        return Ok(Value::empty_object());
    }
    let source = path.unwrap_or("stdin");
    Value::from_json_str(&text).with_context(|| format!("Invalid JSON in {}", source))
}

/// Interpret a command-line value as JSON, falling back to a plain string so
/// `nestval set name Alice` works without quoting.
fn parse_value_arg(raw: &str) -> Value {
    Value::from_json_str(raw).unwrap_or_else(|_| Value::from(raw))
}

fn to_pretty_json(value: &Value) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    json.push('\n');
    Ok(json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
