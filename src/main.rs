use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keytext_reader::{convert_body, KeyTextReader};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "keytext-reader",
    about = "Decode a dictionary key-text index file and report its contents",
    version
)]
struct Cli {
    /// Path to the key-text index file
    keytext: PathBuf,

    /// Tab-separated body file to convert alongside the index
    #[arg(short, long)]
    body: Option<PathBuf>,

    /// The dictionary carries yomi (reading) fields
    #[arg(long)]
    yomi: bool,

    /// Number of sample keys to print
    #[arg(short, long, default_value_t = 10)]
    samples: usize,

    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Also captures the library's `log` records.
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    println!("Reading key-text file: {}", cli.keytext.display());
    println!("{}", "=".repeat(60));

    let reader = KeyTextReader::open(&cli.keytext)
        .with_context(|| format!("failed to read {}", cli.keytext.display()))?;
    let blob_len = reader.len();
    let index = reader
        .into_index(cli.yomi)
        .with_context(|| format!("failed to decode {}", cli.keytext.display()))?;

    println!("\nStatistics:");
    println!("  File size: {} bytes", blob_len);
    println!("  Search keys (merged): {}", index.len());
    println!("  Index links (split): {}", index.num_entries());

    println!("\nSample Keys (first {}):", cli.samples);
    for (i, (key, entries)) in index.iter().take(cli.samples).enumerate() {
        println!("  {}. {} ({} entries)", i + 1, key, entries.len());
        for entry in entries {
            let anchor = if entry.anchor.is_empty() {
                String::new()
            } else {
                format!("#{}", entry.anchor)
            };
            let yomi = if entry.yomi.is_empty() {
                String::new()
            } else {
                format!(" [{}]", entry.yomi)
            };
            println!("     - {} -> {}{}{}", entry.title, entry.entry_ref, anchor, yomi);
        }
    }
    if index.len() > cli.samples {
        println!("  ... and {} more", index.len() - cli.samples);
    }

    if let Some(body_path) = &cli.body {
        let body = convert_body(body_path)
            .with_context(|| format!("failed to convert {}", body_path.display()))?;
        let split: usize = body.values().map(Vec::len).sum();
        println!("\nBody:");
        println!("  Headwords (merged): {}", body.len());
        println!("  Entries (split): {}", split);
    }

    Ok(())
}
