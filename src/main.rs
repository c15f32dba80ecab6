//! Word Morph - CLI
//!
//! Shortest steps to morph one word into another, one letter at a time.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_morph::{
    commands::{MorphConfig, run_morph},
    output::{print_adjacent, print_contents, print_morph_result},
};

#[derive(Parser)]
#[command(
    name = "word_morph",
    about = "Shortest steps to morph one word into another one letter at a time",
    version,
    author
)]
struct Cli {
    /// Text file with list of words
    file_name: PathBuf,

    /// Number of letters per word
    word_length: usize,

    /// Start word
    start: String,

    /// End word
    end: String,

    /// Show debug information (graph buckets and endpoint neighbors)
    #[arg(short, long)]
    verbose: bool,

    /// Worker threads for building the graph (default: one per CPU)
    #[arg(short = 'j', long)]
    workers: Option<usize>,
}

/// Install the log subscriber
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "word_morph=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = MorphConfig::new(&cli.file_name, cli.word_length, &cli.start, &cli.end);
    config.workers = cli.workers;
    config.progress = cli.verbose;

    let result = run_morph(config)
        .with_context(|| format!("could not build word graph from {}", cli.file_name.display()))?;

    if cli.verbose {
        print_contents(&result.graph);
        print_adjacent(&result.graph, &result.start);
        print_adjacent(&result.graph, &result.end);
    }

    print_morph_result(&result);
    Ok(())
}
