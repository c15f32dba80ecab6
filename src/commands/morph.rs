//! Word morph command
//!
//! Loads a dictionary, builds the adjacency index and searches for the
//! shortest ladder between two words.

use crate::core::normalize;
use crate::graph::Graph;
use crate::search::{Ladder, PathFinder};
use crate::wordlists::LoadError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Configuration for a morph run
#[derive(Debug, Clone)]
pub struct MorphConfig {
    pub file: PathBuf,
    pub word_length: usize,
    pub start: String,
    pub end: String,
    /// Parallel build workers; defaults to the rayon pool size
    pub workers: Option<usize>,
    /// Show a spinner while the dictionary loads
    pub progress: bool,
}

impl MorphConfig {
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, word_length: usize, start: &str, end: &str) -> Self {
        Self {
            file: file.into(),
            word_length,
            start: normalize(start).unwrap_or_default(),
            end: normalize(end).unwrap_or_default(),
            workers: None,
            progress: false,
        }
    }
}

/// Result of a morph run
#[derive(Debug)]
pub struct MorphResult {
    pub start: String,
    pub end: String,
    pub graph: Graph,
    pub ladder: Option<Ladder>,
}

/// Build the graph described by `config` and search it
///
/// # Errors
///
/// Returns a [`LoadError`] if the word list cannot be read or the word
/// length is zero.
pub fn run_morph(config: MorphConfig) -> Result<MorphResult, LoadError> {
    let spinner = config.progress.then(|| {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Indexing {}", config.file.display()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    });

    let graph = Graph::build_from_file(&config.file, config.word_length, config.workers);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let graph = graph?;
    info!(
        file = %config.file.display(),
        word_length = config.word_length,
        words = graph.len(),
        "dictionary indexed"
    );

    let ladder = PathFinder::new(&graph).find(&config.start, &config.end);

    Ok(MorphResult {
        start: config.start,
        end: config.end,
        graph,
        ladder,
    })
}
