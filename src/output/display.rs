//! Display functions for command results

use super::formatters::{adjacent_report, bucket_line, steps_line};
use crate::commands::MorphResult;
use crate::graph::Graph;
use colored::Colorize;

/// Print every bucket of the graph, sorted by pattern
pub fn print_contents(graph: &Graph) {
    println!("{}", "Graph:".bright_cyan().bold());
    for (pattern, words) in graph.buckets_sorted() {
        println!("{}", bucket_line(pattern, &words));
    }
    println!();
}

/// Print the neighbors of a single word
pub fn print_adjacent(graph: &Graph, word: &str) {
    println!("{}", adjacent_report(graph, word));
}

/// Print the outcome of a morph
pub fn print_morph_result(result: &MorphResult) {
    println!(
        "Morph: {} to {}",
        result.start.bright_yellow().bold(),
        result.end.bright_yellow().bold()
    );

    match &result.ladder {
        Some(ladder) => {
            println!("{}", steps_line(ladder).green().bold());
            for word in &ladder.path {
                println!("{word}");
            }
        }
        None => println!("{}", "No solution.".red().bold()),
    }
}
