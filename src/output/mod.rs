//! Terminal output formatting
//!
//! Display utilities for CLI results and graph diagnostics.

pub mod display;
pub mod formatters;

pub use display::{print_adjacent, print_contents, print_morph_result};
