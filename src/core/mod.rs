//! Core word types for word ladders
//!
//! Word normalization and wildcard pattern generation. Everything here is
//! pure and allocation-only, with no shared state.

mod pattern;
mod word;

pub use pattern::{PLACEHOLDER, patterns};
pub use word::normalize;
