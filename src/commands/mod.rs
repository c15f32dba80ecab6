//! Command implementations

pub mod morph;

pub use morph::{MorphConfig, MorphResult, run_morph};
