//! The constraint filter pipeline
//!
//! Reduces a word list to the subset satisfying all supplied constraints by
//! applying three independent predicates in a fixed order: exact positions,
//! misplaced letters, excluded letters.

mod pipeline;
mod stages;

pub use pipeline::filter_words;
pub use stages::{apply_exact_constraints, apply_excluded_letters, apply_partial_constraints};
