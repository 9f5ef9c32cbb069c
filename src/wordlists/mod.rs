//! Word lists
//!
//! Provides the embedded default dictionary compiled into the binary and a
//! loader for caller-supplied plain-text word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
