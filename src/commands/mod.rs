//! Command implementations

pub mod filter;
pub mod interactive;

pub use filter::{FilterResult, run_filter};
pub use interactive::run_interactive;
