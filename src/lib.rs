//! Wordle Filter
//!
//! Narrows a dictionary of 5-letter words to the subset consistent with
//! word-guessing-game feedback, using a three-stage constraint pipeline
//! (exact → partial → excluded).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::constraints::ConstraintSet;
//! use wordle_filter::core::Word;
//! use wordle_filter::filter::filter_words;
//!
//! let words = vec![
//!     Word::new("apple").unwrap(),
//!     Word::new("angle").unwrap(),
//!     Word::new("ankle").unwrap(),
//! ];
//!
//! // The game said 'p' is not in the word
//! let mut constraints = ConstraintSet::new();
//! constraints.excluded.exclude('p').unwrap();
//!
//! let survivors = filter_words(&words, &constraints);
//! assert_eq!(survivors.len(), 2);
//! ```

// Core domain types
pub mod core;

// Constraint data model
pub mod constraints;

// The filtering pipeline
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
