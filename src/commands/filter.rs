//! Declarative filter command
//!
//! Runs one filter pass over a dictionary and reports the survivors along
//! with how much each stage narrowed the list.

use crate::constraints::ConstraintSet;
use crate::core::Word;
use crate::filter::{
    apply_exact_constraints, apply_excluded_letters, apply_partial_constraints,
};

/// Result of one filter pass
pub struct FilterResult {
    pub initial_count: usize,
    pub after_exact: usize,
    pub after_partial: usize,
    pub after_excluded: usize,
    pub survivors: Vec<String>,
}

impl FilterResult {
    /// Number of surviving candidates
    #[must_use]
    pub fn count(&self) -> usize {
        self.survivors.len()
    }
}

/// Run one declarative filter pass over the dictionary
///
/// Stages run in the fixed order exact → partial → excluded, recording the
/// candidate count after each one.
#[must_use]
pub fn run_filter(words: &[Word], constraints: &ConstraintSet) -> FilterResult {
    let candidates: Vec<&Word> = words.iter().collect();
    let initial_count = candidates.len();

    let survivors = apply_exact_constraints(&candidates, &constraints.exact);
    let after_exact = survivors.len();

    let survivors = apply_partial_constraints(&survivors, &constraints.partial);
    let after_partial = survivors.len();

    let survivors = apply_excluded_letters(&survivors, &constraints.excluded);
    let after_excluded = survivors.len();

    FilterResult {
        initial_count,
        after_exact,
        after_partial,
        after_excluded,
        survivors: survivors
            .into_iter()
            .map(|word| word.text().to_string())
            .collect(),
    }
}
