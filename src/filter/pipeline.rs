//! Pipeline composition
//!
//! Applies the three stages in the fixed order exact → partial → excluded.
//! The stages are independent conjunctive filters, so any order yields the
//! same surviving set; the order is fixed for parity with known fixtures.

use super::stages::{
    apply_exact_constraints, apply_excluded_letters, apply_partial_constraints,
};
use crate::constraints::ConstraintSet;
use crate::core::Word;

/// Filter a word list down to the candidates satisfying every constraint
///
/// Order is preserved; an empty dictionary or an over-constrained request
/// yields an empty (still valid) result.
///
/// # Examples
/// ```
/// use wordle_filter::constraints::ConstraintSet;
/// use wordle_filter::core::Word;
/// use wordle_filter::filter::filter_words;
///
/// let words = vec![
///     Word::new("apple").unwrap(),
///     Word::new("angle").unwrap(),
///     Word::new("ankle").unwrap(),
/// ];
///
/// let mut constraints = ConstraintSet::new();
/// constraints.excluded.exclude('p').unwrap();
///
/// let survivors = filter_words(&words, &constraints);
/// assert_eq!(survivors.len(), 2);
/// ```
#[must_use]
pub fn filter_words<'a>(words: &'a [Word], constraints: &ConstraintSet) -> Vec<&'a Word> {
    let candidates: Vec<&Word> = words.iter().collect();

    let survivors = apply_exact_constraints(&candidates, &constraints.exact);
    let survivors = apply_partial_constraints(&survivors, &constraints.partial);
    apply_excluded_letters(&survivors, &constraints.excluded)
}
