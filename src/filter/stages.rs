//! The three filter stage operations
//!
//! Each stage is a pure pass over the candidate list: total over valid
//! constraints, order-preserving, and monotonic (the output is a
//! subsequence of the input). An empty constraint leaves the list
//! unchanged.

use crate::constraints::{ExactConstraints, ExcludedLetters, PartialConstraints};
use crate::core::Word;

/// Retain words whose letter at each constrained position matches ("green")
#[must_use]
pub fn apply_exact_constraints<'a>(
    words: &[&'a Word],
    exact: &ExactConstraints,
) -> Vec<&'a Word> {
    words
        .iter()
        .copied()
        .filter(|word| exact.matches(word))
        .collect()
}

/// Retain words that contain each marked letter, but not at its marked position ("yellow")
#[must_use]
pub fn apply_partial_constraints<'a>(
    words: &[&'a Word],
    partial: &PartialConstraints,
) -> Vec<&'a Word> {
    words
        .iter()
        .copied()
        .filter(|word| partial.permits(word))
        .collect()
}

/// Retain words containing none of the excluded letters ("gray")
#[must_use]
pub fn apply_excluded_letters<'a>(
    words: &[&'a Word],
    excluded: &ExcludedLetters,
) -> Vec<&'a Word> {
    words
        .iter()
        .copied()
        .filter(|word| excluded.permits(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    fn texts<'a>(survivors: &[&'a Word]) -> Vec<&'a str> {
        survivors.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn exact_stage_keeps_matching_words() {
        let dictionary = words(&["light", "right", "crane", "might"]);
        let mut exact = ExactConstraints::new();
        exact.require(2, 'i').unwrap();
        exact.require(5, 't').unwrap();

        let survivors = apply_exact_constraints(&refs(&dictionary), &exact);
        assert_eq!(texts(&survivors), vec!["light", "right", "might"]);
    }

    #[test]
    fn exact_stage_empty_constraints_is_identity() {
        let dictionary = words(&["crane", "slate", "irate"]);
        let candidates = refs(&dictionary);

        let survivors = apply_exact_constraints(&candidates, &ExactConstraints::new());
        assert_eq!(survivors, candidates);
    }

    #[test]
    fn partial_stage_requires_presence_and_misplacement() {
        let dictionary = words(&["light", "table", "right"]);
        let mut partial = PartialConstraints::new();
        partial.require_elsewhere(1, 'l').unwrap();

        // "light" has 'l' only at position 1; "right" has no 'l'
        let survivors = apply_partial_constraints(&refs(&dictionary), &partial);
        assert_eq!(texts(&survivors), vec!["table"]);
    }

    #[test]
    fn partial_stage_empty_constraints_is_identity() {
        let dictionary = words(&["crane", "slate"]);
        let candidates = refs(&dictionary);

        let survivors = apply_partial_constraints(&candidates, &PartialConstraints::new());
        assert_eq!(survivors, candidates);
    }

    #[test]
    fn excluded_stage_drops_words_with_excluded_letters() {
        let dictionary = words(&["apple", "angle", "ankle"]);
        let mut excluded = ExcludedLetters::new();
        excluded.exclude('p').unwrap();

        let survivors = apply_excluded_letters(&refs(&dictionary), &excluded);
        assert_eq!(texts(&survivors), vec!["angle", "ankle"]);
    }

    #[test]
    fn excluded_stage_empty_set_is_identity() {
        let dictionary = words(&["crane", "slate"]);
        let candidates = refs(&dictionary);

        let survivors = apply_excluded_letters(&candidates, &ExcludedLetters::new());
        assert_eq!(survivors, candidates);
    }

    #[test]
    fn stages_are_monotonic() {
        let dictionary = words(&["light", "right", "sight", "fight", "might"]);
        let candidates = refs(&dictionary);

        let mut exact = ExactConstraints::new();
        exact.require(1, 'l').unwrap();
        let mut partial = PartialConstraints::new();
        partial.require_elsewhere(2, 'i').unwrap();
        let mut excluded = ExcludedLetters::new();
        excluded.exclude('g').unwrap();

        let after_exact = apply_exact_constraints(&candidates, &exact);
        assert!(after_exact.len() <= candidates.len());

        let after_partial = apply_partial_constraints(&candidates, &partial);
        assert!(after_partial.len() <= candidates.len());

        let after_excluded = apply_excluded_letters(&candidates, &excluded);
        assert!(after_excluded.len() <= candidates.len());
    }

    #[test]
    fn exact_stage_is_idempotent() {
        let dictionary = words(&["light", "right", "sight", "crane", "slate"]);
        let mut exact = ExactConstraints::new();
        exact.require(2, 'i').unwrap();
        exact.require(3, 'g').unwrap();

        let once = apply_exact_constraints(&refs(&dictionary), &exact);
        let twice = apply_exact_constraints(&once, &exact);
        assert_eq!(once, twice);
    }

    #[test]
    fn stages_never_reorder_survivors() {
        let dictionary = words(&["might", "fight", "sight", "right", "light"]);
        let mut exact = ExactConstraints::new();
        exact.require(5, 't').unwrap();

        let survivors = apply_exact_constraints(&refs(&dictionary), &exact);
        assert_eq!(
            texts(&survivors),
            vec!["might", "fight", "sight", "right", "light"]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let candidates: Vec<&Word> = Vec::new();
        let mut exact = ExactConstraints::new();
        exact.require(1, 'a').unwrap();

        assert!(apply_exact_constraints(&candidates, &exact).is_empty());
        assert!(apply_partial_constraints(&candidates, &PartialConstraints::new()).is_empty());
        assert!(apply_excluded_letters(&candidates, &ExcludedLetters::new()).is_empty());
    }
}
