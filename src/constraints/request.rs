//! Per-request constraint bundle

use super::error::ConstraintError;
use super::exact::ExactConstraints;
use super::excluded::ExcludedLetters;
use super::partial::PartialConstraints;
use crate::core::{Feedback, LetterScore, Word};

/// The full set of constraints for one filtering request
///
/// Constructed once per request, either by hand or from one round of game
/// feedback, consumed by the filter pipeline, and discarded. The three parts
/// are independent; a letter placed in both `excluded` and `exact`/`partial`
/// by hand is not reconciled and simply yields an empty result.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    pub exact: ExactConstraints,
    pub partial: PartialConstraints,
    pub excluded: ExcludedLetters,
}

impl ConstraintSet {
    /// Create an empty constraint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all three parts are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty() && self.excluded.is_empty()
    }

    /// Derive the constraints implied by one round of feedback
    ///
    /// Greens become exact requirements and yellows become
    /// present-but-misplaced requirements. A gray letter is excluded outright
    /// only when every occurrence of it in the guess scored gray; a gray
    /// duplicate of a letter that also scored green or yellow is still in the
    /// word, just not at the gray slot, so it becomes a misplacement mark
    /// instead. The result never puts a letter in both the exclusion set and
    /// a positional requirement.
    ///
    /// # Errors
    /// Returns `ConstraintError` if a derived requirement is malformed; with
    /// a valid guess word this does not happen, but the validation is kept on
    /// the single construction path rather than bypassed.
    pub fn from_feedback(guess: &Word, feedback: &Feedback) -> Result<Self, ConstraintError> {
        let mut set = Self::new();

        for (index, &score) in feedback.scores().iter().enumerate() {
            let position = index + 1;
            let letter = guess.char_at(index) as char;

            match score {
                LetterScore::Correct => set.exact.require(position, letter)?,
                LetterScore::Present => set.partial.require_elsewhere(position, letter)?,
                LetterScore::Absent => {
                    let in_word = feedback.scores().iter().enumerate().any(|(other, &s)| {
                        other != index
                            && s != LetterScore::Absent
                            && guess.char_at(other) == guess.char_at(index)
                    });
                    if in_word {
                        set.partial.require_elsewhere(position, letter)?;
                    } else {
                        set.excluded.exclude(letter)?;
                    }
                }
            }
        }

        Ok(set)
    }

    /// Whether a word satisfies every constraint in the set
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        self.exact.matches(word) && self.partial.permits(word) && self.excluded.permits(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(pattern: &str) -> Feedback {
        Feedback::from_str(pattern).unwrap()
    }

    #[test]
    fn empty_set_permits_everything() {
        let set = ConstraintSet::new();
        assert!(set.is_empty());
        assert!(set.permits(&word("crane")));
        assert!(set.permits(&word("zebra")));
    }

    #[test]
    fn from_feedback_greens_become_exact() {
        // Guessed "light", answer shaped ".ight"
        let set = ConstraintSet::from_feedback(&word("light"), &feedback("-GGGG")).unwrap();

        assert_eq!(set.exact.len(), 4);
        assert!(set.partial.is_empty());
        assert!(set.excluded.contains('l'));

        assert!(set.permits(&word("right")));
        assert!(set.permits(&word("sight")));
        assert!(!set.permits(&word("light"))); // contains the excluded 'l'
    }

    #[test]
    fn from_feedback_yellows_become_partial() {
        let set = ConstraintSet::from_feedback(&word("crane"), &feedback("Y----")).unwrap();

        assert!(set.exact.is_empty());
        assert_eq!(set.partial.len(), 1);
        for letter in ['r', 'a', 'n', 'e'] {
            assert!(set.excluded.contains(letter));
        }

        // 'c' must be present, but not at position 1
        assert!(set.permits(&word("yucky")));
        assert!(!set.permits(&word("comic"))); // 'c' at position 1
        assert!(!set.permits(&word("moist"))); // no 'c' at all
    }

    #[test]
    fn from_feedback_grays_become_excluded() {
        let set = ConstraintSet::from_feedback(&word("crane"), &feedback("-----")).unwrap();

        assert!(set.exact.is_empty());
        assert!(set.partial.is_empty());
        assert_eq!(set.excluded.len(), 5);
        for letter in ['c', 'r', 'a', 'n', 'e'] {
            assert!(set.excluded.contains(letter));
        }
    }

    #[test]
    fn from_feedback_gray_duplicate_is_not_excluded() {
        // "speed" against an answer with exactly one 'e': first 'e' scores
        // yellow, second 'e' scores gray. The gray must NOT exclude 'e'.
        let set = ConstraintSet::from_feedback(&word("speed"), &feedback("--Y--")).unwrap();

        assert!(!set.excluded.contains('e'));
        // The gray slot becomes a misplacement mark for 'e' at position 4
        assert_eq!(set.partial.len(), 2);

        // A word with one 'e' away from positions 3 and 4 is permitted
        assert!(set.permits(&word("ebony")));
        // A word with 'e' at position 4 is not
        assert!(!set.permits(&word("amber")));
    }

    #[test]
    fn from_feedback_gray_duplicate_of_green_is_not_excluded() {
        // "erase": 'e' green at position 1, the duplicate 'e' gray at position 5
        let set = ConstraintSet::from_feedback(&word("erase"), &feedback("G----")).unwrap();

        assert!(!set.excluded.contains('e'));
        assert!(set.excluded.contains('r'));
        assert!(set.excluded.contains('a'));
        assert!(set.excluded.contains('s'));
        // The gray 'e' becomes a misplacement mark at position 5
        assert_eq!(set.partial.len(), 1);
    }

    #[test]
    fn from_feedback_win_pattern() {
        let set = ConstraintSet::from_feedback(&word("crane"), &Feedback::WIN).unwrap();

        assert_eq!(set.exact.len(), 5);
        assert!(set.partial.is_empty());
        assert!(set.excluded.is_empty());
        assert!(set.permits(&word("crane")));
        assert!(!set.permits(&word("slate")));
    }

    #[test]
    fn permits_is_conjunction_of_all_three_parts() {
        let mut set = ConstraintSet::new();
        set.exact.require(5, 't').unwrap();
        set.partial.require_elsewhere(1, 'r').unwrap();
        set.excluded.exclude('o').unwrap();

        // "smart": ends in 't', contains 'r' away from position 1, no 'o'
        assert!(set.permits(&word("smart")));
        // fails exact (does not end in 't')
        assert!(!set.permits(&word("irate")));
        // fails partial ('r' at position 1)
        assert!(!set.permits(&word("rivet")));
        // fails excluded (contains 'o')
        assert!(!set.permits(&word("court")));
    }
}
