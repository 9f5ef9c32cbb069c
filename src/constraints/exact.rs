//! Exact-position ("green") constraints

use super::error::ConstraintError;
use super::validate::{letter_byte, slot_index};
use crate::core::{WORD_LEN, Word};

/// Letters required at specific positions
///
/// Stored as a fixed-size array indexed by position, so at most one letter
/// can be required per slot and out-of-range positions are rejected at
/// insertion. The public API is 1-based, matching game convention; storage
/// is 0-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactConstraints {
    slots: [Option<u8>; WORD_LEN],
}

impl ExactConstraints {
    /// Create an empty set of exact constraints
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; WORD_LEN],
        }
    }

    /// Require `letter` at 1-based `position`
    ///
    /// Requiring the same letter at the same position twice is a no-op.
    ///
    /// # Errors
    /// Returns `ConstraintError` if the position is outside [1, 5], the
    /// letter is not alphabetic, or a different letter is already required
    /// at that position.
    pub fn require(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        let index = slot_index(position)?;
        let byte = letter_byte(letter)?;

        match self.slots[index] {
            Some(existing) if existing != byte => Err(ConstraintError::ConflictingRequirement {
                position,
                existing: existing as char,
                proposed: byte as char,
            }),
            _ => {
                self.slots[index] = Some(byte);
                Ok(())
            }
        }
    }

    /// Whether no positions are constrained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of constrained positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate (0-based index, letter byte) pairs for constrained positions
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|letter| (index, letter)))
    }

    /// Whether the word has every required letter at its required position
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.entries()
            .all(|(index, letter)| word.char_at(index) == letter)
    }
}
