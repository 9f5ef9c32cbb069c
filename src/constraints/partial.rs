//! Present-but-misplaced ("yellow") constraints

use super::error::ConstraintError;
use super::validate::{letter_byte, slot_index};
use crate::core::{WORD_LEN, Word};

/// Letters known to be in the word but confirmed absent at a specific position
///
/// Same storage shape as the exact constraints: a fixed-size array indexed
/// by position, one letter per slot, 1-based public API. A word satisfies an
/// entry only if the letter appears somewhere in the word AND not at the
/// marked position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConstraints {
    slots: [Option<u8>; WORD_LEN],
}

impl PartialConstraints {
    /// Create an empty set of partial constraints
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; WORD_LEN],
        }
    }

    /// Mark `letter` as present in the word but not at 1-based `position`
    ///
    /// Marking the same letter at the same position twice is a no-op.
    ///
    /// # Errors
    /// Returns `ConstraintError` if the position is outside [1, 5], the
    /// letter is not alphabetic, or a different letter is already marked at
    /// that position.
    pub fn require_elsewhere(
        &mut self,
        position: usize,
        letter: char,
    ) -> Result<(), ConstraintError> {
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

    /// Whether the word contains every marked letter, none of them at its marked position
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        self.entries()
            .all(|(index, letter)| word.char_at(index) != letter && word.has_letter(letter))
    }
}
