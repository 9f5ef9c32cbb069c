//! Shared validation helpers for constraint construction

use super::error::ConstraintError;
use crate::core::WORD_LEN;

/// Convert a 1-based game position to a 0-based slot index
///
/// Positions outside [1, 5] are rejected here, at construction, instead of
/// being silently ignored during filtering.
pub(crate) fn slot_index(position: usize) -> Result<usize, ConstraintError> {
    if (1..=WORD_LEN).contains(&position) {
        Ok(position - 1)
    } else {
        Err(ConstraintError::PositionOutOfRange(position))
    }
}

/// Normalize a constraint letter to its lowercase byte form
pub(crate) fn letter_byte(letter: char) -> Result<u8, ConstraintError> {
    let normalized = letter.to_ascii_lowercase();
    if normalized.is_ascii_lowercase() {
        Ok(normalized as u8)
    } else {
        Err(ConstraintError::InvalidLetter(letter))
    }
}
