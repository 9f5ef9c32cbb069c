//! A single (position, letter) constraint atom
//!
//! Parsed from the CLI's `POS=LETTER` form (e.g. `2=i`), validated with the
//! same rules as the constraint containers.

use super::error::ConstraintError;
use super::validate::{letter_byte, slot_index};
use std::str::FromStr;

/// One positional letter requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedLetter {
    position: usize,
    letter: char,
}

impl PositionedLetter {
    /// Create a validated (position, letter) pair
    ///
    /// # Errors
    /// Returns `ConstraintError` if the position is outside [1, 5] or the
    /// letter is not alphabetic.
    pub fn new(position: usize, letter: char) -> Result<Self, ConstraintError> {
        slot_index(position)?;
        let byte = letter_byte(letter)?;
        Ok(Self {
            position,
            letter: byte as char,
        })
    }

    /// The 1-based position
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The lowercase letter
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }
}

impl FromStr for PositionedLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position_part, letter_part) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected POS=LETTER (e.g. 2=i), got '{s}'"))?;

        let position: usize = position_part
            .trim()
            .parse()
            .map_err(|_| format!("Invalid position '{position_part}'"))?;

        let mut letters = letter_part.trim().chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(letter), None) => letter,
            _ => return Err(format!("Expected a single letter, got '{letter_part}'")),
        };

        Self::new(position, letter).map_err(|e| e.to_string())
    }
}
