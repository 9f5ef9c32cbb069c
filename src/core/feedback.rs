//! Per-round game feedback
//!
//! One round of feedback scores each position of a guess:
//! - Correct: the letter is in the right slot ("green")
//! - Present: the letter is in the word but at a different slot ("yellow")
//! - Absent: the letter is not in the word ("gray")

use super::word::WORD_LEN;
use std::fmt;

/// Score for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    Correct,
    Present,
    Absent,
}

/// Feedback for a full guess, one score per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterScore; WORD_LEN]);

impl Feedback {
    /// All correct (the guess was the answer)
    pub const WIN: Self = Self([LetterScore::Correct; WORD_LEN]);

    /// Create feedback from per-position scores
    #[inline]
    #[must_use]
    pub const fn new(scores: [LetterScore; WORD_LEN]) -> Self {
        Self(scores)
    }

    /// Get the per-position scores
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LEN] {
        &self.0
    }

    /// Get the score at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn score_at(&self, position: usize) -> LetterScore {
        self.0[position]
    }

    /// Check if this feedback means the guess was correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&score| score == LetterScore::Correct)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct (green)
    /// - 'Y'/'y'/🟨 for present (yellow)
    /// - '-'/'_'/⬜ for absent (gray)
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut scores = [LetterScore::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            scores[i] = match ch {
                'G' | 'g' | '🟩' => LetterScore::Correct,
                'Y' | 'y' | '🟨' => LetterScore::Present,
                '-' | '_' | '⬜' => LetterScore::Absent,
                _ => return None,
            };
        }

        Some(Self(scores))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.0 {
            f.write_str(match score {
                LetterScore::Correct => "G",
                LetterScore::Present => "Y",
                LetterScore::Absent => "-",
            })?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
