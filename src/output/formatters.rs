//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore};

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .scores()
        .iter()
        .map(|score| match score {
            LetterScore::Correct => '🟩',
            LetterScore::Present => '🟨',
            LetterScore::Absent => '⬜',
        })
        .collect()
}

/// Lay out words in uppercase columns, `per_row` to a line
#[must_use]
pub fn format_word_grid(words: &[String], per_row: usize) -> String {
    let mut grid = String::new();

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            if i % per_row == 0 {
                grid.push('\n');
            } else {
                grid.push_str("  ");
            }
        }
        grid.push_str(&word.to_uppercase());
    }

    grid
}
