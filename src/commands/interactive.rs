//! Interactive round loop
//!
//! Text-based mode without a solver: the operator enters each guess and the
//! game's feedback, and the candidate list is narrowed round by round.

use crate::constraints::ConstraintSet;
use crate::core::{Feedback, Word};
use crate::filter::filter_words;
use std::io::{self, Write};

/// Run the interactive round loop over the given dictionary
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive(words: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Filter - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess you played and the feedback the game gave you,");
    println!("and I'll narrow the candidate list round by round:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n");

    let mut rounds: Vec<(Word, Feedback)> = Vec::new();
    let mut candidates: Vec<Word> = words.to_vec();
    let mut round = 1;

    loop {
        if candidates.is_empty() {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.to_lowercase().as_str() {
                "undo" | "u" => {
                    if rounds.pop().is_some() {
                        round -= 1;
                        candidates = replay(words, &rounds)?;
                        println!("✓ Undone! Back to round {round}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" | "n" => {
                    rounds.clear();
                    candidates = words.to_vec();
                    round = 1;
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        }

        println!("────────────────────────────────────────────────────────────");
        println!("Round {round}: {} candidates remaining", candidates.len());
        println!("────────────────────────────────────────────────────────────");

        // Show the survivors once the list is small
        if candidates.len() <= 10 {
            println!("\nRemaining candidates:");
            for candidate in candidates.iter().take(10) {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        // Get the guess that was played
        let guess = loop {
            let input = get_user_input("Enter your guess (or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    rounds.clear();
                    candidates = words.to_vec();
                    round = 1;
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if rounds.pop().is_some() {
                        round -= 1;
                        candidates = replay(words, &rounds)?;
                        println!("✓ Undone! Back to round {round}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                    break None;
                }
                _ => match Word::new(&input) {
                    Ok(word) => break Some(word),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(guess) = guess else { continue };

        // Get the feedback for that guess
        let feedback = loop {
            let input = get_user_input("Enter feedback (G/Y/-, or 'win')")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "win" | "correct" | "yes" | "solved" => {
                    // Shortcut for all greens
                    break Feedback::WIN;
                }
                _ => {
                    if let Some(feedback) = Feedback::from_str(&input) {
                        break feedback;
                    }
                    println!("❌ Invalid feedback! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n");
                }
            }
        };

        if feedback.is_win() {
            use crate::output::formatters::feedback_to_emoji;
            use colored::Colorize;

            rounds.push((guess, feedback));

            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());

            println!(
                "\n  Solution found in {} {}",
                round.to_string().bright_cyan().bold(),
                if round == 1 { "round" } else { "rounds" }
            );

            println!("\n  Round history:");
            for (i, (word, fb)) in rounds.iter().enumerate() {
                println!(
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    word.text().to_uppercase().bright_white().bold(),
                    feedback_to_emoji(*fb)
                );
            }

            println!("\n{}", "═".repeat(70).bright_cyan());
            println!();

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    rounds.clear();
                    candidates = words.to_vec();
                    round = 1;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        // Derive this round's constraints and narrow the list
        let constraints = match ConstraintSet::from_feedback(&guess, &feedback) {
            Ok(set) => set,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        candidates = filter_words(&candidates, &constraints)
            .into_iter()
            .cloned()
            .collect();
        rounds.push((guess, feedback));
        round += 1;
    }
}

/// Rebuild the candidate list by replaying all recorded rounds
fn replay(words: &[Word], rounds: &[(Word, Feedback)]) -> Result<Vec<Word>, String> {
    let mut candidates: Vec<Word> = words.to_vec();

    for (guess, feedback) in rounds {
        let constraints =
            ConstraintSet::from_feedback(guess, feedback).map_err(|e| e.to_string())?;
        candidates = filter_words(&candidates, &constraints)
            .into_iter()
            .cloned()
            .collect();
    }

    Ok(candidates)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
