//! Display functions for command results

use super::formatters::format_word_grid;
use crate::commands::FilterResult;
use colored::Colorize;

/// Words per line when printing the surviving candidates
const GRID_WIDTH: usize = 8;

/// Print the result of a filter pass
pub fn print_filter_result(result: &FilterResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Filtering {} candidate words",
        result.initial_count.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("\nStage narrowing:");
        println!(
            "  Exact:    {} → {}",
            result.initial_count, result.after_exact
        );
        println!(
            "  Partial:  {} → {}",
            result.after_exact, result.after_partial
        );
        println!(
            "  Excluded: {} → {}",
            result.after_partial, result.after_excluded
        );
    }

    println!();
    if result.survivors.is_empty() {
        println!(
            "{}",
            "No candidates match the given constraints.".red().bold()
        );
    } else {
        println!("{}", format_word_grid(&result.survivors, GRID_WIDTH));
        println!();
        println!(
            "{}",
            format!(
                "{} candidate{} remain",
                result.count(),
                if result.count() == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        );
    }
}
