//! Wordle Filter - CLI
//!
//! Narrows a Wordle dictionary to the words consistent with game feedback,
//! either in one declarative pass or round by round in interactive mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_filter::{
    commands::{run_filter, run_interactive},
    constraints::{ConstraintSet, PositionedLetter},
    core::Word,
    output::print_filter_result,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Narrow a Wordle dictionary to the words consistent with game feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 1227 words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default) - narrow the list round by round
    Interactive,

    /// One declarative filter pass from constraint flags
    Filter {
        /// Exact ("green") constraint, e.g. -g 2=i (repeatable)
        #[arg(short, long = "green", value_name = "POS=LETTER")]
        green: Vec<PositionedLetter>,

        /// Partial ("yellow") constraint, e.g. -y 1=l (repeatable)
        #[arg(short, long = "yellow", value_name = "POS=LETTER")]
        yellow: Vec<PositionedLetter>,

        /// Excluded ("gray") letters, e.g. -x aeio
        #[arg(short = 'x', long = "gray", value_name = "LETTERS", default_value = "")]
        gray: String,

        /// Show per-stage candidate counts
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the wordlist based on the -w flag
///
/// - "embedded": the default dictionary compiled into the binary
/// - "<path>": load a custom wordlist from file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_filter::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)?;
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&words).map_err(|e| anyhow::anyhow!(e)),
        Commands::Filter {
            green,
            yellow,
            gray,
            verbose,
        } => run_filter_command(&words, &green, &yellow, &gray, verbose),
    }
}

fn run_filter_command(
    words: &[Word],
    greens: &[PositionedLetter],
    yellows: &[PositionedLetter],
    gray: &str,
    verbose: bool,
) -> Result<()> {
    let mut constraints = ConstraintSet::new();

    for green in greens {
        constraints.exact.require(green.position(), green.letter())?;
    }
    for yellow in yellows {
        constraints
            .partial
            .require_elsewhere(yellow.position(), yellow.letter())?;
    }
    for letter in gray.chars() {
        constraints.excluded.exclude(letter)?;
    }

    let result = run_filter(words, &constraints);
    print_filter_result(&result, verbose);
    Ok(())
}
