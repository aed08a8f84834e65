//! Interactive helper for an unknown puzzle
//!
//! Suggests guesses each turn, reads back the word actually played and its
//! outcome, and narrows the candidates until the puzzle is solved.

use crate::config::SolverConfig;
use crate::core::{Outcome, Word};
use crate::game::{Dictionary, GameError, GameState};
use crate::output::display::{
    print_game_over, print_outcome_tiles, print_projected_chance, print_suggestions,
};
use crate::solver::StrategyType;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Suggestions shown per turn
const SUGGESTIONS: usize = 5;

/// Candidates are listed once this few remain
const LIST_CANDIDATES: usize = 10;

/// What a line of user input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'s> {
    Quit,
    NewGame,
    Entry(&'s str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        _ => Command::Entry(line),
    }
}

/// Print `label` and read one line; `None` at end of input
fn prompt<B: BufRead>(input: &mut B, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_intro(word_length: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Monte Carlo - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("After each guess, enter the outcome as letters with optional positions:");
    println!("  r0t2a means 'r' is at index 0, 't' at index 2, and 'a' is in the word.");
    println!("  Indexes run from 0 to {}. Leave it empty if nothing matched,", word_length - 1);
    println!("  or type 'win' if the word was correct.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");
}

/// Run the interactive helper, reading from `input` until the user quits
///
/// Wrong-length words and malformed or contradictory outcomes are reported
/// and asked for again; the game state is left untouched by a rejected turn.
///
/// # Errors
///
/// Returns an error on I/O failure or if no suggestion can be computed.
pub fn run_play<B: BufRead, R: Rng + ?Sized>(
    input: &mut B,
    dictionary: &Dictionary,
    config: SolverConfig,
    strategy: StrategyType,
    rng: &mut R,
) -> Result<()> {
    print_intro(dictionary.word_length());

    'games: loop {
        let mut state = GameState::with_config(dictionary, config);

        while !state.is_game_over() {
            let turn = state.previous_tries().len() + 1;
            println!("{}", "─".repeat(60).cyan());
            println!(
                "Turn {turn}: {} candidates remaining, {} guesses left",
                state.remaining_words().len(),
                state.guesses_left()
            );
            println!("{}", "─".repeat(60).cyan());

            if state.remaining_words().len() <= LIST_CANDIDATES {
                let listed: Vec<String> = state
                    .remaining_words()
                    .iter()
                    .map(|w| w.text().to_uppercase())
                    .collect();
                println!("Candidates: {}", listed.join(", "));
            }

            println!("{}", "Calculating...".bright_black());
            let suggestions = strategy.suggestions(&state, SUGGESTIONS, rng)?;
            print_suggestions(&suggestions, strategy.score_label());

            let word = loop {
                let Some(line) = prompt(input, "Word played")? else {
                    return Ok(());
                };
                match parse_command(&line) {
                    Command::Quit => return Ok(()),
                    Command::NewGame => continue 'games,
                    Command::Entry(text) => match state.parse_guess(text) {
                        Ok(word) => break word,
                        Err(e) => println!("{} {e}", "✗".red()),
                    },
                }
            };

            if !suggestions.iter().any(|&(_, suggested)| *suggested == word) {
                match state.win_probability_if_guessed(
                    word.text(),
                    config.win_probability_trials,
                    rng,
                ) {
                    Ok(probability) => print_projected_chance(&word, probability),
                    Err(e) => println!("{} {e}", "✗".red()),
                }
            }

            loop {
                let Some(line) = prompt(input, "Outcome")? else {
                    return Ok(());
                };
                let text = match parse_command(&line) {
                    Command::Quit => return Ok(()),
                    Command::NewGame => continue 'games,
                    Command::Entry(text) => text,
                };

                match apply_turn(&mut state, &word, text) {
                    Ok(outcome) => {
                        print_outcome_tiles(&word, &outcome);
                        break;
                    }
                    Err(e) => println!("{} {e}", "✗".red()),
                }
            }
        }

        print_game_over(&state);

        let again = prompt(input, "Play again? (yes/no)")?;
        match again.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("yes" | "y") => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Decode the outcome text (or `win`) and fold it into the state
fn apply_turn(state: &mut GameState<'_>, word: &Word, text: &str) -> Result<Outcome, GameError> {
    let outcome = if text.eq_ignore_ascii_case("win") {
        Outcome::from_hidden(word, word)
    } else {
        Outcome::decode(text, state.word_length()).map_err(|reason| {
            GameError::MalformedOutcome {
                outcome: text.to_string(),
                reason,
            }
        })?
    };

    state.apply_outcome(word, &outcome)?;
    Ok(outcome)
}
