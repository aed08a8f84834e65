//! Display functions for command results

use super::formatters::{
    colored_percentage, colored_tiles, create_progress_bar, probability_bar, tiles_to_emoji,
};
use crate::commands::{ChanceResult, SimulationStatistics, SolveResult};
use crate::core::{Outcome, Word};
use crate::game::{GameState, GameStatus};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            tiles_to_emoji(&step.tiles)
        );

        if verbose {
            println!("  Outcome:    {}", step.outcome);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    if let Some(word) = &result.deduced {
        println!(
            "\nDeduced {} from the outcomes, but never played it",
            word.to_uppercase().bright_white().bold()
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns())
                .red()
                .bold()
        );
    }
}

/// Print ranked suggestions with their scores
pub fn print_suggestions(suggestions: &[(f64, &Word)], score_label: &str) {
    println!("\n📊 Suggested guesses ({score_label}):");
    for (rank, (score, word)) in suggestions.iter().enumerate() {
        println!(
            "   {}. {} {}",
            (rank + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            format!("({score:.3})").bright_yellow()
        );
    }
    println!();
}

/// Print the projected win chance of a word outside the suggestions
pub fn print_projected_chance(word: &Word, probability: f64) {
    println!(
        "   {} changes the projected win chance to [{}] {}",
        word.text().to_uppercase(),
        probability_bar(probability, 20).green(),
        colored_percentage(probability)
    );
}

/// Print the colored tiles of one turn
pub fn print_outcome_tiles(word: &Word, outcome: &Outcome) {
    println!("\n   {}\n", colored_tiles(word, outcome));
}

/// Print how a finished interactive game ended
pub fn print_game_over(state: &GameState<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match (state.status(), state.solution()) {
        (GameStatus::Won, Some(word)) => {
            let turns = state.previous_tries().len();
            println!(
                "  🎉 {} after {} {}",
                word.to_uppercase().bright_green().bold(),
                turns,
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        _ => {
            println!("  {}", "Out of guesses.".red().bold());
            let left: Vec<String> = state
                .remaining_words()
                .iter()
                .take(10)
                .map(|w| w.text().to_uppercase())
                .collect();
            if !left.is_empty() {
                println!("  Still possible: {}", left.join(", "));
            }
        }
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print a win-probability estimate
pub fn print_chance_result(result: &ChanceResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WIN PROBABILITY:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎲 Over {} simulated games:", result.trials);
    println!(
        "   Win chance:  [{}] {}",
        probability_bar(result.probability, 30).green(),
        colored_percentage(result.probability)
    );
    println!("   Candidates:  {}", result.remaining);
    if !result.in_dictionary {
        println!("   {}", "Not in the dictionary, so it cannot be the answer".bright_black());
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.games);
    println!(
        "  Won:                 {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate() * 100.0).green()
    );
    println!(
        "  Average turns (won): {}",
        format!("{:.3}", stats.average_turns()).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.total_time.as_secs_f64());
    if stats.games > 0 {
        println!(
            "  Time per game:       {:.1}ms",
            stats.total_time.as_millis() as f64 / stats.games as f64
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_turns = stats.guess_distribution.keys().copied().max().unwrap_or(0);
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for turns in 1..=max_turns {
        let count = stats.guess_distribution.get(&turns).copied().unwrap_or(0);
        let percentage = count as f64 / stats.wins.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {turns} guesses: {} {count:5} ({percentage:5.1}%)", bar.green());
    }

    let frequent = stats.frequent_words();
    if !frequent.is_empty() {
        println!("\n🎯 {}", "Frequent Guesses".bright_cyan().bold());
        for (word, played, rate) in frequent.iter().take(15) {
            println!(
                "  {:<7} played {:5} times, won {}",
                word.to_uppercase(),
                played,
                colored_percentage(*rate)
            );
        }
    }

    if !stats.misses.is_empty() {
        let mut misses: Vec<&str> = stats.misses.iter().map(String::as_str).collect();
        misses.sort_unstable();
        println!("\n😰 {}", "Missed Words".yellow().bold());
        for chunk in misses.chunks(10) {
            println!("  {}", chunk.join(" ").to_uppercase().yellow());
        }
    }
}
