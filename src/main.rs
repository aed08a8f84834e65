//! Wordle Monte Carlo - CLI
//!
//! Interactive helper, batch simulator and single-word solver built on a
//! letter-frequency heuristic ranked by Monte Carlo rollouts.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordle_monte_carlo::{
    commands::{
        HistoryEntry, estimate_chance, parse_history_entry, run_play, run_simulation, solve_word,
    },
    config::SolverConfig,
    game::{Dictionary, GameState},
    output::{print_chance_result, print_simulation_statistics, print_solve_result},
    solver::StrategyType,
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_monte_carlo",
    about = "Wordle solver using letter-frequency heuristics ranked by Monte Carlo simulation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: monte-carlo (default, alias mc) or heuristic (alias fast)
    #[arg(short, long, global = true, default_value = "monte-carlo")]
    strategy: String,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Word length to keep from a dictionary file
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value = "6")]
    guesses: usize,

    /// Seed for reproducible runs (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print every guess and candidate count
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper for an unknown puzzle (default)
    Play,

    /// Play many games against random hidden words and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },

    /// Solve a specific hidden word
    Solve {
        /// The hidden word
        word: String,
    },

    /// Estimate the chance of winning by playing a word now
    Chance {
        /// Word to evaluate
        word: String,

        /// Earlier turns as GUESS:OUTCOME, e.g. slate:s0a
        #[arg(long = "history", value_parser = parse_history_entry)]
        history: Vec<HistoryEntry>,

        /// Number of simulated games (default: 2000)
        #[arg(short, long)]
        trials: Option<usize>,
    },
}

/// Load the embedded dictionary, or the words of `length` letters from a file
fn load_dictionary(path: Option<&Path>, length: usize) -> Result<Dictionary> {
    let words = match path {
        Some(path) => load_from_file(path, length)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?,
        None => words_from_slice(DICTIONARY),
    };

    if words.is_empty() {
        bail!("dictionary has no words of length {length}");
    }
    Ok(Dictionary::new(words)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref(), cli.length)?;
    let config = SolverConfig {
        total_guesses: cli.guesses,
        ..SolverConfig::default()
    };
    let Some(strategy) = StrategyType::from_name(&cli.strategy) else {
        bail!(
            "unknown strategy '{}' (expected monte-carlo, mc, heuristic or fast)",
            cli.strategy
        );
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.verbose {
        println!(
            "Dictionary: {} words of {} letters, strategy: {}",
            dictionary.len(),
            dictionary.word_length(),
            strategy.name()
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(
            &mut io::stdin().lock(),
            &dictionary,
            config,
            strategy,
            &mut rng,
        ),
        Commands::Simulate { games } => {
            println!("\n{}", "═".repeat(70));
            println!(" Simulating {games} games ");
            println!("{}", "═".repeat(70));
            println!("\nStrategy: {}\n", strategy.name());

            let stats =
                run_simulation(&dictionary, config, &strategy, games, cli.verbose, &mut rng)?;
            print_simulation_statistics(&stats);
            Ok(())
        }
        Commands::Solve { word } => {
            let state = GameState::with_config(&dictionary, config);
            let result = solve_word(state, &word, &strategy, &mut rng)
                .with_context(|| format!("could not solve '{word}'"))?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Chance {
            word,
            history,
            trials,
        } => {
            let state = GameState::with_config(&dictionary, config);
            let trials = trials.unwrap_or(config.win_probability_trials);
            let result = estimate_chance(state, &history, &word, trials, &mut rng)?;
            print_chance_result(&result);
            Ok(())
        }
    }
}
