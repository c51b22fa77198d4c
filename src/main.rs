//! Wordle Bot CLI
//!
//! Command-line front end for the Wordle decision engine.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wordlebot::config::DEFAULT_WORD_LENGTH;
use wordlebot::{
    load_dictionaries, Board, Bot, Explorer, Pattern, SolveOutcome, SolverConfig, Strategy,
    StrategyKind,
};

#[derive(Parser, Debug)]
#[command(name = "wordlebot", version)]
#[command(about = "Wordle solver with entropy, partition, search and lookahead strategies")]
struct Cli {
    /// Strategy to rank guesses with: entropy, partition, search, blended or lookahead
    #[arg(long, global = true, default_value = "entropy")]
    strategy: StrategyKind,

    /// Word length
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Possible solutions, one word per line
    #[arg(long, global = true, default_value = "dictionary/solutions.txt")]
    solutions_file: PathBuf,

    /// Extra words allowed as guesses; the solutions are always allowed
    #[arg(long, global = true)]
    guesses_file: Option<PathBuf>,

    /// How many ranked guesses to print
    #[arg(long, global = true, default_value_t = 10)]
    top: usize,

    /// Log every turn
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the next guesses for a board given as guess:feedback pairs
    ///
    /// Feedback is either dotted ("sL..E": lowercase correct, uppercase
    /// present, '.' absent) or compact ("gybbb").
    Suggest { board: Vec<String> },

    /// Solve for a known solution and print every guess
    Solve {
        solution: String,
        #[arg(long)]
        opening: Option<String>,
    },

    /// Solve every word in the solution list
    Bench {
        #[arg(long)]
        opening: Option<String>,
    },

    /// Walk the whole decision tree from an opening guess
    Explore {
        #[arg(long)]
        opening: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Accept either feedback form for a `guess:feedback` pair.
fn push_pair(board: &mut Board, pair: &str) -> Result<()> {
    let (guess, feedback) = pair
        .split_once(':')
        .with_context(|| format!("expected guess:feedback, got '{}'", pair))?;
    if board.push_scored(guess, feedback).is_ok() {
        return Ok(());
    }
    let pattern = Pattern::parse_compact(feedback)
        .with_context(|| format!("invalid feedback '{}' for '{}'", feedback, guess))?;
    if pattern.len() != board.word_length() {
        bail!("feedback '{}' does not have {} letters", feedback, board.word_length());
    }
    board.push_scored(guess, &pattern.render(&guess.to_ascii_lowercase()))?;
    Ok(())
}

fn print_outcome(outcome: &SolveOutcome, solution: &str) {
    for (i, guess) in outcome.guesses().iter().enumerate() {
        let pattern = Pattern::score(solution, guess);
        println!("Guess {}: {} → {}", i + 1, guess.to_uppercase(), pattern);
    }
    println!();
    match outcome {
        SolveOutcome::Solved { guesses } => println!("Solved in {} guesses.", guesses.len()),
        SolveOutcome::Failed { reason, .. } => println!("Failed: {:?}", reason),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let n = cli.length;
    let (solutions, guesses) = load_dictionaries(&cli.solutions_file, cli.guesses_file.as_deref(), n)
        .with_context(|| format!("loading {}", cli.solutions_file.display()))?;
    info!(solutions = solutions.len(), guesses = guesses.len(), "loaded dictionaries");

    let config = SolverConfig {
        word_length: n,
        max_guesses_returned: cli.top,
        ..SolverConfig::default()
    };
    let solutions = Arc::new(solutions);
    let strategy: Arc<dyn Strategy> = Arc::from(cli.strategy.build(Arc::new(guesses), &config));
    let bot = Bot::new(solutions.clone(), strategy.clone(), n);

    match cli.command {
        Command::Suggest { board: pairs } => {
            let mut board = Board::new(n);
            for pair in &pairs {
                push_pair(&mut board, pair)?;
            }
            let candidates = board.filter(&solutions);

            println!("Remaining possibilities: {}", candidates.len());
            if candidates.len() <= 20 {
                let words: Vec<String> = candidates.iter().map(|w| w.to_uppercase()).collect();
                println!("{}", words.join(" "));
            }
            if candidates.is_empty() {
                bail!("no word matches this board");
            }

            let start = Instant::now();
            let ranked = bot.suggest(&board, &candidates);
            println!();
            println!("{:>4} {:>8} {:>10} Possible?", "#", "Word", "Score");
            println!("{}", "-".repeat(36));
            for (i, guess) in ranked.iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>10.3} {}",
                    i + 1,
                    guess.word.to_uppercase(),
                    guess.score,
                    if candidates.contains(&guess.word) { "✓" } else { "" }
                );
            }
            println!();
            println!("Time: {:.2?}", start.elapsed());
        }
        Command::Solve { solution, opening } => {
            let solution = solution.to_ascii_lowercase();
            let opening = bot
                .opening_guess(opening.as_deref())
                .context("choosing the opening guess")?;
            println!("Solving for: {}", solution.to_uppercase());
            println!();
            let outcome = bot.solve(&solution, &opening)?;
            print_outcome(&outcome, &solution);
        }
        Command::Bench { opening } => {
            let opening = bot
                .opening_guess(opening.as_deref())
                .context("choosing the opening guess")?;
            println!("Running benchmark on all {} words...", solutions.len());

            let start = Instant::now();
            let summary = bot.solve_batch(&solutions, &opening)?;
            let elapsed = start.elapsed();

            println!();
            println!("Guess distribution:");
            for (guesses, count) in &summary.distribution {
                let pct = *count as f64 / solutions.len() as f64 * 100.0;
                let bar = "█".repeat((*count * 40 / solutions.len()).max(1));
                println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
            }
            println!();
            println!("Average guesses: {:.3}", summary.average());
            println!("Failed: {}", summary.failed);
            println!("Time elapsed: {:.2?}", elapsed);
        }
        Command::Explore { opening } => {
            let opening = bot
                .opening_guess(opening.as_deref())
                .context("choosing the opening guess")?;
            let start = Instant::now();
            let result = Explorer::new(strategy.as_ref()).search_from(&mut Board::new(n), &opening, &solutions);

            println!("Opening: {}", opening.to_uppercase());
            println!("Visited nodes: {}", result.visited_nodes);
            println!("Solved leaves: {}", result.solved);
            println!("Failures: {}", result.failures);
            if let (Some(min), Some(max)) = (result.min_depth, result.max_depth) {
                println!("Depth: {}..={}", min, max);
            }
            println!("Time elapsed: {:.2?}", start.elapsed());
        }
    }
    Ok(())
}
