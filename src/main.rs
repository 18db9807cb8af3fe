//! Wordle Entropy CLI
//!
//! Interactive command-line interface for the entropy-ranking solver.

use std::error::Error as _;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use log::{debug, error};
use wordle_entropy::{
    compute_async, load_word_list, solve_for_target, FeedbackPattern, ListPolicy, Scored,
    SessionConfig, SolverState, Word,
};

const HELP_TEXT: &str = "\
Commands:
  suggest, s               rank guesses for the current turn
  top, t [n]               show the n best guesses (default: --top)
  feedback, f <word> <pattern>
                           record a played guess, e.g. `f crane CPNNN`
                           (C/2/G correct, P/1/Y present, N/0/B not present)
  remaining, r             list remaining candidate solutions
  history                  show played turns
  undo                     take back the last turn
  reset                    start over
  help, h, ?               show this help
  quit, q                  exit";

/// Recommend guesses for fixed-length word puzzles by expected information gain.
#[derive(Debug, Parser)]
#[command(name = "wordle-entropy", version)]
struct Args {
    /// Newline-separated word list
    wordlist: PathBuf,

    /// Word length for this session
    #[arg(long = "len", default_value_t = SessionConfig::default().word_len)]
    word_len: usize,

    /// Number of recommendations to show
    #[arg(long, default_value_t = SessionConfig::default().top_n)]
    top: usize,

    /// Worker threads used for scoring (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Drop word-list entries of the wrong length or alphabet instead of failing
    #[arg(long)]
    skip_invalid: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the best opening guesses and exit
    Suggest,
    /// Play against a known target word
    Solve {
        target: String,
        /// Give up after this many guesses
        #[arg(long, default_value_t = 6)]
        max_turns: usize,
    },
}

/// Wait for an in-flight ranking, animating a spinner meanwhile.
fn await_ranking(state: &SolverState, top_n: usize) -> wordle_entropy::Result<Vec<Scored>> {
    const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    const MESSAGE: &str = "Computing...";

    let pending = compute_async(state.scoring_request(top_n))?;
    let start = Instant::now();
    let mut stdout = io::stdout();
    let mut i = 0;
    let result = loop {
        if let Some(result) = pending.wait_timeout(Duration::from_millis(80)) {
            break result;
        }
        print!("\r{} {}", FRAMES[i % FRAMES.len()], MESSAGE);
        let _ = stdout.flush();
        i += 1;
    };
    if i > 0 {
        print!("\r{}\r", " ".repeat(MESSAGE.len() + 3));
        let _ = stdout.flush();
    }
    debug!("ranking took {:.2?}", start.elapsed());
    result
}

fn print_top(state: &SolverState, top: &[Scored]) {
    if top.is_empty() {
        println!("No recommendations.");
        return;
    }
    if state.is_degenerate() {
        println!("No candidate matches the feedback so far; these scores carry no information.");
    }
    println!();
    println!("Top {} guesses:", top.len());
    println!(
        "{:>4} {:>width$} {:>8} {:>12} Possible?",
        "#",
        "Word",
        "Entropy",
        "Exp. Remain",
        width = state.word_len().max(4) + 2
    );
    println!("{}", "-".repeat(state.word_len() + 46));
    for (i, scored) in top.iter().enumerate() {
        println!(
            "{:>4} {:>width$} {:>8.3} {:>12.1} {}",
            i + 1,
            scored.guess.as_str().to_uppercase(),
            scored.entropy,
            scored.expected_remaining(state.remaining_count()),
            if state.is_candidate(&scored.guess) { "✓" } else { "" },
            width = state.word_len().max(4) + 2
        );
    }
    println!();
}

fn print_history(state: &SolverState) {
    if state.history().is_empty() {
        println!("No guesses yet.");
        return;
    }
    for (i, turn) in state.history().iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            turn.guess.as_str().to_uppercase(),
            turn.observed
        );
    }
}

fn print_remaining(state: &SolverState) {
    let remaining = state.possible_solutions();
    println!();
    println!("Remaining possibilities: {}", remaining.len());
    for (i, word) in remaining.iter().take(20).enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>width$}", word.as_str().to_uppercase(), width = state.word_len() + 3);
    }
    if remaining.len() > 20 {
        print!("  ...and {} more", remaining.len() - 20);
    }
    println!();
    println!();
}

/// Rank the current state and store the result, reporting failures without
/// touching the state.
fn refresh(state: SolverState, top_n: usize) -> SolverState {
    match await_ranking(&state, top_n) {
        Ok(top) => state.with_top(top),
        Err(e) => {
            error!("ranking failed: {}", e);
            println!("Ranking failed: {}. Run `suggest` to retry.", e);
            state
        }
    }
}

fn run_interactive(initial: SolverState, top_n: usize) {
    println!("Loaded {} words of length {}.", initial.all_words().len(), initial.word_len());
    println!("Type 'help' for commands.");

    // Every turn is a new state; earlier ones are kept for undo.
    let mut past: Vec<SolverState> = Vec::new();
    let mut state = refresh(initial.clone(), top_n);
    print_top(&state, state.top());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("[turn {} | {} left] > ", state.turn(), state.remaining_count());
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("could not read input: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => println!("{}", HELP_TEXT),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" => {
                state = refresh(state, top_n);
                print_top(&state, state.top());
            }
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(top_n);
                match await_ranking(&state, n) {
                    Ok(top) => print_top(&state, &top),
                    Err(e) => println!("Ranking failed: {}", e),
                }
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback crane CPNNN");
                    continue;
                }
                let guess = match Word::parse(&parts[1].to_lowercase(), state.word_len()) {
                    Ok(word) => word,
                    Err(e) => {
                        println!("Invalid guess: {}", e);
                        continue;
                    }
                };
                let observed = match FeedbackPattern::parse(parts[2], state.word_len()) {
                    Ok(pattern) => pattern,
                    Err(e) => {
                        println!("Invalid pattern: {}", e);
                        continue;
                    }
                };
                let next = match state.apply_turn(&guess, observed) {
                    Ok(next) => next,
                    Err(e) => {
                        println!("Could not apply feedback: {}", e);
                        continue;
                    }
                };

                let prev_count = state.remaining_count();
                past.push(std::mem::replace(&mut state, next));

                println!();
                println!("Guess: {}", guess.as_str().to_uppercase());
                println!("Feedback: {}", observed);
                println!(
                    "Eliminated {} words ({} → {})",
                    prev_count - state.remaining_count(),
                    prev_count,
                    state.remaining_count()
                );

                if state.is_solved() {
                    println!();
                    println!("🎉 Solved in {} guesses!", state.history().len());
                    println!("Use 'reset' to play again.");
                    println!();
                } else if state.is_degenerate() {
                    println!();
                    println!("⚠️  No words match this feedback pattern!");
                    println!("This might indicate an input error. Use 'undo' or 'reset'.");
                    println!();
                } else {
                    state = refresh(state, top_n);
                    print_top(&state, state.top());
                }
            }
            "remaining" | "r" | "left" => print_remaining(&state),
            "history" => print_history(&state),
            "undo" => match past.pop() {
                Some(previous) => {
                    state = previous;
                    println!("Back to turn {}.", state.turn());
                }
                None => println!("Nothing to undo."),
            },
            "reset" => {
                past.clear();
                state = refresh(initial.clone(), top_n);
                println!("Reset to initial state. {} words available.", state.remaining_count());
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn run(args: Args) -> wordle_entropy::Result<()> {
    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            error!("could not configure {} scoring threads: {}", threads, e);
        }
    }

    let policy = if args.skip_invalid {
        ListPolicy::SkipInvalid
    } else {
        ListPolicy::Strict
    };
    let words = load_word_list(&args.wordlist, args.word_len, policy)?;
    let state = SolverState::new(words, args.word_len)?;

    match args.command {
        None => run_interactive(state, args.top),
        Some(Command::Suggest) => {
            let top = await_ranking(&state, args.top)?;
            print_top(&state, &top);
        }
        Some(Command::Solve { target, max_turns }) => {
            let target = Word::parse(&target.to_lowercase(), args.word_len)?;
            println!("Solving for: {}", target.as_str().to_uppercase());
            println!();

            let finished = solve_for_target(state, &target, args.top, max_turns)?;
            print_history(&finished);
            println!();
            if finished.is_solved() {
                println!("Solved in {} guesses.", finished.history().len());
            } else if finished.is_degenerate() {
                println!("Target is not consistent with the word list.");
            } else {
                println!("Failed to solve within {} guesses.", max_turns);
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
