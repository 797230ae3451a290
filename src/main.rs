//! Wordle Sim CLI
//!
//! Plays single games with a printed board, or batches of simulated games
//! with an aggregated win rate.

use std::process;
use wordle_sim::{
    simulate, GameSession, GameState, Outcome, Vocabulary, WordListVersion, WordleError,
    MAX_ATTEMPTS,
};

const USAGE: &str = "\
Usage: wordle-sim [--version <new|old>] <command>

Commands:
  play [word]         Play one game; the answer is random unless <word> is given
  simulate [trials]   Play many games and report the win rate (default: 100)

Options:
  --version <v>       Word lists to use: \"new\" (NYT, default) or \"old\"
  -h, --help          Show this message";

fn print_board(state: &GameState) {
    for (guess, feedback) in &state.attempts {
        println!("{} | {}", feedback, guess);
    }
    match state.outcome {
        Outcome::Won => {
            println!("Solved in {}/{} guesses.", state.attempts.len(), MAX_ATTEMPTS);
        }
        _ => {
            println!("Out of guesses. The answer was {}.", state.answer.to_uppercase());
        }
    }
}

fn run() -> Result<(), WordleError> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut version = WordListVersion::New;
    if let Some(pos) = args.iter().position(|arg| arg == "--version") {
        let value = args.get(pos + 1).cloned().unwrap_or_default();
        version = value.parse()?;
        args.drain(pos..(pos + 2).min(args.len()));
    }

    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            println!("{}", USAGE);
        }
        Some("play") => {
            let vocabulary = Vocabulary::load(version);
            let mut session = GameSession::new(&vocabulary, args.get(1).map(String::as_str))?;
            let state = session.play();
            print_board(&state);
        }
        Some("simulate") => {
            let trials: usize = args
                .get(1)
                .and_then(|arg| arg.parse().ok())
                .unwrap_or(100);
            let vocabulary = Vocabulary::load(version);
            let win_rate = simulate(&vocabulary, None, trials)?;
            println!(
                "{} trials on the {} lists: {:.1}% won",
                trials,
                version,
                win_rate * 100.0
            );
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information.");
            process::exit(1);
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
