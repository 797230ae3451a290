//! # Wordle Sim
//!
//! A simulator that plays Wordle with a naive elimination strategy.
//!
//! Each turn the bot guesses a uniformly random word from the remaining
//! candidates, scores it against the secret answer, and throws away every
//! candidate that would not have produced the observed feedback. No letter
//! frequencies, no entropy - and it still wins roughly 95% of its games,
//! which is the whole point of the experiment.

pub mod feedback;
pub mod game;
pub mod simulate;
pub mod words;

pub use feedback::{Feedback, FeedbackPattern};
pub use game::{filter_candidates, select_guess, GameSession, GameState, Outcome};
pub use simulate::simulate;
pub use words::{Vocabulary, WordListVersion};

use thiserror::Error;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Everything that can go wrong while setting up a game.
///
/// Play itself is total: once a session is built, a game always ends in a
/// win or a loss within [`MAX_ATTEMPTS`] turns.
#[derive(Error, Debug)]
pub enum WordleError {
    /// The requested word-list version is neither `"new"` nor `"old"`.
    #[error("{0:?} is not a valid version, use \"new\" or \"old\"")]
    Version(String),
    /// A supplied answer is not a well-formed word.
    #[error("{word:?} is not a {len}-letter lowercase word", len = WORD_LENGTH)]
    InvalidAnswer { word: String },
    /// A custom vocabulary violates the word-list invariants.
    #[error("invalid word list: {0}")]
    WordList(String),
}
