//! One game of Wordle, played with the naive elimination strategy.

use crate::feedback::FeedbackPattern;
use crate::words::{is_well_formed, Vocabulary};
use crate::{WordleError, MAX_ATTEMPTS};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// How a game ended (or that it has not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unresolved,
    Won,
    Lost,
}

/// The final record of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// The secret answer.
    pub answer: String,
    /// Every guess made, in order, with the feedback it earned.
    pub attempts: Vec<(String, FeedbackPattern)>,
    /// The candidates still consistent with all feedback when play stopped.
    pub pool: Vec<String>,
    pub outcome: Outcome,
}

impl GameState {
    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// Keep only the candidates that would have produced the observed feedback.
///
/// A word stays exactly when scoring the guess against it reproduces
/// `feedback`. The answer itself always survives its own feedback, so a
/// correctly filtered pool never loses the answer.
pub fn filter_candidates(
    pool: &[String],
    guess: &str,
    feedback: FeedbackPattern,
) -> Vec<String> {
    pool.iter()
        .filter(|word| FeedbackPattern::calculate(guess, word) == feedback)
        .cloned()
        .collect()
}

/// Pick the next guess: a uniformly random remaining candidate.
///
/// Falls back to a random allowed guess if the pool is somehow empty; that
/// cannot happen when the answer is in the vocabulary, since filtering never
/// drops it.
pub fn select_guess<'a, R: Rng + ?Sized>(
    pool: &'a [String],
    guesses: &'a [String],
    rng: &mut R,
) -> &'a str {
    pool.choose(rng)
        .or_else(|| guesses.choose(rng))
        .map(String::as_str)
        .expect("guess list is never empty")
}

/// A single game bound to a vocabulary, an answer, and a random source.
#[derive(Debug)]
pub struct GameSession<'a, R: Rng = ThreadRng> {
    vocabulary: &'a Vocabulary,
    answer: String,
    rng: R,
}

impl<'a> GameSession<'a, ThreadRng> {
    /// Set up a game. With no answer supplied, one is sampled uniformly from
    /// the vocabulary's answer list.
    ///
    /// A supplied answer is lowercased and must be a well-formed word; it
    /// does not have to be in the answer list, but a game against an
    /// off-list answer may legitimately end lost.
    pub fn new(vocabulary: &'a Vocabulary, answer: Option<&str>) -> Result<Self, WordleError> {
        Self::with_rng(vocabulary, answer, rand::thread_rng())
    }
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Like [`GameSession::new`] but with an injected random source, so a
    /// seeded generator reproduces an exact game.
    pub fn with_rng(
        vocabulary: &'a Vocabulary,
        answer: Option<&str>,
        mut rng: R,
    ) -> Result<Self, WordleError> {
        let answer = match answer {
            Some(word) => {
                let word = word.to_lowercase();
                if !is_well_formed(&word) {
                    return Err(WordleError::InvalidAnswer { word });
                }
                word
            }
            None => vocabulary.sample_answer(&mut rng).to_string(),
        };
        Ok(Self {
            vocabulary,
            answer,
            rng,
        })
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Play the game to completion.
    ///
    /// Each turn: guess a random candidate, score it, record the attempt,
    /// and shrink the pool to the words consistent with the feedback. Stops
    /// on a hit or after [`MAX_ATTEMPTS`] turns, whichever comes first.
    pub fn play(&mut self) -> GameState {
        let mut pool = self.vocabulary.answers().to_vec();
        let mut attempts = Vec::with_capacity(MAX_ATTEMPTS);
        let mut outcome = Outcome::Unresolved;

        for _ in 0..MAX_ATTEMPTS {
            let guess =
                select_guess(&pool, self.vocabulary.guesses(), &mut self.rng).to_string();
            let feedback = FeedbackPattern::calculate(&guess, &self.answer);
            attempts.push((guess.clone(), feedback));

            if guess == self.answer {
                outcome = Outcome::Won;
                break;
            }
            pool = filter_candidates(&pool, &guess, feedback);
        }

        if outcome == Outcome::Unresolved {
            outcome = Outcome::Lost;
        }

        GameState {
            answer: self.answer.clone(),
            attempts,
            pool,
            outcome,
        }
    }
}
