//! Running many independent games to estimate the strategy's win rate.

use crate::game::GameSession;
use crate::words::Vocabulary;
use crate::WordleError;
use rayon::prelude::*;

/// Play `trials` independent games and return the fraction won, in [0, 1].
///
/// With no fixed `answer`, every trial samples its own secret from the
/// answer list. Trials share nothing but the read-only vocabulary and run in
/// parallel.
pub fn simulate(
    vocabulary: &Vocabulary,
    answer: Option<&str>,
    trials: usize,
) -> Result<f64, WordleError> {
    if trials == 0 {
        return Ok(0.0);
    }

    // Surface a malformed fixed answer once, before any games run.
    if let Some(word) = answer {
        GameSession::new(vocabulary, Some(word))?;
    }

    let wins = (0..trials)
        .into_par_iter()
        .filter(|_| {
            let mut session = GameSession::new(vocabulary, answer)
                .expect("answer was validated before the trials started");
            session.play().is_won()
        })
        .count();

    Ok(wins as f64 / trials as f64)
}
