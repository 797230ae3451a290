//! Word lists for the simulator.
//!
//! Two fixed lists per version: the answers the game can secretly pick, and
//! the larger set of words the bot is allowed to guess. Both are embedded in
//! the binary and immutable once loaded.

use crate::{WordleError, WORD_LENGTH};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Which pair of word lists to play with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordListVersion {
    /// The NYT-era lists
    #[default]
    New,
    /// The lists from the original Wordle site
    Old,
}

impl FromStr for WordListVersion {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(WordListVersion::New),
            "old" => Ok(WordListVersion::Old),
            _ => Err(WordleError::Version(s.to_string())),
        }
    }
}

impl fmt::Display for WordListVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListVersion::New => write!(f, "new"),
            WordListVersion::Old => write!(f, "old"),
        }
    }
}

/// The immutable word lists a game draws from.
///
/// Invariants, checked at construction: both lists are non-empty, every word
/// is [`WORD_LENGTH`] ASCII lowercase letters, and every answer is also an
/// allowed guess.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    answers: Vec<String>,
    guesses: Vec<String>,
}

impl Vocabulary {
    /// Load the embedded word lists for a version.
    pub fn load(version: WordListVersion) -> Self {
        let (answers, guesses) = match version {
            WordListVersion::New => (
                include_str!("../dictionary/answers_new.txt"),
                include_str!("../dictionary/guesses_new.txt"),
            ),
            WordListVersion::Old => (
                include_str!("../dictionary/answers_old.txt"),
                include_str!("../dictionary/guesses_old.txt"),
            ),
        };
        Self::new(parse_list(answers), parse_list(guesses))
            .expect("embedded word lists satisfy the vocabulary invariants")
    }

    /// Build a vocabulary from custom lists, validating the invariants.
    pub fn new(answers: Vec<String>, guesses: Vec<String>) -> Result<Self, WordleError> {
        if answers.is_empty() {
            return Err(WordleError::WordList("empty answer list".to_string()));
        }
        if guesses.is_empty() {
            return Err(WordleError::WordList("empty guess list".to_string()));
        }
        for word in answers.iter().chain(guesses.iter()) {
            if !is_well_formed(word) {
                return Err(WordleError::WordList(format!(
                    "{word:?} is not a {WORD_LENGTH}-letter lowercase word"
                )));
            }
        }
        let allowed: HashSet<&str> = guesses.iter().map(String::as_str).collect();
        for word in &answers {
            if !allowed.contains(word.as_str()) {
                return Err(WordleError::WordList(format!(
                    "answer {word:?} is not in the guess list"
                )));
            }
        }
        Ok(Self { answers, guesses })
    }

    /// The candidate secrets. This is also the initial candidate pool.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Every word the bot is allowed to guess (a superset of the answers).
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Draw a uniformly random answer.
    pub fn sample_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.answers
            .choose(rng)
            .map(String::as_str)
            .expect("answer list is never empty")
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Whether a word has the right length and alphabet.
pub(crate) fn is_well_formed(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}
