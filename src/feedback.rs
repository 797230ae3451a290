//! Feedback calculation for Wordle guesses.
//!
//! This module computes the per-position feedback (green/yellow/gray) that a
//! guess earns against the secret answer, with the standard duplicate-letter
//! accounting.

use crate::WORD_LENGTH;

/// The feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in the correct position (green)
    Correct,
    /// Letter occurs elsewhere in the answer (yellow)
    Present,
    /// Letter not in the answer, or all its occurrences already claimed (gray)
    Absent,
}

impl Feedback {
    /// The colored square used when printing a board row.
    pub fn square(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬜',
        }
    }
}

/// The complete feedback for one guess.
///
/// Packed base-3 into a single byte, one trit per position:
/// absent = 0, present = 1, correct = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The all-green pattern, earned only by guessing the answer itself.
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81);

    /// Pack an array of per-position feedback into a pattern.
    pub fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        let mut packed: u8 = 0;
        let mut place: u8 = 1;
        for fb in feedback {
            let trit = match fb {
                Feedback::Absent => 0,
                Feedback::Present => 1,
                Feedback::Correct => 2,
            };
            packed += trit * place;
            place *= 3;
        }
        Self(packed)
    }

    /// Score a guess against the answer.
    ///
    /// Two passes, the canonical Wordle rule:
    /// 1. Mark exact position matches `Correct` and tally the answer's
    ///    remaining (unmatched) letters.
    /// 2. Left to right, mark `Present` while the guessed letter still has a
    ///    positive tally, otherwise `Absent`.
    ///
    /// This caps `Correct` + `Present` markings for any letter at that
    /// letter's count in the answer.
    pub fn calculate(guess: &str, answer: &str) -> Self {
        let guess = guess.as_bytes();
        let answer = answer.as_bytes();

        debug_assert_eq!(guess.len(), WORD_LENGTH);
        debug_assert_eq!(answer.len(), WORD_LENGTH);

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                feedback[i] = Feedback::Correct;
            } else {
                remaining[(answer[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let letter = (guess[i] - b'a') as usize;
                if remaining[letter] > 0 {
                    feedback[i] = Feedback::Present;
                    remaining[letter] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Unpack into per-position feedback.
    pub fn to_feedback(self) -> [Feedback; WORD_LENGTH] {
        let mut packed = self.0;
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for fb in feedback.iter_mut() {
            *fb = match packed % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                2 => Feedback::Correct,
                _ => unreachable!(),
            };
            packed /= 3;
        }
        feedback
    }

    /// Whether this pattern means the guess was the answer.
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fb in self.to_feedback() {
            write!(f, "{}", fb.square())?;
        }
        Ok(())
    }
}
