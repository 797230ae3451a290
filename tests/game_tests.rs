use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_sim::{
    filter_candidates, select_guess, FeedbackPattern, GameSession, Outcome, Vocabulary,
    WordleError, MAX_ATTEMPTS,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn test_vocabulary() -> Vocabulary {
    let answers = words(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]);
    let mut guesses = answers.clone();
    guesses.extend(words(&["fudge", "dream", "quick"]));
    Vocabulary::new(answers, guesses).unwrap()
}

#[test]
fn filter_keeps_exactly_the_consistent_words() {
    let vocabulary = test_vocabulary();
    let pool = vocabulary.answers().to_vec();
    let feedback = FeedbackPattern::calculate("crane", "crate");

    let filtered = filter_candidates(&pool, "crane", feedback);

    for word in &pool {
        let consistent = FeedbackPattern::calculate("crane", word) == feedback;
        assert_eq!(filtered.contains(word), consistent, "word {}", word);
    }
    assert!(filtered.contains(&"crate".to_string()));
    assert!(filtered.len() <= pool.len());
}

#[test]
fn filter_does_not_touch_its_input() {
    let vocabulary = test_vocabulary();
    let pool = vocabulary.answers().to_vec();
    let before = pool.clone();

    let feedback = FeedbackPattern::calculate("slate", "roast");
    filter_candidates(&pool, "slate", feedback);

    assert_eq!(pool, before);
}

#[test]
fn answer_survives_filtering_and_pool_only_shrinks() {
    let vocabulary = test_vocabulary();
    let mut rng = StdRng::seed_from_u64(7);

    for answer in vocabulary.answers() {
        let mut pool = vocabulary.answers().to_vec();
        for _ in 0..MAX_ATTEMPTS {
            let guess = select_guess(&pool, vocabulary.guesses(), &mut rng).to_string();
            if &guess == answer {
                break;
            }
            let feedback = FeedbackPattern::calculate(&guess, answer);
            let filtered = filter_candidates(&pool, &guess, feedback);

            assert!(filtered.len() <= pool.len());
            assert!(filtered.contains(answer), "dropped the answer {}", answer);
            pool = filtered;
        }
    }
}

#[test]
fn every_game_terminates_in_a_win_or_loss() {
    let vocabulary = test_vocabulary();

    for (i, answer) in vocabulary.answers().iter().enumerate() {
        let rng = StdRng::seed_from_u64(i as u64);
        let mut session = GameSession::with_rng(&vocabulary, Some(answer), rng).unwrap();
        let state = session.play();

        assert!(state.attempts.len() <= MAX_ATTEMPTS);
        assert_ne!(state.outcome, Outcome::Unresolved);
        match state.outcome {
            Outcome::Won => {
                let (last_guess, last_feedback) = state.attempts.last().unwrap();
                assert_eq!(last_guess, answer);
                assert!(last_feedback.is_win());
            }
            Outcome::Lost => assert_eq!(state.attempts.len(), MAX_ATTEMPTS),
            Outcome::Unresolved => unreachable!(),
        }
    }
}

#[test]
fn seeded_games_replay_identically() {
    let vocabulary = test_vocabulary();

    let mut first =
        GameSession::with_rng(&vocabulary, None, StdRng::seed_from_u64(42)).unwrap();
    let mut second =
        GameSession::with_rng(&vocabulary, None, StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(first.answer(), second.answer());
    assert_eq!(first.play(), second.play());
}

#[test]
fn one_candidate_means_a_first_guess_win() {
    let vocabulary = Vocabulary::new(words(&["crane"]), words(&["crane", "slate"])).unwrap();
    let rng = StdRng::seed_from_u64(1);
    let mut session = GameSession::with_rng(&vocabulary, None, rng).unwrap();

    let state = session.play();
    assert_eq!(state.outcome, Outcome::Won);
    assert_eq!(state.attempts.len(), 1);
}

#[test]
fn two_candidates_win_within_two_guesses() {
    let vocabulary = Vocabulary::new(
        words(&["crane", "slate"]),
        words(&["crane", "slate"]),
    )
    .unwrap();

    for seed in 0..20 {
        let rng = StdRng::seed_from_u64(seed);
        let mut session = GameSession::with_rng(&vocabulary, None, rng).unwrap();
        let state = session.play();

        assert_eq!(state.outcome, Outcome::Won);
        assert!(state.attempts.len() <= 2);
    }
}

#[test]
fn empty_pool_falls_back_to_the_guess_list() {
    let vocabulary = test_vocabulary();
    let mut rng = StdRng::seed_from_u64(3);

    let guess = select_guess(&[], vocabulary.guesses(), &mut rng);
    assert!(vocabulary.guesses().iter().any(|w| w == guess));
}

#[test]
fn off_list_answers_are_playable() {
    let vocabulary = test_vocabulary();
    // well-formed, allowed as a guess, but never a secret
    let rng = StdRng::seed_from_u64(11);
    let mut session = GameSession::with_rng(&vocabulary, Some("fudge"), rng).unwrap();

    let state = session.play();
    assert!(state.attempts.len() <= MAX_ATTEMPTS);
    assert_ne!(state.outcome, Outcome::Unresolved);
}

#[test]
fn supplied_answers_are_lowercased() {
    let vocabulary = test_vocabulary();
    let session = GameSession::new(&vocabulary, Some("CRATE")).unwrap();
    assert_eq!(session.answer(), "crate");
}

#[test]
fn malformed_answers_are_rejected() {
    let vocabulary = test_vocabulary();
    for bad in ["care", "cranes", "cr4te", "crãne", ""] {
        let err = GameSession::new(&vocabulary, Some(bad)).unwrap_err();
        assert!(
            matches!(err, WordleError::InvalidAnswer { .. }),
            "accepted {:?}",
            bad
        );
    }
}
