use std::collections::HashSet;
use std::sync::Arc;

use wordlebot::{
    load_word_list, Board, Bot, FailureReason, Pattern, SolveOutcome, SolverConfig, Strategy,
    StrategyKind, WordleError,
};

fn get_test_words() -> Arc<Vec<String>> {
    Arc::new(load_word_list(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt"), 5).unwrap())
}

fn bot_with(kind: StrategyKind) -> Bot {
    let words = get_test_words();
    let strategy: Arc<dyn Strategy> = Arc::from(kind.build(words.clone(), &SolverConfig::default()));
    Bot::new(words, strategy, 5)
}

#[test]
fn test_opening_is_the_solution() {
    for kind in StrategyKind::ALL {
        let outcome = bot_with(kind).solve("joker", "joker").unwrap();
        assert_eq!(
            outcome,
            SolveOutcome::Solved {
                guesses: vec!["joker".to_string()]
            }
        );
        assert_eq!(outcome.guess_count(), Some(1));
    }
}

#[test]
fn test_votes_from_stale_under_every_strategy() {
    for kind in StrategyKind::ALL {
        let outcome = bot_with(kind).solve("votes", "stale").unwrap();
        assert!(outcome.is_solved(), "{:?}: {:?}", kind, outcome);
        assert!(outcome.guess_count().unwrap() <= 6, "{:?}: {:?}", kind, outcome);
        assert_eq!(outcome.guesses().first().map(String::as_str), Some("stale"));
        assert_eq!(outcome.guesses().last().map(String::as_str), Some("votes"));
    }
}

#[test]
fn test_candidates_strictly_shrink() {
    let words = get_test_words();
    let bot = bot_with(StrategyKind::Partition);
    for hidden in words.iter().step_by(5) {
        let outcome = bot.solve(hidden, "crane").unwrap();
        assert!(outcome.is_solved(), "{}: {:?}", hidden, outcome);

        let mut board = Board::new(5);
        let mut remaining = words.to_vec();
        for guess in outcome.guesses() {
            let before = remaining.len();
            board.push(guess.as_str(), Pattern::score(hidden, guess));
            remaining = board.filter(&remaining);
            if guess != hidden {
                assert!(remaining.len() < before, "{} after {}", hidden, guess);
            }
        }

        let unique: HashSet<&String> = outcome.guesses().iter().collect();
        assert_eq!(unique.len(), outcome.guesses().len());
    }
}

#[test]
fn test_missing_solution_is_a_contradiction() {
    let bot = bot_with(StrategyKind::Entropy);
    let outcome = bot.solve("vodka", "stale").unwrap();
    assert_eq!(outcome.guess_count(), None);
    match outcome {
        SolveOutcome::Failed { reason, guesses } => {
            assert_eq!(reason, FailureReason::Contradiction);
            assert_eq!(guesses[0], "stale");
        }
        SolveOutcome::Solved { .. } => panic!("solved a word that is not in the dictionary"),
    }
}

#[test]
fn test_malformed_input_is_rejected() {
    let bot = bot_with(StrategyKind::Entropy);
    assert!(matches!(
        bot.solve("vote", "stale"),
        Err(WordleError::WordLength { expected: 5, .. })
    ));
    assert!(matches!(bot.solve("votes", "st4le"), Err(WordleError::InvalidWord(_))));
    assert!(matches!(bot.solve("VOTES", "stale"), Err(WordleError::InvalidWord(_))));
}

#[test]
fn test_overlong_words_are_rejected() {
    let words = Arc::new(vec![
        "abcdefghijklmnopq".to_string(),
        "cdefghijklmnopqab".to_string(),
        "bcdefghijklmnopqa".to_string(),
    ]);
    let strategy: Arc<dyn Strategy> =
        Arc::from(StrategyKind::Entropy.build(words.clone(), &SolverConfig::default()));
    let bot = Bot::new(words.clone(), strategy, 17);

    assert!(matches!(
        bot.solve("cdefghijklmnopqab", "abcdefghijklmnopq"),
        Err(WordleError::UnsupportedWordLength(17))
    ));
    assert!(matches!(
        bot.solve_batch(&words, "abcdefghijklmnopq"),
        Err(WordleError::UnsupportedWordLength(17))
    ));
    assert!(matches!(bot.opening_guess(None), Err(WordleError::UnsupportedWordLength(17))));
}

#[test]
fn test_opening_guess() {
    let bot = bot_with(StrategyKind::Partition);
    assert_eq!(bot.opening_guess(Some("STALE")).unwrap(), "stale");
    assert!(matches!(bot.opening_guess(Some("st4le")), Err(WordleError::InvalidWord(_))));
    assert!(matches!(
        bot.opening_guess(Some("stal")),
        Err(WordleError::WordLength { expected: 5, .. })
    ));

    let picked = bot.opening_guess(None).unwrap();
    let best = bot.strategy().best_guess(&Board::new(5), bot.solutions()).unwrap();
    assert_eq!(picked, best.word);
}

#[test]
fn test_solve_on_seeded_board() {
    let bot = bot_with(StrategyKind::Partition);
    let mut board = Board::new(5);
    board.push_scored("crane", &Pattern::score("votes", "crane").render("crane")).unwrap();

    let outcome = bot.solve_on(&mut board, "votes", "stale").unwrap();
    assert!(outcome.is_solved());
    // The outcome only lists guesses made by this solve.
    assert_eq!(outcome.guesses()[0], "stale");
    assert_eq!(board.len(), outcome.guesses().len() + 1);
    assert!(board.is_solved());
}

#[test]
fn test_suggest() {
    let words = get_test_words();
    let bot = bot_with(StrategyKind::Entropy);
    let mut board = Board::new(5);
    board.push_scored("stale", "ST..E").unwrap();
    let candidates = board.filter(&words);
    assert!(candidates.iter().any(|w| w == "votes"));

    let ranked = bot.suggest(&board, &candidates);
    assert!(!ranked.is_empty());
    assert!(ranked.len() <= bot.strategy().max_guesses_returned());
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_batch_solves_everything() {
    let words = get_test_words();
    for kind in [StrategyKind::Entropy, StrategyKind::Partition] {
        let bot = bot_with(kind);
        let summary = bot.solve_batch(&words, "stale").unwrap();

        assert_eq!(summary.solved, words.len(), "{:?}", kind);
        assert_eq!(summary.failed, 0, "{:?}", kind);
        assert_eq!(summary.distribution.values().sum::<usize>(), words.len());
        assert_eq!(summary.distribution.get(&1), Some(&1));
        assert_eq!(
            summary.total_guesses,
            summary.distribution.iter().map(|(g, c)| g * c).sum::<usize>()
        );
        assert!(summary.distribution.keys().all(|&g| g <= 6), "{:?}: {:?}", kind, summary);
        assert!(summary.average() > 1.0 && summary.average() < 4.0);
    }
}

#[test]
fn test_batch_counts_failures() {
    let bot = bot_with(StrategyKind::Entropy);
    let hidden = vec!["votes".to_string(), "vodka".to_string(), "vote".to_string()];
    let summary = bot.solve_batch(&hidden, "stale").unwrap();
    assert_eq!(summary.solved, 1);
    assert_eq!(summary.failed, 2);

    assert!(bot.solve_batch(&hidden, "st").is_err());
}

#[test]
fn test_lookahead_and_search_solve_a_sample() {
    let words = get_test_words();
    for kind in [StrategyKind::Search, StrategyKind::Blended, StrategyKind::Lookahead] {
        let bot = bot_with(kind);
        let sample: Vec<String> = words.iter().step_by(36).cloned().collect();
        let summary = bot.solve_batch(&sample, "stale").unwrap();
        assert_eq!(summary.solved, sample.len(), "{:?}", kind);
        assert!(summary.distribution.keys().all(|&g| g <= 6), "{:?}: {:?}", kind, summary);
    }
}
