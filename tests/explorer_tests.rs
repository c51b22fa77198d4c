use std::sync::Arc;

use wordlebot::strategy::{EntropyStrategy, PartitionStrategy};
use wordlebot::{load_word_list, Board, Explorer, Pattern, SearchResult, SolverConfig, StrategyKind};

fn get_test_words() -> Arc<Vec<String>> {
    Arc::new(load_word_list(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt"), 5).unwrap())
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_empty_candidates_is_a_failure() {
    let vocabulary = get_test_words();
    let strategy = EntropyStrategy::new(vocabulary, &SolverConfig::default());
    let result = Explorer::new(&strategy).search(&mut Board::new(5), &[]);
    assert_eq!(
        result,
        SearchResult {
            failures: 1,
            ..SearchResult::default()
        }
    );
}

#[test]
fn test_single_candidate_is_a_leaf() {
    let vocabulary = get_test_words();
    let strategy = EntropyStrategy::new(vocabulary, &SolverConfig::default());
    let explorer = Explorer::new(&strategy);

    let result = explorer.search(&mut Board::new(5), &words(&["joker"]));
    assert_eq!(result.visited_nodes, 1);
    assert_eq!(result.solved, 1);
    assert_eq!(result.min_depth, Some(1));
    assert_eq!(result.max_depth, Some(1));

    // The last guess already was the solution.
    let mut board = Board::new(5);
    board.push("joker", Pattern::solved(5));
    let result = explorer.search(&mut board, &words(&["joker"]));
    assert_eq!(result.min_depth, Some(1));
}

#[test]
fn test_every_candidate_is_solved() {
    let vocabulary = get_test_words();
    let config = SolverConfig::default();
    for kind in [StrategyKind::Entropy, StrategyKind::Partition] {
        let strategy = kind.build(vocabulary.clone(), &config);
        let mut board = Board::new(5);
        let result = Explorer::new(strategy.as_ref()).search_from(&mut board, "stale", &vocabulary);

        assert_eq!(result.solved, vocabulary.len(), "{:?}", kind);
        assert_eq!(result.failures, 0, "{:?}", kind);
        assert!(result.visited_nodes > vocabulary.len());
        assert_eq!(result.min_depth, Some(1));
        assert!(result.max_depth.unwrap() <= 6, "{:?}", kind);
        assert!(board.is_empty());
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    let vocabulary = get_test_words();
    let strategy = PartitionStrategy::new(vocabulary.clone(), &SolverConfig::default());
    let mut board = Board::new(5);
    board.push("stale", Pattern::score("votes", "stale"));
    let candidates = board.filter(&vocabulary);
    let before = board.clone();

    let result = Explorer::new(&strategy).search(&mut board, &candidates);
    assert_eq!(board, before);
    assert_eq!(result.solved, candidates.len());
    assert!(result.min_depth.unwrap() >= 2);
    assert!(result.max_depth.unwrap() <= 4);
}

#[test]
fn test_non_splitting_guess_is_counted_as_failure() {
    let vocabulary = get_test_words();
    let strategy = EntropyStrategy::new(vocabulary, &SolverConfig::default());
    let candidates = words(&["teems", "temes", "temps"]);

    // "blind" shares no letter with any candidate.
    let result = Explorer::new(&strategy).search_from(&mut Board::new(5), "blind", &candidates);
    assert_eq!(result.failures, 1);
    assert_eq!(result.solved, 0);
    assert_eq!(result.visited_nodes, 1);
}
