use wordlebot::filter::{
    count_matching, filter_by_pattern, filter_by_query, partition, score_group, score_group_count,
    scores_by_guess,
};
use wordlebot::{load_word_list, Board, Pattern, Query};

fn get_test_words() -> Vec<String> {
    load_word_list(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt"), 5).unwrap()
}

fn board_for(hidden: &str, guesses: &[&str]) -> Board {
    let mut board = Board::new(5);
    for guess in guesses {
        board.push(*guess, Pattern::score(hidden, guess));
    }
    board
}

#[test]
fn test_empty_board_accepts_everything() {
    let words = get_test_words();
    let board = Board::new(5);
    assert_eq!(board.filter(&words), words);
    assert!(!board.query().is_contradictory());
}

#[test]
fn test_query_matches_pattern_filtering() {
    let words = get_test_words();
    let sequences: [&[&str]; 5] = [
        &["stale"],
        &["crane", "pilot"],
        &["abbey", "keeps"],
        &["geese", "teems"],
        &["llama", "eerie", "sassy"],
    ];
    for hidden in ["votes", "abbey", "temps", "keeps", "sheep", "alley", "speed", "joker"] {
        for guesses in sequences {
            let board = board_for(hidden, guesses);
            let mut expected = words.clone();
            for entry in board.entries() {
                expected = filter_by_pattern(&entry.guess, entry.pattern, &expected);
            }
            assert_eq!(board.filter(&words), expected, "{} after {:?}", hidden, guesses);
            assert!(expected.iter().any(|w| w == hidden));
        }
    }
}

#[test]
fn test_solution_always_satisfies() {
    let words = get_test_words();
    for hidden in words.iter().step_by(7) {
        let board = board_for(hidden, &["stale", "crony", "abbey"]);
        assert!(board.query().satisfies(hidden), "{}", hidden);
        assert!(Query::compile_positional(&board).satisfies(hidden), "{}", hidden);
    }
}

#[test]
fn test_repeated_letter_counts() {
    let words = get_test_words();
    let board = board_for("temps", &["feels"]);
    let query = board.query();

    assert_eq!(query.correct_at(1), Some('e'));
    assert_eq!(query.correct_at(4), Some('s'));
    assert_eq!(query.correct_at(0), None);
    assert_eq!(query.count_bounds('e'), Some((1, 1)));
    assert_eq!(query.count_bounds('f'), Some((0, 0)));

    assert_eq!(filter_by_query(&query, &words), vec!["temps".to_string()]);

    // Without count bounds a second 'e' elsewhere still passes.
    let positional = Query::compile_positional(&board);
    assert_eq!(positional.count_bounds('e'), None);
    assert_eq!(
        filter_by_query(&positional, &words),
        vec!["temes".to_string(), "temps".to_string()]
    );
}

#[test]
fn test_present_letter_is_required_elsewhere() {
    let board = board_for("stale", &["least"]);
    let query = board.query();
    assert!(query.must_contain_mask() & (1 << (b'l' - b'a')) != 0);
    assert!(query.satisfies("stale"));
    assert!(!query.satisfies("least"));
    assert!(!query.satisfies("steal"));
}

#[test]
fn test_compile_is_idempotent() {
    let mut board = board_for("votes", &["stale", "crony"]);
    let before = board.query();
    assert_eq!(before, board.query());

    board.push("abbey", Pattern::score("votes", "abbey"));
    assert_ne!(before, board.query());
    board.pop();
    assert_eq!(before, board.query());
}

#[test]
fn test_refiltering_is_idempotent() {
    let words = get_test_words();
    let cases: [(&str, &[&str]); 5] = [
        ("votes", &["stale"]),
        ("temps", &["feels"]),
        ("abbey", &["keeps"]),
        ("sheep", &["crane", "geese"]),
        ("speed", &["llama", "eerie", "sassy"]),
    ];
    for (hidden, guesses) in cases {
        let board = board_for(hidden, guesses);
        for query in [board.query(), Query::compile_positional(&board)] {
            let once = filter_by_query(&query, &words);
            assert!(!once.is_empty(), "{} after {:?}", hidden, guesses);
            assert_eq!(filter_by_query(&query, &once), once, "{} after {:?}", hidden, guesses);
        }
    }
}

#[test]
fn test_contradictory_board() {
    let mut board = Board::new(5);
    board.push_scored("slate", ".....").unwrap();
    board.push_scored("sheep", "s....").unwrap();
    assert!(board.query().is_contradictory());
    assert!(board.filter(&get_test_words()).is_empty());

    let consistent = board_for("votes", &["stale"]);
    assert!(!consistent.query().is_contradictory());
}

#[test]
fn test_push_scored_validates_input() {
    let mut board = Board::new(5);
    assert!(board.push_scored("sla", "s..").is_err());
    assert!(board.push_scored("sl4te", "s....").is_err());
    assert!(board.push_scored("slate", "s...").is_err());
    assert!(board.is_empty());

    board.push_scored("SLATE", "sL..E").unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board.last().unwrap().guess, "slate");
}

#[test]
fn test_score_groups() {
    let words = get_test_words();
    let board = board_for("votes", &["stale"]);
    let candidates = board.filter(&words);

    assert_eq!(score_group_count("teems", &candidates), (5, 2));
    assert_eq!(scores_by_guess("teems", &candidates).len(), 5);

    let groups = partition("teems", &candidates);
    assert_eq!(groups.values().map(Vec::len).sum::<usize>(), candidates.len());
    for (pattern, group) in &groups {
        assert_eq!(&score_group("teems", *pattern, &candidates), group);
    }

    let target = Pattern::score("votes", "teems");
    assert!(groups[&target].iter().any(|w| w == "votes"));
    assert_eq!(count_matching(&board.query(), &words), candidates.len());
}
