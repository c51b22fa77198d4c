use std::path::Path;

use wordlebot::dictionary::merge_vocabulary;
use wordlebot::{load_dictionaries, load_word_list, parse_word_list, WordleError};

const WORDS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt");

#[test]
fn test_parse_word_list() {
    let words = parse_word_list("Crane\n\n  slate \r\nVOTES\n", 5).unwrap();
    assert_eq!(words, vec!["crane", "slate", "votes"]);
}

#[test]
fn test_parse_word_list_rejects_bad_words() {
    assert!(matches!(
        parse_word_list("crane\ncranes\n", 5),
        Err(WordleError::WordLength { actual: 6, expected: 5, .. })
    ));
    assert!(matches!(
        parse_word_list("cr-ne\n", 5),
        Err(WordleError::InvalidWord(_))
    ));
}

#[test]
fn test_load_word_list() {
    let words = load_word_list(WORDS, 5).unwrap();
    assert!(words.len() > 400);
    assert!(words.iter().all(|w| w.len() == 5));

    assert!(matches!(
        load_word_list("tests/data/missing.txt", 5),
        Err(WordleError::Io { .. })
    ));
    assert!(load_word_list(WORDS, 6).is_err());
}

#[test]
fn test_merge_vocabulary() {
    let solutions = vec!["votes".to_string(), "stale".to_string()];
    let guesses = vec!["crane".to_string(), "stale".to_string(), "crane".to_string()];
    assert_eq!(merge_vocabulary(&solutions, guesses), vec!["crane", "stale", "votes"]);
}

#[test]
fn test_load_dictionaries() {
    let (solutions, guesses) = load_dictionaries(WORDS, None, 5).unwrap();
    assert_eq!(solutions, guesses);

    let (solutions, guesses) = load_dictionaries(WORDS, Some(Path::new(WORDS)), 5).unwrap();
    assert_eq!(solutions, guesses);
}

#[test]
fn test_overlong_word_length_is_rejected() {
    assert!(matches!(
        parse_word_list("abcdefghijklmnopq\n", 17),
        Err(WordleError::UnsupportedWordLength(17))
    ));
    assert!(matches!(
        load_dictionaries(WORDS, None, 17),
        Err(WordleError::UnsupportedWordLength(17))
    ));
}
