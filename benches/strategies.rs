use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use wordlebot::{load_word_list, Board, Pattern, PatternTable, SolverConfig, Strategy, StrategyKind};

fn get_words() -> Arc<Vec<String>> {
    Arc::new(load_word_list(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt"), 5).unwrap())
}

fn bench_scoring(c: &mut Criterion) {
    let words = get_words();
    c.bench_function("score all pairs", |b| {
        b.iter(|| {
            let mut solved = 0;
            for solution in words.iter() {
                for guess in words.iter() {
                    solved += Pattern::score(black_box(solution), black_box(guess)).is_solved() as usize;
                }
            }
            solved
        })
    });
}

fn bench_strategies(c: &mut Criterion) {
    let words = get_words();
    let config = SolverConfig::default();
    let mut board = Board::new(5);
    board.push("crane", Pattern::score("votes", "crane"));
    let candidates = board.filter(&words);

    let mut group = c.benchmark_group("best_guess after crane");
    for kind in StrategyKind::ALL {
        let strategy = kind.build(words.clone(), &config);
        group.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.best_guess(&board, black_box(&candidates)))
        });
    }
    group.finish();

    let table = PatternTable::build(words.to_vec(), words.to_vec()).unwrap();
    c.bench_function("pattern table build", |b| {
        b.iter(|| PatternTable::build(black_box(words.to_vec()), words.to_vec()))
    });
    c.bench_function("pattern table best_guess", |b| {
        b.iter(|| table.best_guess(&board, black_box(&candidates)))
    });
}

criterion_group!(benches, bench_scoring, bench_strategies);
criterion_main!(benches);
