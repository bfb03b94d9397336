use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use promotion_puzzle::game_state::game_state::GameState;
use promotion_puzzle::search::exhaustive_search::{run_search_from, SearchConfig};
use promotion_puzzle::search::search_observer::NullObserver;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: &'static str,
    // Indexed by depth limit.
    expected_leaves: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "open",
        diagram: "NNNN/BBBB/RRRR/3P",
        expected_leaves: &[3, 30, 269, 2364, 20_492],
    },
    BenchCase {
        name: "red_squares",
        diagram: "NNNN/BBBB/RRRR/1xxP",
        expected_leaves: &[1, 3, 9, 22, 49, 94, 194, 428, 966, 2084, 4466, 9804, 21_440, 46_886],
    },
];

const CASES_STANDARD: &[BenchCase] = &[BenchCase {
    name: "open",
    diagram: "NNNN/BBBB/RRRR/3P",
    expected_leaves: &[3, 30, 269, 2364, 20_492, 176_348, 1_503_807],
}];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("PUZZLE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn count_leaves(game: &GameState, depth_limit: u32) -> u64 {
    run_search_from(
        game.clone(),
        &SearchConfig::with_depth_limit(depth_limit),
        &mut NullObserver,
    )
    .expect("search should run")
    .total_leaves
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_diagram(case.diagram).expect("benchmark diagram should parse");
        let deepest = case.expected_leaves.len() - 1;

        // Correctness guard before benchmarking.
        for (depth_limit, expected) in case.expected_leaves.iter().enumerate() {
            assert_eq!(
                count_leaves(&game, depth_limit as u32),
                *expected,
                "leaf mismatch for {} at depth limit {}",
                case.name,
                depth_limit
            );
        }

        let expected = case.expected_leaves[deepest];
        group.throughput(Throughput::Elements(expected));
        group.bench_with_input(
            BenchmarkId::new(case.name, format!("d{deepest}")),
            &game,
            |b, game| {
                b.iter(|| {
                    let leaves = count_leaves(black_box(game), black_box(deepest as u32));
                    assert_eq!(leaves, expected);
                    black_box(leaves)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
