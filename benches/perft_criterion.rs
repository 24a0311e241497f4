use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use parlor_chess::game_state::chess_types::GameState;
use parlor_chess::move_generation::perft::perft;

const EXPECTED_NODES: [u64; 4] = [20, 400, 8902, 197_281];

fn perft_startpos(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(5));

    for depth in 1..=3u8 {
        let expected = EXPECTED_NODES[depth as usize - 1];
        group.throughput(Throughput::Elements(expected));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut state = GameState::new_game();
                let counts = perft(&mut state, black_box(depth)).expect("perft succeeds");
                assert_eq!(counts.nodes, expected);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, perft_startpos);
criterion_main!(benches);
