use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mines_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for mines in MINE_PRESETS.into_iter().chain([GRID_SIZE - 1]) {
        let config = RoundConfig::new(DEFAULT_STAKE, mines);
        group.bench_with_input(BenchmarkId::from_parameter(mines), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomMinefieldGenerator::new(seed).generate(black_box(config)))
            });
        });
    }
    group.finish();
}

fn bench_round(c: &mut Criterion) {
    c.bench_function("round/cash_out_after_five", |b| {
        let mut engine = GameEngine::new(MemoryWallet::new(Credits::MAX / 4), 0);
        engine.configure(DEFAULT_STAKE, 5);
        b.iter(|| {
            engine.start().unwrap();
            let mut revealed = 0;
            for index in 0..GRID_SIZE {
                if revealed == 5 {
                    break;
                }
                if !engine.grid().cell(index).is_mine() {
                    engine.reveal(index).unwrap();
                    revealed += 1;
                }
            }
            black_box(engine.cash_out().unwrap())
        });
    });
}

criterion_group!(benches, bench_generate, bench_round);
criterion_main!(benches);
