use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minehunt_core::*;

fn generate(c: &mut Criterion) {
    let expert = GameConfig::new(30, 16, 99, 99).unwrap();
    let dense = GameConfig::new(30, 16, 400, 400).unwrap();

    c.bench_function("generate expert", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            Board::generate(black_box(&expert), seed)
        })
    });
    c.bench_function("generate dense", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            Board::generate(black_box(&dense), seed)
        })
    });
}

fn reveal(c: &mut Criterion) {
    let open = Board::from_mine_coords(Coord::MAX, Coord::MAX, &[(0, 0)]).unwrap();

    c.bench_function("flood reveal full board", |b| {
        b.iter_batched(
            || open.clone(),
            |mut board| flood_reveal(&mut board, black_box((128, 128))),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, generate, reveal);
criterion_main!(benches);
