use criterion::{Criterion, criterion_group, criterion_main};
use voidsweep_core::{Board, BoardConfig, Coord2};

fn reveal_full_board(c: &mut Criterion) {
    let config = BoardConfig::new(40, 1).unwrap();
    let hazard: &[Coord2] = &[(39, 39)];

    c.bench_function("reveal 40x40 zero region", |b| {
        b.iter(|| {
            let mut board = Board::new(config);
            board.initialize(hazard).unwrap();
            board.reveal((0, 0)).unwrap()
        })
    });
}

criterion_group!(benches, reveal_full_board);
criterion_main!(benches);
