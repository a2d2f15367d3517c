use criterion::{Criterion, criterion_group, criterion_main};
use pocket_arcade_core::*;
use std::hint::black_box;

fn flood_fill(c: &mut Criterion) {
    let layout = MineLayout::from_mine_indices((10, 10), &[99]).unwrap();
    c.bench_function("minefield open board flood", |b| {
        b.iter(|| {
            let mut field = MineField::new(layout.clone());
            black_box(field.reveal(black_box(0)).unwrap())
        })
    });

    let mut rng = seeded_rng(42);
    c.bench_function("minefield random layout", |b| {
        b.iter(|| MineLayout::random(black_box(MinefieldConfig::CLASSIC), &mut rng))
    });
}

fn merge_slides(c: &mut Criterion) {
    c.bench_function("merge row", |b| {
        b.iter(|| merge_left(black_box([2, 2, 4, 4])))
    });

    c.bench_function("merge board game", |b| {
        b.iter(|| {
            let mut board = MergeBoard::new(MergeConfig::CLASSIC, seeded_rng(7));
            let mut moves = 0;
            while moves < 200 && board.is_active() {
                board.slide(Direction::ALL[moves % 4]);
                moves += 1;
            }
            black_box(board.score())
        })
    });
}

criterion_group!(benches, flood_fill, merge_slides);
criterion_main!(benches);
