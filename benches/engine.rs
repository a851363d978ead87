use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridblock::core::catalog::find;
use gridblock::core::{Board, GameSession, MemoryStore, Shape, ShapeSupply};
use gridblock::types::{ColorTag, Rotation};

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_row_and_column", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for i in 0..10 {
                board.set(i, 4, Some(ColorTag::Blue));
                board.set(6, i, Some(ColorTag::Blue));
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_legal_placement_scan(c: &mut Criterion) {
    // Checkerboard: the block fits nowhere, forcing a full scan
    let mut board = Board::new();
    for y in 0..10 {
        for x in 0..10 {
            if (x + y) % 2 == 0 {
                board.set(x, y, Some(ColorTag::Red));
            }
        }
    }
    let block = Shape::new(find("block").unwrap(), Rotation::North, ColorTag::Green);

    c.bench_function("has_any_legal_placement_miss", |b| {
        b.iter(|| black_box(board.has_any_legal_placement(black_box(&block))))
    });
}

fn bench_generate_tray(c: &mut Criterion) {
    let mut supply = ShapeSupply::from_seed(12345);

    c.bench_function("generate_tray", |b| b.iter(|| black_box(supply.generate_tray())));
}

fn bench_greedy_game(c: &mut Criterion) {
    c.bench_function("greedy_game_to_deadlock", |b| {
        b.iter(|| {
            let mut session = GameSession::new(MemoryStore::new(), ShapeSupply::from_seed(7));
            for _ in 0..1_000 {
                let next = session.tray().iter().find_map(|(slot, shape)| {
                    session
                        .board()
                        .legal_placements(shape)
                        .next()
                        .map(|(x, y)| (slot, x, y))
                });
                match next {
                    Some((slot, x, y)) => {
                        session.attempt_placement(slot, x, y);
                    }
                    None => break,
                }
            }
            black_box(session.score())
        })
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_legal_placement_scan,
    bench_generate_tray,
    bench_greedy_game
);
criterion_main!(benches);
