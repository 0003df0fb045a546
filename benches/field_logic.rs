use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{spawn_block, BlockPiece, GameConfig, Grid, PlayField, Session};
use blockfall::types::{Coordinate, Dimensions, PieceKind, RotationDirection, TICK_MS};

fn bench_try_move(c: &mut Criterion) {
    let dims = Dimensions::default();
    let mut field = PlayField::new(dims);
    let mut block = spawn_block(1, PieceKind::T, dims);
    field.add_block(&block);
    let mut dx = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            dx = -dx;
            field.try_move(&mut block, black_box(dx), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let dims = Dimensions::default();
    let mut field = PlayField::new(dims);
    let mut block = spawn_block(1, PieceKind::L, dims);
    field.add_block(&block);
    field.try_move(&mut block, 0, 1);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            field.try_rotate(&mut block, black_box(RotationDirection::Clockwise));
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(Dimensions::default());
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(Coordinate::new(x, y), Some(BlockPiece::new(1, PieceKind::I)));
                }
            }
            grid.clear_full_rows(black_box(&[16, 17, 18, 19]));
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    c.bench_function("session_tick_16ms", |b| {
        b.iter_with_setup(
            || {
                let mut session = Session::new(GameConfig::default(), Vec::new())
                    .expect("default config is valid");
                session.start();
                session
            },
            |mut session| {
                for _ in 0..64 {
                    session.tick(black_box(TICK_MS));
                }
                session
            },
        )
    });
}

criterion_group!(
    benches,
    bench_try_move,
    bench_try_rotate,
    bench_clear_rows,
    bench_session_tick
);
criterion_main!(benches);
