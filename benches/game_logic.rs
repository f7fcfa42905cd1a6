use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_polytris::core::{Board, GameEngine, GameSnapshot, ShapeCatalog, TickOutcome};
use tui_polytris::types::{ColorId, Command};

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.apply(Command::Restart);
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    let _ = board.set(row, col, Some(ColorId(0)));
                }
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    // Drop the piece to the stack, then one tick locks it and spawns the next.
    c.bench_function("drop_lock_and_spawn", |b| {
        b.iter(|| {
            while engine.apply(Command::SoftDrop) {}
            match engine.tick() {
                TickOutcome::Locked(event) if !event.game_over => {}
                TickOutcome::Fell => {}
                _ => {
                    engine.apply(Command::Restart);
                }
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            engine.apply(black_box(Command::MoveLeft));
            engine.apply(black_box(Command::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shapes = ShapeCatalog::standard();

    c.bench_function("rotate_all_shapes", |b| {
        b.iter(|| {
            for shape in shapes.shapes() {
                black_box(shape.rotated_clockwise());
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = GameEngine::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
