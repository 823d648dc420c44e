use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{
    clear_rows, Catalog, GameConfig, GameSnapshot, GameState, Grid, LockedCells, Piece, SimpleRng,
};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{Key, Rgb, FRAME_MS, GRID_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let mut state = GameState::new(&catalog, GameConfig::default(), 12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(&catalog, GameConfig::default(), 12345);
            }
            state.tick(black_box(FRAME_MS), &[]);
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    let gray = Rgb::new(128, 128, 128);
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut locked = LockedCells::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..GRID_WIDTH as i8 {
                    locked.insert((x, y), gray);
                }
            }
            locked.insert((3, 10), gray);
            let grid = Grid::from_locked(&locked);
            clear_rows(black_box(&grid), &mut locked)
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| Piece::spawn(&catalog, &mut rng, 5, 0).active_cells())
    });
}

fn bench_apply_key(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let mut state = GameState::new(&catalog, GameConfig::default(), 12345);
    let keys = [Key::Left, Key::Right, Key::Up];
    let mut i = 0;

    c.bench_function("apply_key", |b| {
        b.iter(|| {
            i = (i + 1) % keys.len();
            state.apply_key(black_box(keys[i]))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let mut state = GameState::new(&catalog, GameConfig::default(), 12345);
    state.tick(0, &[]);
    let mut snap = GameSnapshot::default();
    state.snapshot_into(&mut snap);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_row_clear,
    bench_piece_spawn,
    bench_apply_key,
    bench_render
);
criterion_main!(benches);
