//! Game state tests: movement, gravity, locking, scoring, loss

use tui_blockfall::core::{is_lost, Catalog, GameConfig, GameState, LockedCells, Piece};
use tui_blockfall::types::{
    Key, Rgb, ShapeKind, FALL_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH, SCORE_PER_ROW,
};

const GRAY: Rgb = Rgb::new(128, 128, 128);

fn new_game(catalog: &Catalog) -> GameState<'_> {
    GameState::new(catalog, GameConfig::default(), 2024)
}

#[test]
fn test_spawn_then_left_to_the_wall() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);
    assert_eq!((game.active().x, game.active().y), (5, 0));

    game.tick(0, &[Key::Left]);
    assert_eq!(game.active().x, 4);

    game.tick(0, &[Key::Left; 10]);
    assert_eq!(game.active().x, 0);
    assert_eq!(game.active().y, 0);
    assert!(!game.game_over());
}

#[test]
fn test_grid_shows_active_piece_after_tick() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);
    game.tick(0, &[]);

    for (x, y) in game.active().active_cells() {
        assert_eq!(game.grid().get(x, y), Some(Some(game.active().color())));
    }
    assert_eq!(game.grid().occupied_count(), 4);
}

#[test]
fn test_bottom_row_completed_by_lock() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);

    for x in 2..GRID_WIDTH as i8 {
        game.locked_mut().insert((x, 19), GRAY);
    }
    game.set_active(Piece::new(catalog.shape(ShapeKind::O), 0, 18));

    let outcome = game.tick(FALL_INTERVAL_MS, &[]);

    let lock = outcome.lock.expect("piece should lock on the floor");
    assert_eq!(lock.kind, ShapeKind::O);
    assert_eq!(lock.rows_cleared, 1);
    assert_eq!(lock.score, SCORE_PER_ROW);
    assert!(!outcome.game_over);

    // Old bottom row gone; the O's upper half moved down into it.
    let yellow = catalog.shape(ShapeKind::O).color;
    assert_eq!(game.locked().len(), 2);
    assert_eq!(game.locked().get((0, 19)), Some(yellow));
    assert_eq!(game.locked().get((1, 19)), Some(yellow));
    for x in 2..GRID_WIDTH as i8 {
        assert!(!game.locked().contains((x, 19)));
    }

    assert_eq!(game.score(), SCORE_PER_ROW);
    assert_eq!(game.rows_cleared(), 1);
    assert_eq!(game.pieces_locked(), 1);
}

#[test]
fn test_two_rows_score_twenty() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);

    for y in [18, 19] {
        for x in 1..GRID_WIDTH as i8 {
            game.locked_mut().insert((x, y), GRAY);
        }
    }
    let mut vertical_i = Piece::new(catalog.shape(ShapeKind::I), 0, 16);
    vertical_i.rotate();
    game.set_active(vertical_i);

    let lock = game.tick(FALL_INTERVAL_MS, &[]).lock.expect("lock");
    assert_eq!(lock.rows_cleared, 2);
    assert_eq!(game.score(), 2 * SCORE_PER_ROW);

    let positions: Vec<_> = game.locked().positions().collect();
    assert_eq!(positions, vec![(0, 18), (0, 19)]);
}

#[test]
fn test_lock_without_clear_scores_nothing() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);
    game.set_active(Piece::new(catalog.shape(ShapeKind::T), 3, 18));

    let lock = game.tick(FALL_INTERVAL_MS, &[]).lock.expect("lock");
    assert_eq!(lock.rows_cleared, 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.locked().len(), 4);
    assert_eq!(game.active().y, 0);
    assert_eq!(game.active().x, 5);
}

#[test]
fn test_rotation_rejected_at_wall() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);
    let mut vertical_i = Piece::new(catalog.shape(ShapeKind::I), 8, 5);
    vertical_i.rotate();
    game.set_active(vertical_i);

    game.tick(0, &[Key::Up]);
    assert_eq!(game.active().rotation, 1);
    assert_eq!(game.active().x, 8);
}

#[test]
fn test_soft_drop_moves_without_score() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);

    game.tick(0, &[Key::Down, Key::Down, Key::Down]);
    assert_eq!(game.active().y, 3);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_score_only_grows_in_row_sized_steps() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);
    let script = [Key::Left, Key::Up, Key::Right, Key::Down, Key::Right, Key::Left];

    let mut last = 0;
    for i in 0..5_000usize {
        let key = script[i % script.len()];
        let outcome = game.tick(FALL_INTERVAL_MS, &[key]);
        if let Some(lock) = outcome.lock {
            assert_eq!(lock.score, last + lock.rows_cleared * SCORE_PER_ROW);
            last = lock.score;
        }
        assert!(game.score() >= last);
        if outcome.game_over {
            break;
        }
    }
    assert_eq!(game.score(), last);
}

#[test]
fn test_game_ends_when_stack_reaches_top() {
    let catalog = Catalog::standard();
    let mut game = new_game(&catalog);

    let mut ticks = 0;
    while !game.game_over() {
        game.tick(FALL_INTERVAL_MS, &[]);
        ticks += 1;
        assert!(ticks < 10_000, "game should end without input");
    }
    assert!(is_lost(game.locked()));

    // Further ticks are inert.
    let locked = game.locked().len();
    let outcome = game.tick(FALL_INTERVAL_MS, &[Key::Left]);
    assert!(outcome.game_over);
    assert!(outcome.lock.is_none());
    assert_eq!(game.locked().len(), locked);
}

#[test]
fn test_same_seed_same_game() {
    let catalog = Catalog::standard();
    let mut a = GameState::new(&catalog, GameConfig::default(), 77);
    let mut b = GameState::new(&catalog, GameConfig::default(), 77);

    for _ in 0..500 {
        let la = a.tick(FALL_INTERVAL_MS, &[Key::Left]).lock;
        let lb = b.tick(FALL_INTERVAL_MS, &[Key::Left]).lock;
        assert_eq!(la, lb);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_is_lost_threshold() {
    let mut locked = LockedCells::new();
    locked.insert((4, 1), GRAY);
    locked.insert((4, 19), GRAY);
    assert!(!is_lost(&locked));

    locked.insert((0, 0), GRAY);
    assert!(is_lost(&locked));

    let mut above: LockedCells = LockedCells::new();
    above.insert((3, -2), GRAY);
    assert!(is_lost(&above));

    assert!(!is_lost(&LockedCells::new()));
}

#[test]
fn test_full_grid_below_top_row_is_not_lost() {
    let mut locked = LockedCells::new();
    for y in 1..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            locked.insert((x, y), GRAY);
        }
    }
    assert_eq!(locked.len(), (GRID_WIDTH as usize) * (GRID_HEIGHT as usize - 1));
    assert!(!is_lost(&locked));

    locked.insert((9, 0), GRAY);
    assert!(is_lost(&locked));
}
