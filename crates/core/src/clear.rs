//! Row clearing
//!
//! Runs after a piece locks. Full rows are detected on the grid snapshot (which
//! already shows the locking piece), their cells are removed from the locked map,
//! and every settled cell above the topmost cleared row drops by the number of
//! rows cleared.
//!
//! The pass is split in phases so the map is never mutated while it is being
//! iterated:
//!
//! 1. collect the full rows, bottom to top
//! 2. delete their cells from the locked map
//! 3. shift a snapshot of the remaining keys above the topmost cleared row,
//!    bottom-up, by the total count (once, not once per row)

use arrayvec::ArrayVec;

use crate::grid::{Grid, LockedCells};
use crate::types::{Position, GRID_HEIGHT, GRID_WIDTH};

const MAX_ROWS: usize = GRID_HEIGHT as usize;

/// Clear every full row of `grid` from `locked`; returns the number of rows cleared.
///
/// Cells strictly above the topmost cleared row move down by the total count.
/// Cells between non-adjacent cleared rows stay where they are, and a shifted cell
/// landing on one of them replaces it.
pub fn clear_rows(grid: &Grid, locked: &mut LockedCells) -> u32 {
    let full_rows = full_rows(grid);
    let Some(&topmost) = full_rows.last() else {
        return 0;
    };
    let count = full_rows.len() as i8;

    for &y in &full_rows {
        for x in 0..GRID_WIDTH as i8 {
            locked.remove_if_present((x, y));
        }
    }

    let mut above: Vec<Position> = locked.positions().filter(|&(_, y)| y < topmost).collect();
    above.sort_by(|a, b| b.1.cmp(&a.1));

    for (x, y) in above {
        if let Some(color) = locked.remove((x, y)) {
            locked.insert((x, y + count), color);
        }
    }

    full_rows.len() as u32
}

/// Indices of full rows, scanning from the bottom row up
pub fn full_rows(grid: &Grid) -> ArrayVec<i8, MAX_ROWS> {
    (0..GRID_HEIGHT as i8)
        .rev()
        .filter(|&y| grid.is_row_full(y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    const GRAY: Rgb = Rgb::new(100, 100, 100);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn fill_row(locked: &mut LockedCells, y: i8) {
        for x in 0..GRID_WIDTH as i8 {
            locked.insert((x, y), GRAY);
        }
    }

    #[test]
    fn test_no_full_rows_is_a_no_op() {
        let mut locked = LockedCells::new();
        locked.insert((0, 19), GRAY);
        locked.insert((4, 10), BLUE);
        let before = locked.clone();

        let grid = Grid::from_locked(&locked);
        assert_eq!(clear_rows(&grid, &mut locked), 0);
        assert_eq!(locked, before);
    }

    #[test]
    fn test_full_rows_scan_bottom_up() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 5);
        fill_row(&mut locked, 19);
        fill_row(&mut locked, 12);
        let grid = Grid::from_locked(&locked);

        assert_eq!(full_rows(&grid).as_slice(), &[19, 12, 5]);
    }

    #[test]
    fn test_grid_cells_missing_from_map_do_not_abort() {
        // The grid shows a full row but only part of it is recorded as locked.
        let mut locked = LockedCells::new();
        locked.insert((0, 19), GRAY);
        locked.insert((2, 18), BLUE);

        let mut grid = Grid::new();
        for x in 0..GRID_WIDTH as i8 {
            grid.set(x, 19, Some(GRAY));
        }

        assert_eq!(clear_rows(&grid, &mut locked), 1);
        assert!(!locked.contains((0, 19)));
        assert_eq!(locked.get((2, 19)), Some(BLUE));
        assert_eq!(locked.len(), 1);
    }

    #[test]
    fn test_cells_between_split_clears_stay_put() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19);
        fill_row(&mut locked, 17);
        locked.insert((3, 18), BLUE);
        locked.insert((6, 10), BLUE);

        let grid = Grid::from_locked(&locked);
        assert_eq!(clear_rows(&grid, &mut locked), 2);

        assert_eq!(locked.get((3, 18)), Some(BLUE));
        assert_eq!(locked.get((6, 12)), Some(BLUE));
        assert_eq!(locked.len(), 2);
    }
}
