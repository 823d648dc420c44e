//! Shape catalog - the seven piece geometries and their colors
//!
//! Every shape is stored as an explicit list of pre-rotated matrices. Each matrix is
//! a tight bounding box anchored at the piece origin (top-left), `1` marking an
//! occupied cell. State 0 is the spawn orientation; each following state is the
//! clockwise rotation of the previous one.
//!
//! The catalog is built once at startup and handed out by reference. Nothing in the
//! game mutates it.

use crate::types::{Rgb, ShapeKind};

/// One rotation state: rows of occupied (1) / empty (0) entries
pub type Matrix = &'static [&'static [u8]];

const I_STATES: &[Matrix] = &[
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const O_STATES: &[Matrix] = &[&[&[1, 1], &[1, 1]]];

const T_STATES: &[Matrix] = &[
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
];

const S_STATES: &[Matrix] = &[
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

const Z_STATES: &[Matrix] = &[
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const J_STATES: &[Matrix] = &[
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
];

const L_STATES: &[Matrix] = &[
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
];

/// An immutable catalog entry
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Rgb,
    states: &'static [Matrix],
}

impl Shape {
    /// Number of distinct rotation states (1, 2 or 4)
    pub fn rotation_count(&self) -> usize {
        self.states.len()
    }

    /// Matrix for a rotation index (taken modulo the state count)
    pub fn matrix(&self, rotation: usize) -> Matrix {
        self.states[rotation % self.states.len()]
    }
}

/// The fixed set of shapes a game draws from
#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    shapes: [Shape; 7],
}

impl Catalog {
    /// The seven canonical shapes with their classic colors
    pub fn standard() -> Self {
        Self {
            shapes: [
                Shape {
                    kind: ShapeKind::I,
                    color: Rgb::new(0, 255, 255),
                    states: I_STATES,
                },
                Shape {
                    kind: ShapeKind::O,
                    color: Rgb::new(255, 255, 0),
                    states: O_STATES,
                },
                Shape {
                    kind: ShapeKind::T,
                    color: Rgb::new(128, 0, 128),
                    states: T_STATES,
                },
                Shape {
                    kind: ShapeKind::S,
                    color: Rgb::new(0, 255, 0),
                    states: S_STATES,
                },
                Shape {
                    kind: ShapeKind::Z,
                    color: Rgb::new(255, 0, 0),
                    states: Z_STATES,
                },
                Shape {
                    kind: ShapeKind::J,
                    color: Rgb::new(0, 0, 255),
                    states: J_STATES,
                },
                Shape {
                    kind: ShapeKind::L,
                    color: Rgb::new(255, 165, 0),
                    states: L_STATES,
                },
            ],
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[kind.index()]
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(m: Matrix) -> usize {
        m.iter().flat_map(|row| row.iter()).filter(|&&v| v == 1).count()
    }

    /// Clockwise rotation of a tight matrix, for checking the stored tables.
    fn rotate_cw(m: Matrix) -> Vec<Vec<u8>> {
        let h = m.len();
        let w = m[0].len();
        (0..w)
            .map(|r| (0..h).map(|c| m[h - 1 - c][r]).collect())
            .collect()
    }

    fn to_vec(m: Matrix) -> Vec<Vec<u8>> {
        m.iter().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn catalog_order_matches_kinds() {
        let catalog = Catalog::standard();
        for (shape, kind) in catalog.shapes().iter().zip(ShapeKind::ALL) {
            assert_eq!(shape.kind, kind);
            assert_eq!(catalog.shape(kind).kind, kind);
        }
    }

    #[test]
    fn every_state_has_four_cells() {
        let catalog = Catalog::standard();
        for shape in catalog.shapes() {
            for r in 0..shape.rotation_count() {
                assert_eq!(occupied(shape.matrix(r)), 4, "{:?} state {}", shape.kind, r);
            }
        }
    }

    #[test]
    fn rows_within_a_matrix_have_equal_width() {
        let catalog = Catalog::standard();
        for shape in catalog.shapes() {
            for r in 0..shape.rotation_count() {
                let m = shape.matrix(r);
                assert!(m.iter().all(|row| row.len() == m[0].len()));
            }
        }
    }

    #[test]
    fn stored_states_are_successive_clockwise_rotations() {
        let catalog = Catalog::standard();
        for shape in catalog.shapes() {
            let n = shape.rotation_count();
            for r in 0..n {
                assert_eq!(
                    rotate_cw(shape.matrix(r)),
                    to_vec(shape.matrix(r + 1)),
                    "{:?} {} -> {}",
                    shape.kind,
                    r,
                    (r + 1) % n
                );
            }
        }
    }

    #[test]
    fn rotation_counts() {
        let catalog = Catalog::standard();
        let counts: Vec<usize> = catalog.shapes().iter().map(|s| s.rotation_count()).collect();
        assert_eq!(counts, vec![2, 1, 4, 2, 2, 4, 4]);
    }
}
