//! Named seed patterns for either engine.

use crate::config::BoundaryMode;
use crate::error::LifeError;
use crate::state::{Coordinate, DenseGrid, SparseLife};

/// A named seed: a fixed set of live cells.
pub struct Pattern {
    pub name: &'static str,
    /// Live cells as `(row, col)`, relative to the pattern's origin.
    pub cells: &'static [(i64, i64)],
}

/// Period-2 oscillator, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
};

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Moves one cell down and right every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
};

/// Period-2 oscillator of two diagonal blocks.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

/// Three collinear cells, the seed of the 5x5 driver run.
pub const DRIVER_SEED: Pattern = Pattern {
    name: "Driver seed",
    cells: &[(2, 1), (2, 2), (2, 3)],
};

/// Every named pattern, for lookup by `find`.
pub const PATTERNS: &[Pattern] = &[BLINKER, BLOCK, GLIDER, TOAD, BEACON, DRIVER_SEED];

/// `offset` moved by `origin`, or `None` past the edge of the `i64` plane.
fn shift(origin: Coordinate, (row, col): (i64, i64)) -> Option<Coordinate> {
    Some(Coordinate::new(
        origin.row.checked_add(row)?,
        origin.col.checked_add(col)?,
    ))
}

/// Look up a pattern by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Live cells shifted so the pattern's origin sits at `origin`.
    ///
    /// Cells that would overflow `i64` are off the plane and skipped.
    pub fn cells_at(&self, origin: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().filter_map(move |&offset| shift(origin, offset))
    }

    /// Sparse engine seeded with the pattern at the origin.
    pub fn to_sparse(&self) -> SparseLife {
        SparseLife::new(self.cells_at(Coordinate::default()))
    }

    /// Place the pattern on a blank `width × height` grid with its origin at `origin`.
    pub fn to_dense(
        &self,
        width: usize,
        height: usize,
        origin: Coordinate,
        boundary: BoundaryMode,
    ) -> Result<DenseGrid, LifeError> {
        let mut matrix = vec![vec![false; height]; width];
        for &(row, col) in self.cells {
            let out_of_bounds = LifeError::CellOutOfBounds {
                row: origin.row.saturating_add(row),
                col: origin.col.saturating_add(col),
            };
            let Some(cell) = shift(origin, (row, col)) else {
                return Err(out_of_bounds);
            };
            let x = usize::try_from(cell.row).ok().filter(|&x| x < width);
            let y = usize::try_from(cell.col).ok().filter(|&y| y < height);
            match (x, y) {
                (Some(x), Some(y)) => matrix[x][y] = true,
                _ => return Err(out_of_bounds),
            }
        }

        DenseGrid::with_boundary(matrix, boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("BLOCK").map(|p| p.name), Some("Block"));
        assert!(find("pulsar").is_none());
    }

    #[test]
    fn test_patterns_have_no_duplicate_cells() {
        for pattern in PATTERNS {
            let sparse = pattern.to_sparse();
            assert_eq!(sparse.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_to_dense_places_at_origin() {
        let grid = GLIDER
            .to_dense(6, 6, Coordinate::new(1, 2), BoundaryMode::Legacy)
            .unwrap();
        assert_eq!(
            grid.live_cells(),
            vec![
                Coordinate::new(1, 3),
                Coordinate::new(2, 4),
                Coordinate::new(3, 2),
                Coordinate::new(3, 3),
                Coordinate::new(3, 4)
            ]
        );
    }

    #[test]
    fn test_to_dense_rejects_cells_off_grid() {
        let result = BLOCK.to_dense(3, 3, Coordinate::new(2, 0), BoundaryMode::Clipped);
        assert_eq!(result.err(), Some(LifeError::CellOutOfBounds { row: 3, col: 0 }));

        let result = BLOCK.to_dense(3, 3, Coordinate::new(0, -1), BoundaryMode::Clipped);
        assert_eq!(result.err(), Some(LifeError::CellOutOfBounds { row: 0, col: -1 }));
    }

    #[test]
    fn test_to_dense_rejects_origin_at_plane_edge() {
        let result = BLINKER.to_dense(3, 3, Coordinate::new(i64::MAX, 0), BoundaryMode::Legacy);
        assert_eq!(
            result.err(),
            Some(LifeError::CellOutOfBounds {
                row: i64::MAX,
                col: 0
            })
        );

        let result = GLIDER.to_dense(3, 3, Coordinate::new(0, i64::MAX), BoundaryMode::Clipped);
        assert_eq!(
            result.err(),
            Some(LifeError::CellOutOfBounds {
                row: 0,
                col: i64::MAX
            })
        );
    }

    #[test]
    fn test_cells_at_skips_cells_off_the_plane() {
        let cells: Vec<_> = BLINKER.cells_at(Coordinate::new(i64::MAX - 1, 0)).collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(i64::MAX, 0),
                Coordinate::new(i64::MAX, 1),
                Coordinate::new(i64::MAX, 2)
            ]
        );
        assert_eq!(BLINKER.cells_at(Coordinate::new(i64::MAX, 0)).count(), 0);
    }
}
