//! Dense grid stepping with B3/S23 rules.

use super::grid::{count_live_neighbors, index_of};
use crate::state::DenseGrid;

/// B3/S23 rule shared by both engines.
///
/// - Birth: a dead cell with exactly 3 live neighbors becomes alive
/// - Survival: a live cell with 2 or 3 live neighbors stays alive
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    (alive && live_neighbors == 2) || live_neighbors == 3
}

/// Step the dense grid forward by one generation.
///
/// Every cell reads the pre-step buffer; the new buffer replaces it only once
/// it is complete.
pub fn step_grid(grid: &mut DenseGrid) {
    let mut next_cells = vec![false; grid.cells.len()];

    for x in 0..grid.width {
        for y in 0..grid.height {
            let idx = index_of(grid, x, y);
            let neighbors = count_live_neighbors(grid, x, y);
            next_cells[idx] = next_state(grid.cells[idx], neighbors);
        }
    }

    grid.cells = next_cells;
    grid.generation += 1;

    log::trace!(
        "dense generation {}: {} live",
        grid.generation,
        grid.population()
    );
}

impl DenseGrid {
    /// Advance one generation and return the new matrix (`matrix[x][y]`).
    pub fn step(&mut self) -> Vec<Vec<bool>> {
        step_grid(self);
        self.to_matrix()
    }
}

/// Endless sequence of successive generations.
impl Iterator for DenseGrid {
    type Item = Vec<Vec<bool>>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step())
    }
}
