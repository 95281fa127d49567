//! Dense grid construction, cell access, and neighbor enumeration.

use crate::config::{BoundaryMode, DEFAULT_BOUNDARY};
use crate::error::LifeError;
use crate::state::{Coordinate, DenseGrid};

/// Build a dense grid from a matrix indexed `matrix[x][y]`.
///
/// Fails on an empty matrix, empty rows, or rows of unequal length.
pub fn create_grid(
    matrix: Vec<Vec<bool>>,
    boundary: BoundaryMode,
) -> Result<DenseGrid, LifeError> {
    let width = matrix.len();
    let height = matrix.first().map_or(0, Vec::len);
    if width == 0 || height == 0 {
        return Err(LifeError::EmptyGrid);
    }

    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != height)
    {
        return Err(LifeError::JaggedGrid {
            row,
            expected: height,
            found,
        });
    }

    let cells = matrix.into_iter().flatten().collect();
    Ok(build(width, height, cells, boundary))
}

/// Build a dense grid from a flat row-major cell buffer.
pub fn create_grid_from_cells(
    width: usize,
    height: usize,
    cells: Vec<bool>,
    boundary: BoundaryMode,
) -> Result<DenseGrid, LifeError> {
    if width == 0 || height == 0 {
        return Err(LifeError::EmptyGrid);
    }
    let expected = width
        .checked_mul(height)
        .ok_or(LifeError::DimensionsTooLarge { width, height })?;
    if cells.len() != expected {
        return Err(LifeError::CellCountMismatch {
            expected,
            found: cells.len(),
        });
    }

    Ok(build(width, height, cells, boundary))
}

fn build(width: usize, height: usize, cells: Vec<bool>, boundary: BoundaryMode) -> DenseGrid {
    log::debug!(
        "dense grid {}x{} created, {} live, {:?} boundary",
        width,
        height,
        cells.iter().filter(|&&c| c).count(),
        boundary
    );

    DenseGrid {
        width,
        height,
        cells,
        generation: 0,
        boundary,
    }
}

/// Calculate the linear index for a cell.
#[inline]
pub fn index_of(grid: &DenseGrid, x: usize, y: usize) -> usize {
    x * grid.height + y
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &DenseGrid, x: usize, y: usize) -> bool {
    x < grid.width && y < grid.height
}

/// Neighbor positions of `(x, y)` after the grid's boundary filter.
///
/// Under `BoundaryMode::Legacy` the filter looks at the source cell, not the
/// candidate: a cell on the last row or last column gets an empty list.
pub fn neighbors_of(grid: &DenseGrid, x: usize, y: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(8);
    let last_x = grid.width - 1;
    let last_y = grid.height - 1;

    for dx in -1isize..=1 {
        for dy in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let excluded = match grid.boundary {
                BoundaryMode::Legacy => {
                    (x == 0 && dx == -1) || (y == 0 && dy == -1) || x == last_x || y == last_y
                }
                BoundaryMode::Clipped => {
                    (x == 0 && dx == -1)
                        || (y == 0 && dy == -1)
                        || (x == last_x && dx == 1)
                        || (y == last_y && dy == 1)
                }
            };
            if excluded {
                continue;
            }

            neighbors.push(((x as isize + dx) as usize, (y as isize + dy) as usize));
        }
    }

    neighbors
}

/// Count live cells among the boundary-filtered neighbors of `(x, y)`.
pub fn count_live_neighbors(grid: &DenseGrid, x: usize, y: usize) -> u8 {
    neighbors_of(grid, x, y)
        .into_iter()
        .filter(|&(nx, ny)| grid.cells[index_of(grid, nx, ny)])
        .count() as u8
}

impl DenseGrid {
    /// Build an engine from `matrix[x][y]` with the default (legacy) boundary.
    pub fn new(matrix: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        create_grid(matrix, DEFAULT_BOUNDARY)
    }

    /// Build an engine from `matrix[x][y]` with an explicit edge policy.
    pub fn with_boundary(
        matrix: Vec<Vec<bool>>,
        boundary: BoundaryMode,
    ) -> Result<Self, LifeError> {
        create_grid(matrix, boundary)
    }

    /// Build an engine from a flat row-major buffer of `width * height` cells.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<bool>,
        boundary: BoundaryMode,
    ) -> Result<Self, LifeError> {
        create_grid_from_cells(width, height, cells, boundary)
    }

    /// Number of rows (`W`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of columns (`H`).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Edge policy chosen at construction.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Whether `(x, y)` is alive. Out-of-range positions read as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        in_bounds(self, x, y) && self.cells[index_of(self, x, y)]
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Current generation as `matrix[x][y]`.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.height).map(<[bool]>::to_vec).collect()
    }

    /// Live positions in row-major order.
    pub fn live_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| {
                Coordinate::new((idx / self.height) as i64, (idx % self.height) as i64)
            })
            .collect()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
