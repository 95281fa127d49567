//! Construction errors.

use thiserror::Error;

/// Invalid initial configurations, reported when an engine is built.
///
/// Stepping never fails once an engine exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// The matrix has no rows, or its rows have no columns.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    JaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat cell buffer does not hold exactly `width * height` cells.
    #[error("expected {expected} cells, found {found}")]
    CellCountMismatch { expected: usize, found: usize },
    /// A seed cell lands outside the grid it is placed on.
    #[error("cell [{row},{col}] lies outside the grid")]
    CellOutOfBounds { row: i64, col: i64 },
    /// `width * height` does not fit in memory indices.
    #[error("grid of {width}x{height} cells is too large")]
    DimensionsTooLarge { width: usize, height: usize },
}
