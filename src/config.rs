//! Crate-wide constants and the dense engine's edge policy.

/// How the dense engine treats cells on the edge of its grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Edge exclusion decided by the source cell, not the candidate.
    ///
    /// Offsets pointing to row -1 or column -1 are dropped as usual, but a cell
    /// on the last row or last column gets no neighbors at all, so those cells
    /// are always dead after one step.
    #[default]
    Legacy,
    /// Standard clipped Moore neighborhood: only off-grid candidates are dropped.
    Clipped,
}

/// Boundary mode used by `DenseGrid::new`.
pub const DEFAULT_BOUNDARY: BoundaryMode = BoundaryMode::Legacy;

/// Moore neighborhood offsets, row-major, center excluded.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
