//! Core state structures for both engines.
//!
//! The logic that builds and steps these lives in `automaton`; the C ABI in `ffi`
//! hands them out as opaque pointers.

use std::collections::HashSet;
use std::fmt;

use crate::config::BoundaryMode;

/// A cell position on the plane: `row` then `col`.
///
/// Plain value type. Equality, hashing and ordering all come from the two fields,
/// so it works as a key in both hashed and ordered containers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i64,
    pub col: i64,
}

impl Coordinate {
    pub const fn new(row: i64, col: i64) -> Self {
        Coordinate { row, col }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((row, col): (i64, i64)) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// Dense engine state: a fixed `width × height` boolean matrix.
///
/// `width` counts rows (indexed by `x`), `height` counts columns (indexed by `y`).
/// Cells are stored row-major; see `automaton::grid::index_of`.
pub struct DenseGrid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<bool>,
    pub(crate) generation: u64,
    pub(crate) boundary: BoundaryMode,
}

/// Sparse engine state: the set of live coordinates on an unbounded plane.
pub struct SparseLife {
    pub(crate) live: HashSet<Coordinate>,
    pub(crate) generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_coordinate_value_equality() {
        let a = Coordinate::new(3, -4);
        let b = Coordinate::from((3, -4));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1, "equal coordinates must collapse to one key");
    }

    #[test]
    fn test_coordinate_ordering() {
        let ordered: BTreeSet<Coordinate> = [(1, 0), (0, 5), (0, -1)]
            .into_iter()
            .map(Coordinate::from)
            .collect();
        let ordered: Vec<_> = ordered.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                Coordinate::new(0, -1),
                Coordinate::new(0, 5),
                Coordinate::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(2, 1).to_string(), "[2,1]");
        assert_eq!(Coordinate::new(-7, 0).to_string(), "[-7,0]");
    }
}
