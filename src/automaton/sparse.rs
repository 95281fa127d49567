//! Sparse live-set stepping on an unbounded plane.
//!
//! Only cells adjacent to a live cell are ever examined. Every live cell
//! contributes one count to each of its eight neighbors; the counts decide
//! the next generation. A cell with no live neighbors never shows up as a
//! candidate, which is fine since a zero count never satisfies the rule.

use std::collections::{HashMap, HashSet};

use super::stepping::next_state;
use crate::config::MOORE_OFFSETS;
use crate::state::{Coordinate, SparseLife};

/// Build a sparse engine from any collection of live cells. Duplicates collapse.
pub fn create_sparse<I>(cells: I) -> SparseLife
where
    I: IntoIterator<Item = Coordinate>,
{
    let live: HashSet<Coordinate> = cells.into_iter().collect();
    log::debug!("sparse life created, {} live", live.len());

    SparseLife {
        live,
        generation: 0,
    }
}

/// The eight Moore neighbors of `cell`, unfiltered.
///
/// Positions that would overflow `i64` are past the edge of the representable
/// plane and are skipped.
pub fn moore_neighbors(cell: Coordinate) -> impl Iterator<Item = Coordinate> {
    MOORE_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        Some(Coordinate::new(
            cell.row.checked_add(dr)?,
            cell.col.checked_add(dc)?,
        ))
    })
}

/// How many cells of `live` have each position as a Moore neighbor.
pub fn neighbor_frequency(live: &HashSet<Coordinate>) -> HashMap<Coordinate, u8> {
    let mut frequency = HashMap::with_capacity(live.len() * 8);
    for &cell in live {
        for neighbor in moore_neighbors(cell) {
            *frequency.entry(neighbor).or_insert(0u8) += 1;
        }
    }
    frequency
}

/// Step the live set forward by one generation.
pub fn step_sparse(life: &mut SparseLife) {
    let next_live: HashSet<Coordinate> = neighbor_frequency(&life.live)
        .into_iter()
        .filter(|&(cell, count)| next_state(life.live.contains(&cell), count))
        .map(|(cell, _)| cell)
        .collect();

    life.live = next_live;
    life.generation += 1;

    log::trace!(
        "sparse generation {}: {} live",
        life.generation,
        life.live.len()
    );
}

impl SparseLife {
    /// Build an engine from any collection of live cells. Duplicates collapse.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        create_sparse(cells)
    }

    /// Advance one generation and return the new live set.
    pub fn step(&mut self) -> &HashSet<Coordinate> {
        step_sparse(self);
        &self.live
    }

    /// Current live set.
    pub fn cells(&self) -> &HashSet<Coordinate> {
        &self.live
    }

    /// Live cells in row-major order.
    pub fn sorted_cells(&self) -> Vec<Coordinate> {
        let mut cells: Vec<Coordinate> = self.live.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Whether `cell` is in the live set.
    pub fn is_alive(&self, cell: Coordinate) -> bool {
        self.live.contains(&cell)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// True once every cell has died.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Endless sequence of successive live sets.
impl Iterator for SparseLife {
    type Item = HashSet<Coordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i64, i64)]) -> HashSet<Coordinate> {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_create_deduplicates() {
        let life = SparseLife::new(
            [(1, 1), (1, 1), (2, 2), (1, 1)]
                .into_iter()
                .map(|(row, col)| Coordinate::new(row, col)),
        );
        assert_eq!(life.population(), 2);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn test_moore_neighbors() {
        let neighbors: Vec<_> = moore_neighbors(Coordinate::new(0, 0)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&Coordinate::new(0, 0)));
        assert!(neighbors.contains(&Coordinate::new(-1, -1)));
        assert!(neighbors.contains(&Coordinate::new(1, 1)));
    }

    #[test]
    fn test_moore_neighbors_at_plane_edge() {
        let corner = Coordinate::new(i64::MAX, i64::MIN);
        let neighbors: Vec<_> = moore_neighbors(corner).collect();
        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(i64::MAX - 1, i64::MIN),
                Coordinate::new(i64::MAX - 1, i64::MIN + 1),
                Coordinate::new(i64::MAX, i64::MIN + 1),
            ]
        );
    }

    #[test]
    fn test_neighbor_frequency_pair() {
        let frequency = neighbor_frequency(&set(&[(0, 0), (0, 1)]));
        // Each cell is a neighbor of the other.
        assert_eq!(frequency[&Coordinate::new(0, 0)], 1);
        assert_eq!(frequency[&Coordinate::new(0, 1)], 1);
        // Shared neighbors above and below.
        assert_eq!(frequency[&Coordinate::new(-1, 0)], 2);
        assert_eq!(frequency[&Coordinate::new(1, 1)], 2);
        // Far side of only one cell.
        assert_eq!(frequency[&Coordinate::new(0, -1)], 1);
        assert_eq!(frequency[&Coordinate::new(1, 2)], 1);
        assert_eq!(frequency.len(), 12);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = set(&[(1, 0), (1, 1), (1, 2)]);
        let vertical = set(&[(0, 1), (1, 1), (2, 1)]);
        let mut life = SparseLife::new(horizontal.clone());

        assert_eq!(life.step(), &vertical);
        assert_eq!(life.step(), &horizontal);
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut life = SparseLife::new([Coordinate::new(5, 5)]);
        assert!(life.step().is_empty());
    }

    #[test]
    fn test_empty_stays_empty() {
        let mut life = SparseLife::new(Vec::new());
        for _ in 0..5 {
            assert!(life.step().is_empty());
        }
        assert_eq!(life.generation(), 5);
    }

    #[test]
    fn test_negative_coordinates() {
        let block = set(&[(-1, -1), (-1, 0), (0, -1), (0, 0)]);
        let mut life = SparseLife::new(block.clone());
        assert_eq!(life.step(), &block);
        assert!(life.is_alive(Coordinate::new(-1, -1)));
    }

    #[test]
    fn test_sorted_cells() {
        let life = SparseLife::new(set(&[(2, 1), (0, 5), (2, 0)]));
        assert_eq!(
            life.sorted_cells(),
            vec![
                Coordinate::new(0, 5),
                Coordinate::new(2, 0),
                Coordinate::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_iterator_yields_generations() {
        let life = SparseLife::new(set(&[(1, 0), (1, 1), (1, 2)]));
        let generations: Vec<_> = life.take(3).collect();
        assert_eq!(generations[0], set(&[(0, 1), (1, 1), (2, 1)]));
        assert_eq!(generations[1], set(&[(1, 0), (1, 1), (1, 2)]));
        assert_eq!(generations[2], generations[0]);
    }
}
