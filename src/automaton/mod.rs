//! Core automaton logic for both engines.
//!
//! `grid` and `stepping` implement the dense engine, `sparse` the live-set
//! engine. The FFI layer in `ffi/` calls these functions.

pub mod grid;
pub mod sparse;
pub mod stepping;

pub use grid::{
    count_live_neighbors, create_grid, create_grid_from_cells, in_bounds, index_of, neighbors_of,
};
pub use sparse::{create_sparse, moore_neighbors, neighbor_frequency, step_sparse};
pub use stepping::{next_state, step_grid};
