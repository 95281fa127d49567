//! Life Engines - Conway's Game of Life transition engines
//!
//! Two independent engines compute the B3/S23 transition:
//! - `DenseGrid`: a fixed `width × height` boolean matrix with an explicit edge policy
//! - `SparseLife`: a set of live coordinates on an unbounded plane
//!
//! Both replace their whole state on every step. The `ffi` module exposes them to C
//! hosts through opaque handles.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod patterns;
pub mod state;


pub use config::BoundaryMode;
pub use error::LifeError;
pub use state::{Coordinate, DenseGrid, SparseLife};
