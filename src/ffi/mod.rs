//! C FFI layer.
//!
//! This module exports C ABI functions for hosts that drive the engines through
//! opaque handles. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions. Nothing here
//! mutates an engine except stepping it.

pub mod grid;
pub mod lifecycle;
pub mod sparse;

pub use grid::{
    gol_dense_extract, gol_dense_get_cell, gol_dense_height, gol_dense_step, gol_dense_width,
};
pub use lifecycle::{
    gol_dense_create, gol_dense_destroy, gol_dense_get_generation, gol_sparse_create,
    gol_sparse_destroy, gol_sparse_get_generation,
};
pub use sparse::{gol_sparse_extract, gol_sparse_is_alive, gol_sparse_population, gol_sparse_step};
