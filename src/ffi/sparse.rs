//! Sparse engine stepping and live-set queries.

use crate::automaton;
use crate::state::{Coordinate, SparseLife};

/// Advances the sparse engine by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SparseLife, or null
#[no_mangle]
pub unsafe extern "C" fn gol_sparse_step(ptr: *mut SparseLife) {
    if ptr.is_null() {
        return;
    }

    automaton::step_sparse(&mut *ptr);
}

/// Returns 1 if `(row, col)` is alive, 0 if dead or ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SparseLife, or null
#[no_mangle]
pub unsafe extern "C" fn gol_sparse_is_alive(ptr: *const SparseLife, row: i64, col: i64) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).is_alive(Coordinate::new(row, col)) as u8
}

/// Number of live cells, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SparseLife, or null
#[no_mangle]
pub unsafe extern "C" fn gol_sparse_population(ptr: *const SparseLife) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).live.len() as u64
}

/// Copies live cells into `out_buf` as interleaved `(row, col)` pairs, row-major.
///
/// At most `capacity` pairs are written; call `gol_sparse_population()` first
/// to size the buffer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SparseLife, or null
/// - `out_buf` must point to at least `2 * capacity` writable `i64` values, or be null
///
/// # Returns
/// Number of pairs written.
#[no_mangle]
pub unsafe extern "C" fn gol_sparse_extract(
    ptr: *const SparseLife,
    out_buf: *mut i64,
    capacity: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let cells = (*ptr).sorted_cells();
    let count = capacity.min(cells.len());
    let out_slice = std::slice::from_raw_parts_mut(out_buf, count * 2);
    for (pair, cell) in out_slice.chunks_exact_mut(2).zip(&cells) {
        pair[0] = cell.row;
        pair[1] = cell.col;
    }

    count as u64
}
