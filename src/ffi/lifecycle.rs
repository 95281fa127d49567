//! Engine creation, destruction, and generation queries.

use std::ptr;

use crate::automaton;
use crate::config::BoundaryMode;
use crate::state::{Coordinate, DenseGrid, SparseLife};

/// Creates a dense engine from a row-major byte matrix (0 = dead, non-zero = alive).
///
/// `boundary` selects the edge policy: 0 = legacy, 1 = clipped.
///
/// # Safety
/// - `cells` must point to at least `width * height` readable bytes
///
/// # Returns
/// A pointer to a new DenseGrid, or null on a null buffer, zero or oversized
/// dimensions, or an unknown boundary mode.
/// The returned pointer must eventually be freed with `gol_dense_destroy()`.
#[no_mangle]
pub unsafe extern "C" fn gol_dense_create(
    cells: *const u8,
    width: u32,
    height: u32,
    boundary: u8,
) -> *mut DenseGrid {
    if cells.is_null() {
        return ptr::null_mut();
    }

    let boundary = match boundary {
        0 => BoundaryMode::Legacy,
        1 => BoundaryMode::Clipped,
        other => {
            log::warn!("unknown boundary mode {}", other);
            return ptr::null_mut();
        }
    };

    let (width, height) = (width as usize, height as usize);
    let Some(len) = width.checked_mul(height) else {
        log::warn!("dense grid {}x{} is too large", width, height);
        return ptr::null_mut();
    };

    let bytes = std::slice::from_raw_parts(cells, len);
    let cells = bytes.iter().map(|&b| b != 0).collect();

    match automaton::create_grid_from_cells(width, height, cells, boundary) {
        Ok(grid) => Box::into_raw(Box::new(grid)),
        Err(err) => {
            log::warn!("rejected dense grid: {}", err);
            ptr::null_mut()
        }
    }
}

/// Destroys a dense engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_dense_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_dense_destroy(ptr: *mut DenseGrid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter of a dense engine, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a DenseGrid, or null
#[no_mangle]
pub unsafe extern "C" fn gol_dense_get_generation(ptr: *const DenseGrid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation
}

/// Creates a sparse engine from `count` interleaved `(row, col)` pairs.
///
/// Duplicate pairs collapse. A non-null buffer with `count == 0` yields an
/// empty engine.
///
/// # Safety
/// - `coords` must point to at least `2 * count` readable `i64` values, or be null
///
/// # Returns
/// A pointer to a new SparseLife, or null on a null buffer.
/// The returned pointer must eventually be freed with `gol_sparse_destroy()`.
#[no_mangle]
pub unsafe extern "C" fn gol_sparse_create(coords: *const i64, count: usize) -> *mut SparseLife {
    if coords.is_null() {
        log::warn!("rejected sparse life: null coordinate buffer");
        return ptr::null_mut();
    }
    let Some(len) = count.checked_mul(2) else {
        return ptr::null_mut();
    };

    let values = std::slice::from_raw_parts(coords, len);
    let cells = values
        .chunks_exact(2)
        .map(|pair| Coordinate::new(pair[0], pair[1]));

    Box::into_raw(Box::new(automaton::create_sparse(cells)))
}

/// Destroys a sparse engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_sparse_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_sparse_destroy(ptr: *mut SparseLife) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter of a sparse engine, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SparseLife, or null
#[no_mangle]
pub unsafe extern "C" fn gol_sparse_get_generation(ptr: *const SparseLife) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation
}
