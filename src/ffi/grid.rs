//! Dense grid stepping and read-only cell access.

use crate::automaton;
use crate::state::DenseGrid;

/// Advances the dense engine by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a DenseGrid, or null
#[no_mangle]
pub unsafe extern "C" fn gol_dense_step(ptr: *mut DenseGrid) {
    if ptr.is_null() {
        return;
    }

    automaton::step_grid(&mut *ptr);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a DenseGrid, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn gol_dense_get_cell(ptr: *const DenseGrid, x: u32, y: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).is_alive(x as usize, y as usize) as u8
}

/// Number of rows, saturating at `u32::MAX`, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a DenseGrid, or null
#[no_mangle]
pub unsafe extern "C" fn gol_dense_width(ptr: *const DenseGrid) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    saturate_u32((*ptr).width)
}

/// Number of columns, saturating at `u32::MAX`, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a DenseGrid, or null
#[no_mangle]
pub unsafe extern "C" fn gol_dense_height(ptr: *const DenseGrid) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    saturate_u32((*ptr).height)
}

fn saturate_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Copies the current generation into `out_buf`, row-major, one byte per cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a DenseGrid, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written: the smaller of `len` and the cell count.
#[no_mangle]
pub unsafe extern "C" fn gol_dense_extract(
    ptr: *const DenseGrid,
    out_buf: *mut u8,
    len: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let grid = &*ptr;
    let count = len.min(grid.cells.len());
    let out_slice = std::slice::from_raw_parts_mut(out_buf, count);
    for (out, &alive) in out_slice.iter_mut().zip(&grid.cells) {
        *out = alive as u8;
    }

    count as u64
}
