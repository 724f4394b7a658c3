//! Mean and windowed mean over grids.

use crate::grid::GridView;
use crate::util::SimSearchResult;

/// Arithmetic mean of every cell in `grid`.
///
/// Deviations are summed relative to the first cell, so a grid holding a
/// single repeated value yields exactly that value and every deviation from
/// the mean is exactly zero.
pub fn mean(grid: GridView<'_>) -> f64 {
    let first = grid.get(0, 0).unwrap_or(0.0);
    let mut shifted = 0.0f64;
    for row in grid.iter_rows() {
        for &value in row {
            shifted += value - first;
        }
    }
    first + shifted / grid.cell_count() as f64
}

/// Arithmetic mean of the window with upper-left corner `(row, col)` spanning
/// `rows` rows and `cols` columns.
///
/// Fails when either extent is zero or the window does not fit inside `grid`.
pub fn window_mean(
    grid: GridView<'_>,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> SimSearchResult<f64> {
    let window = grid.window(row, col, rows, cols)?;
    Ok(mean(window))
}
