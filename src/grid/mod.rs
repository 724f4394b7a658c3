//! Grids and grid views.
//!
//! `GridView` is a borrowed 2D view into a 1D buffer of `f64` with an explicit
//! stride. The stride counts elements between the starts of consecutive rows,
//! so a stride larger than the column count represents padded rows. Windows
//! are zero-copy views into the same backing slice and retain the original
//! stride.
//!
//! Extents are always given rows first, columns second.

use crate::util::{SimSearchError, SimSearchResult};

pub mod stats;

/// Borrowed 2D grid view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct GridView<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a> GridView<'a> {
    /// Creates a contiguous view with `stride == cols`.
    pub fn from_slice(data: &'a [f64], rows: usize, cols: usize) -> SimSearchResult<Self> {
        Self::new(data, rows, cols, cols)
    }

    /// Creates a view with an explicit stride.
    ///
    /// Every cell covered by the view must be finite.
    pub fn new(data: &'a [f64], rows: usize, cols: usize, stride: usize) -> SimSearchResult<Self> {
        let needed = required_len(rows, cols, stride)?;
        if data.len() < needed {
            return Err(SimSearchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        let view = Self {
            data,
            rows,
            cols,
            stride,
        };
        view.check_finite()?;
        Ok(view)
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Returns the value at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = row.checked_mul(self.stride)?.checked_add(col)?;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for `row` with length `cols`.
    pub fn row(&self, row: usize) -> Option<&'a [f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.cols)?;
        self.data.get(start..end)
    }

    /// Iterates over the rows of the view.
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [f64]> + 'a {
        let data = self.data;
        let stride = self.stride;
        let cols = self.cols;
        (0..self.rows).map(move |r| &data[r * stride..r * stride + cols])
    }

    /// Returns a zero-copy window with upper-left corner `(row, col)` spanning
    /// `rows` rows and `cols` columns.
    pub fn window(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> SimSearchResult<GridView<'a>> {
        if rows == 0 || cols == 0 {
            return Err(SimSearchError::InvalidDimensions { rows, cols });
        }

        let out_of_bounds = SimSearchError::WindowOutOfBounds {
            row,
            col,
            rows,
            cols,
            grid_rows: self.rows,
            grid_cols: self.cols,
        };
        let end_row = row.checked_add(rows).ok_or_else(|| out_of_bounds.clone())?;
        let end_col = col.checked_add(cols).ok_or_else(|| out_of_bounds.clone())?;
        if end_row > self.rows || end_col > self.cols {
            return Err(out_of_bounds);
        }

        let start = row * self.stride + col;
        let needed = (rows - 1) * self.stride + cols;
        let data = self
            .data
            .get(start..start + needed)
            .ok_or(SimSearchError::BufferTooSmall {
                needed: start + needed,
                got: self.data.len(),
            })?;

        // Cells were checked when the parent view was built.
        Ok(GridView {
            data,
            rows,
            cols,
            stride: self.stride,
        })
    }

    /// Copies the view into an owned contiguous grid.
    pub fn to_grid(&self) -> Grid {
        let mut data = Vec::with_capacity(self.cell_count());
        for row in self.iter_rows() {
            data.extend_from_slice(row);
        }
        Grid {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn check_finite(&self) -> SimSearchResult<()> {
        for (r, row) in self.iter_rows().enumerate() {
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(SimSearchError::NonFiniteValue { row: r, col: c });
            }
        }
        Ok(())
    }
}

/// Owned grid in contiguous row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid from a contiguous row-major buffer.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> SimSearchResult<Self> {
        let needed = required_len(rows, cols, cols)?;
        if data.len() != needed {
            return Err(SimSearchError::LengthMismatch {
                expected: needed,
                got: data.len(),
            });
        }
        GridView::from_slice(&data, rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Creates a grid from nested rows, rejecting empty and jagged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> SimSearchResult<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(SimSearchError::InvalidDimensions {
                rows: rows.len(),
                cols,
            });
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(SimSearchError::JaggedRows {
                    row: idx,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(data, rows.len(), cols)
    }

    /// Creates a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> SimSearchResult<Self> {
        let len = required_len(rows, cols, cols)?;
        Self::new(vec![value; len], rows, cols)
    }

    /// Wraps a buffer whose shape and contents are already known to be valid.
    pub(crate) fn from_parts(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row-major backing buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the value at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.view().get(row, col)
    }

    /// Returns a borrowed view of the grid.
    pub fn view(&self) -> GridView<'_> {
        GridView {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
            stride: self.cols,
        }
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }
}

fn required_len(rows: usize, cols: usize, stride: usize) -> SimSearchResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(SimSearchError::InvalidDimensions { rows, cols });
    }
    if stride < cols {
        return Err(SimSearchError::InvalidStride { cols, stride });
    }
    (rows - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(cols))
        .ok_or(SimSearchError::InvalidDimensions { rows, cols })
}
