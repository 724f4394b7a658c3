//! Rayon-parallel sweep (feature-gated).
//!
//! Parallelizes over output rows. Each worker fills only its own row of the
//! similarity map, so no synchronization is needed beyond the partition, and
//! the result is identical to the scalar sweep.

use crate::grid::{Grid, GridView};
use crate::kernel::{Kernel, UNDEFINED_SCORE};
use crate::pattern::PatternPlan;
use crate::util::SimSearchResult;
use rayon::prelude::*;

/// Row-parallel sweep.
pub struct ParallelKernel;

impl Kernel for ParallelKernel {
    fn sweep(image: GridView<'_>, plan: &PatternPlan) -> SimSearchResult<Grid> {
        let (out_rows, out_cols) = plan.output_dims(image)?;
        let mut data = vec![0.0f64; out_rows * out_cols];

        data.par_chunks_mut(out_cols)
            .enumerate()
            .try_for_each(|(row, out_row)| -> SimSearchResult<()> {
                for (col, cell) in out_row.iter_mut().enumerate() {
                    let window = image.window(row, col, plan.rows(), plan.cols())?;
                    *cell = plan.correlate(window).unwrap_or(UNDEFINED_SCORE);
                }
                Ok(())
            })?;

        Ok(Grid::from_parts(data, out_rows, out_cols))
    }
}
