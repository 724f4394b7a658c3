//! Pattern plan precomputation for normalized cross-correlation.

use crate::grid::stats::mean;
use crate::grid::GridView;
use crate::util::{SimSearchError, SimSearchResult};

/// Precomputed statistics and zero-mean buffer for a pattern.
///
/// Building the plan once lets a sweep skip recomputing the pattern mean and
/// its squared deviations at every offset. Scores produced through the plan
/// are identical to scoring each offset from scratch.
#[derive(Clone, Debug)]
pub struct PatternPlan {
    rows: usize,
    cols: usize,
    mean: f64,
    sq_sum: f64,
    zero_mean: Vec<f64>,
}

impl PatternPlan {
    /// Builds a plan from a pattern view.
    pub fn from_view(pattern: GridView<'_>) -> Self {
        let mean = mean(pattern);
        let mut zero_mean = Vec::with_capacity(pattern.cell_count());
        let mut sq_sum = 0.0f64;
        for row in pattern.iter_rows() {
            for &value in row {
                let d = value - mean;
                zero_mean.push(d);
                sq_sum += d * d;
            }
        }

        Self {
            rows: pattern.rows(),
            cols: pattern.cols(),
            mean,
            sq_sum,
            zero_mean,
        }
    }

    /// Returns the pattern row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the pattern column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the mean intensity of the pattern.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the sum of squared deviations from the mean.
    pub fn sq_sum(&self) -> f64 {
        self.sq_sum
    }

    /// Returns `true` when every pattern cell holds the same value.
    pub fn is_flat(&self) -> bool {
        self.sq_sum == 0.0
    }

    /// Returns the zero-mean pattern buffer in row-major order.
    pub fn zero_mean(&self) -> &[f64] {
        &self.zero_mean
    }

    /// Returns the similarity map extent for `image`, one cell per offset.
    pub fn output_dims(&self, image: GridView<'_>) -> SimSearchResult<(usize, usize)> {
        if self.rows > image.rows() || self.cols > image.cols() {
            return Err(SimSearchError::PatternTooLarge {
                pattern_rows: self.rows,
                pattern_cols: self.cols,
                image_rows: image.rows(),
                image_cols: image.cols(),
            });
        }
        Ok((image.rows() - self.rows + 1, image.cols() - self.cols + 1))
    }

    /// Scores the pattern against the image window whose upper-left corner is
    /// `(row, col)`.
    ///
    /// Returns `Ok(None)` when the window or the pattern has zero variance.
    pub fn score_at(
        &self,
        image: GridView<'_>,
        row: usize,
        col: usize,
    ) -> SimSearchResult<Option<f64>> {
        self.output_dims(image)?;
        let window = image.window(row, col, self.rows, self.cols)?;
        Ok(self.correlate(window))
    }

    /// Correlates against a window of exactly the pattern's extent.
    pub(crate) fn correlate(&self, window: GridView<'_>) -> Option<f64> {
        debug_assert_eq!((window.rows(), window.cols()), (self.rows, self.cols));

        let window_mean = mean(window);
        let mut cross = 0.0f64;
        let mut image_sq = 0.0f64;
        for (img_row, tpl_row) in window.iter_rows().zip(self.zero_mean.chunks(self.cols)) {
            for (&value, &p) in img_row.iter().zip(tpl_row) {
                let d = value - window_mean;
                cross += d * p;
                image_sq += d * d;
            }
        }

        let denom_sq = image_sq * self.sq_sum;
        if denom_sq == 0.0 {
            return None;
        }
        Some((cross / denom_sq.sqrt()).clamp(-1.0, 1.0))
    }
}
