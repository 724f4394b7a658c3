//! Normalized cross-correlation at one offset and over the full offset range.

use crate::grid::{Grid, GridView};
use crate::kernel::scalar::ScalarKernel;
use crate::kernel::{Kernel, UNDEFINED_SCORE};
use crate::pattern::PatternPlan;
use crate::search::SearchConfig;
use crate::trace;
use crate::util::SimSearchResult;

#[cfg(feature = "rayon")]
use crate::kernel::rayon::ParallelKernel;

/// Normalized cross-correlation of `pattern` placed with its upper-left corner
/// at `(row, col)` in `image`.
///
/// Both the pattern mean and the mean of the covered image window are
/// subtracted before correlating. When either side has zero variance the
/// score is undefined and [`UNDEFINED_SCORE`] (`-1.0`) is returned; use
/// [`correlation_at`] to tell that case apart from a perfect inverse match.
pub fn ncc(
    row: usize,
    col: usize,
    pattern: GridView<'_>,
    image: GridView<'_>,
) -> SimSearchResult<f64> {
    Ok(correlation_at(row, col, pattern, image)?.unwrap_or(UNDEFINED_SCORE))
}

/// Like [`ncc`], but returns `None` where the score is undefined.
pub fn correlation_at(
    row: usize,
    col: usize,
    pattern: GridView<'_>,
    image: GridView<'_>,
) -> SimSearchResult<Option<f64>> {
    PatternPlan::from_view(pattern).score_at(image, row, col)
}

/// Scores `pattern` at every offset where it fits inside `image`.
///
/// The result has `image.rows() - pattern.rows() + 1` rows and
/// `image.cols() - pattern.cols() + 1` columns; cell `(r, c)` equals
/// `ncc(r, c, pattern, image)`.
pub fn similarity_matrix(pattern: GridView<'_>, image: GridView<'_>) -> SimSearchResult<Grid> {
    similarity_matrix_with(pattern, image, &SearchConfig::default())
}

/// Same as [`similarity_matrix`] with an explicit configuration.
///
/// `cfg.parallel` selects the row-parallel sweep when the `rayon` feature is
/// enabled; both sweeps produce identical maps.
pub fn similarity_matrix_with(
    pattern: GridView<'_>,
    image: GridView<'_>,
    cfg: &SearchConfig,
) -> SimSearchResult<Grid> {
    let _span = trace::sweep_span(pattern, image, cfg.parallel);

    let plan = PatternPlan::from_view(pattern);
    if plan.is_flat() {
        trace::flat_pattern(plan.mean());
    }

    let out = sweep(image, &plan, cfg.parallel)?;
    trace::sweep_done(out.rows(), out.cols());
    Ok(out)
}

#[cfg(feature = "rayon")]
fn sweep(image: GridView<'_>, plan: &PatternPlan, parallel: bool) -> SimSearchResult<Grid> {
    if parallel {
        ParallelKernel::sweep(image, plan)
    } else {
        ScalarKernel::sweep(image, plan)
    }
}

#[cfg(not(feature = "rayon"))]
fn sweep(image: GridView<'_>, plan: &PatternPlan, _parallel: bool) -> SimSearchResult<Grid> {
    ScalarKernel::sweep(image, plan)
}
