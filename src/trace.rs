//! Tracing hooks for the similarity sweep.
//!
//! With the `tracing` feature each hook emits an info-level span or event;
//! without it they compile to empty functions.

use crate::grid::GridView;

#[cfg(feature = "tracing")]
pub(crate) type SweepGuard = tracing::span::EnteredSpan;

/// Guard returned by [`sweep_span`] when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) struct SweepGuard;

/// Enters a span covering one similarity sweep.
#[cfg(feature = "tracing")]
pub(crate) fn sweep_span(
    pattern: GridView<'_>,
    image: GridView<'_>,
    parallel: bool,
) -> SweepGuard {
    tracing::info_span!(
        "similarity_matrix",
        pattern_rows = pattern.rows(),
        pattern_cols = pattern.cols(),
        image_rows = image.rows(),
        image_cols = image.cols(),
        parallel
    )
    .entered()
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn sweep_span(
    _pattern: GridView<'_>,
    _image: GridView<'_>,
    _parallel: bool,
) -> SweepGuard {
    SweepGuard
}

/// Records a pattern with zero variance; every cell of its map is undefined.
#[cfg(feature = "tracing")]
pub(crate) fn flat_pattern(mean: f64) {
    tracing::info!(mean, "flat pattern, all scores undefined");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn flat_pattern(_mean: f64) {}

/// Records the extent of a finished similarity map.
#[cfg(feature = "tracing")]
pub(crate) fn sweep_done(rows: usize, cols: usize) {
    tracing::info!(rows, cols, "similarity map ready");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn sweep_done(_rows: usize, _cols: usize) {}
