//! Similarity sweep kernels.

use crate::grid::{Grid, GridView};
use crate::pattern::PatternPlan;
use crate::util::SimSearchResult;

/// Score written for offsets whose window or pattern has zero variance.
pub const UNDEFINED_SCORE: f64 = -1.0;

/// Kernel trait for sweeping a pattern over every valid offset.
pub trait Kernel {
    /// Scores every offset of `plan` over `image`, row-major.
    ///
    /// Offsets with zero variance receive [`UNDEFINED_SCORE`].
    fn sweep(image: GridView<'_>, plan: &PatternPlan) -> SimSearchResult<Grid>;
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;
