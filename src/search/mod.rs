//! Search entry points.
//!
//! The scan module scores a pattern against an image, either at a single
//! offset or at every valid offset. The peaks module reads match locations
//! back out of a similarity map.

pub(crate) mod peaks;
pub(crate) mod scan;

pub use peaks::{best_match, top_matches, Peak};
pub use scan::{correlation_at, ncc, similarity_matrix, similarity_matrix_with};

use crate::grid::GridView;
use crate::util::SimSearchResult;

/// Search configuration.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Sweep output rows on the rayon pool (requires the `rayon` feature).
    pub parallel: bool,
    /// Maximum number of peaks reported by [`find_matches`].
    pub topk: usize,
    /// Chebyshev radius for non-maximum suppression (0 disables).
    pub nms_radius: usize,
    /// Peaks scoring below this value are discarded.
    pub min_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            topk: 1,
            nms_radius: 0,
            min_score: -1.0,
        }
    }
}

/// Computes the similarity map and returns its best peaks.
pub fn find_matches(
    pattern: GridView<'_>,
    image: GridView<'_>,
    cfg: &SearchConfig,
) -> SimSearchResult<Vec<Peak>> {
    let similarity = similarity_matrix_with(pattern, image, cfg)?;
    Ok(top_matches(
        similarity.view(),
        cfg.topk,
        cfg.nms_radius,
        cfg.min_score,
    ))
}
