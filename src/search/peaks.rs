//! Reading match locations out of a similarity map.
//!
//! Cells are visited in row-major order and every sort is stable, so equal
//! scores always resolve to the lowest row and then the lowest column.

use crate::grid::GridView;

/// A scored offset in a similarity map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    /// Row of the pattern's upper-left corner.
    pub row: usize,
    /// Column of the pattern's upper-left corner.
    pub col: usize,
    /// NCC score at the offset.
    pub score: f64,
}

impl Peak {
    /// Chebyshev distance between the two offsets.
    pub fn distance(&self, other: &Peak) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

fn cells(similarity: GridView<'_>) -> impl Iterator<Item = Peak> + '_ {
    similarity.iter_rows().enumerate().flat_map(|(row, values)| {
        values
            .iter()
            .enumerate()
            .map(move |(col, &score)| Peak { row, col, score })
    })
}

/// Returns the highest-scoring offset.
pub fn best_match(similarity: GridView<'_>) -> Peak {
    cells(similarity)
        .reduce(|best, peak| if peak.score > best.score { peak } else { best })
        .unwrap_or(Peak {
            row: 0,
            col: 0,
            score: f64::NEG_INFINITY,
        })
}

/// Returns up to `k` peaks scoring at least `min_score`, best first.
///
/// With a non-zero `nms_radius`, a peak is dropped when a better one lies
/// within that Chebyshev distance.
pub fn top_matches(
    similarity: GridView<'_>,
    k: usize,
    nms_radius: usize,
    min_score: f64,
) -> Vec<Peak> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<Peak> = cells(similarity)
        .filter(|peak| peak.score >= min_score)
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut kept: Vec<Peak> = Vec::with_capacity(k);
    for peak in ranked {
        if kept.len() == k {
            break;
        }
        let suppressed = nms_radius > 0
            && kept
                .iter()
                .any(|better| better.distance(&peak) <= nms_radius);
        if !suppressed {
            kept.push(peak);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::{best_match, top_matches, Peak};
    use crate::grid::Grid;

    fn map() -> Grid {
        Grid::from_rows(&[
            [0.1, 0.2, 0.3, 0.0],
            [0.2, 0.9, 0.8, 0.0],
            [0.0, 0.1, 0.0, 0.7],
        ])
        .unwrap()
    }

    #[test]
    fn best_match_picks_maximum() {
        let peak = best_match(map().view());
        assert_eq!((peak.row, peak.col, peak.score), (1, 1, 0.9));
    }

    #[test]
    fn best_match_breaks_ties_row_major() {
        let grid = Grid::from_rows(&[[-1.0, 0.4], [0.4, -1.0]]).unwrap();
        let peak = best_match(grid.view());
        assert_eq!((peak.row, peak.col), (0, 1));
    }

    #[test]
    fn top_matches_without_nms_keeps_adjacent_peaks() {
        let peaks = top_matches(map().view(), 3, 0, 0.5);
        let locs: Vec<_> = peaks.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(locs, vec![(1, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn top_matches_with_nms_drops_neighbors() {
        let peaks = top_matches(map().view(), 3, 1, 0.5);
        let locs: Vec<_> = peaks.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(locs, vec![(1, 1), (2, 3)]);
    }

    #[test]
    fn top_matches_ties_keep_row_major_order() {
        let grid = Grid::filled(2, 3, 0.5).unwrap();
        let peaks = top_matches(grid.view(), 4, 0, -1.0);
        let locs: Vec<_> = peaks.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(locs, vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
    }

    #[test]
    fn top_matches_with_zero_k_is_empty() {
        assert!(top_matches(map().view(), 0, 0, -1.0).is_empty());
    }

    #[test]
    fn distance_is_chebyshev() {
        let a = Peak { row: 2, col: 9, score: 0.0 };
        let b = Peak { row: 5, col: 7, score: 0.0 };
        assert_eq!(a.distance(&b), 3);
    }
}
