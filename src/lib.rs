//! simsearch locates a gray-scale pattern inside a larger gray-scale grid
//! using normalized cross-correlation (NCC).
//!
//! The pipeline is four pure functions: [`mean`], [`window_mean`], [`ncc`] and
//! [`similarity_matrix`]. Grids are rectangular, non-empty and finite by
//! construction, and every precondition violation is reported as a
//! [`SimSearchError`]. The optional `rayon` feature parallelizes the sweep and
//! the optional `tracing` feature emits spans around it.
//!
//! Extents are always given rows first, columns second.

pub mod grid;
pub mod kernel;
pub mod lowlevel;
mod pattern;
pub mod search;
mod trace;
pub mod util;

pub use grid::stats::{mean, window_mean};
pub use grid::{Grid, GridView};
pub use kernel::UNDEFINED_SCORE;
pub use util::{SimSearchError, SimSearchResult};

pub use search::{
    best_match, correlation_at, find_matches, ncc, similarity_matrix, similarity_matrix_with,
    top_matches, Peak, SearchConfig,
};
