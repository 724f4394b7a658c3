//! Low-level building blocks for custom search pipelines.
//!
//! These types expose the precomputed pattern plan and the sweep kernels.
//! Most users should prefer the top-level `similarity_matrix` and
//! `find_matches` functions.

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::ParallelKernel;
pub use crate::kernel::scalar::ScalarKernel;
pub use crate::kernel::Kernel;
pub use crate::pattern::PatternPlan;
