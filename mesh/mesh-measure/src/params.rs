//! Parameters for mesh analysis.

/// Parameters for [`analyze_with`](crate::analyze_with).
///
/// # Example
///
/// ```
/// use mesh_measure::MeasureParams;
///
/// let params = MeasureParams::default();
/// assert_eq!(params.parallel_threshold, 50_000);
///
/// // Always run on the calling thread
/// let params = MeasureParams::sequential();
/// assert_eq!(params.parallel_threshold, usize::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureParams {
    /// Triangle count at or above which the analysis is split across the
    /// rayon thread pool.
    pub parallel_threshold: usize,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            parallel_threshold: 50_000,
        }
    }
}

impl MeasureParams {
    /// Params that never use the thread pool.
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Set the triangle count at which analysis goes parallel.
    #[must_use]
    pub const fn parallel_threshold(mut self, triangles: usize) -> Self {
        self.parallel_threshold = triangles;
        self
    }

    /// Whether a mesh of `triangle_count` triangles takes the parallel path.
    #[must_use]
    pub const fn is_parallel(&self, triangle_count: usize) -> bool {
        triangle_count >= self.parallel_threshold
    }
}
