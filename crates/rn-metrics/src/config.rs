//! Centrality engine configuration.

use rn_core::{RnError, RnResult};

/// Upper bound on betweenness pivots.
pub const DEFAULT_MAX_PIVOTS: usize = 100;

/// Upper bound on eigenvector power iterations.
pub const DEFAULT_EIGEN_MAX_ITER: usize = 1_000;

/// Per-vertex eigenvector convergence tolerance.
pub const DEFAULT_EIGEN_TOLERANCE: f64 = 1.0e-6;

/// Parameters for [`CentralityEngine`](crate::CentralityEngine).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsConfig {
    /// Betweenness samples `min(max_pivots, max(1, n))` source vertices.
    pub max_pivots:      usize,
    pub eigen_max_iter:  usize,
    /// Converged once the L1 change of an iteration drops below
    /// `n · eigen_tolerance`.
    pub eigen_tolerance: f64,
    /// Seed for pivot sampling.
    pub seed:            u64,
}

impl MetricsConfig {
    /// # Errors
    ///
    /// [`RnError::Config`] for a zero pivot cap, a zero iteration cap, or a
    /// tolerance that is not a finite positive number.
    pub fn validate(&self) -> RnResult<()> {
        if self.max_pivots == 0 {
            return Err(RnError::Config("max_pivots must be at least 1".into()));
        }
        if self.eigen_max_iter == 0 {
            return Err(RnError::Config("eigen_max_iter must be at least 1".into()));
        }
        if !(self.eigen_tolerance.is_finite() && self.eigen_tolerance > 0.0) {
            return Err(RnError::Config(format!(
                "eigen_tolerance must be finite and positive (got {})",
                self.eigen_tolerance
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            max_pivots:      DEFAULT_MAX_PIVOTS,
            eigen_max_iter:  DEFAULT_EIGEN_MAX_ITER,
            eigen_tolerance: DEFAULT_EIGEN_TOLERANCE,
            seed:            0,
        }
    }
}
