//! Deterministic sampling RNG.
//!
//! Approximate betweenness picks a random subset of source vertices.  A
//! fixed seed keeps metric output byte-identical across runs on the same
//! input, which downstream caching and diffing rely on.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Seeded RNG used for pivot selection.
pub struct SampleRng(SmallRng);

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// `k` distinct indices from `0..n`, sorted ascending.
    ///
    /// When `k >= n` every index is returned and no randomness is consumed.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        if k >= n {
            return (0..n).collect();
        }
        let mut picked = rand::seq::index::sample(&mut self.0, n, k).into_vec();
        picked.sort_unstable();
        picked
    }
}
