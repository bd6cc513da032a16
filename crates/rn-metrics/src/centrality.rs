//! Centrality algorithms over a [`MetricGraph`].
//!
//! All functions return one value per vertex, in vertex index order.  The
//! iterative ones return `None` when they cannot produce a trustworthy
//! answer; the engine turns that into an all-zero column.

use crate::graph::MetricGraph;

// ── Degree ────────────────────────────────────────────────────────────────────

/// In-degree divided by `n − 1`; all zeros when `n ≤ 1`.
pub fn in_degree_centrality(graph: &MetricGraph) -> Vec<f64> {
    normalised_degree(graph, MetricGraph::in_degree)
}

/// Out-degree divided by `n − 1`; all zeros when `n ≤ 1`.
pub fn out_degree_centrality(graph: &MetricGraph) -> Vec<f64> {
    normalised_degree(graph, MetricGraph::out_degree)
}

fn normalised_degree(graph: &MetricGraph, degree: fn(&MetricGraph, usize) -> usize) -> Vec<f64> {
    let n = graph.vertex_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    (0..n).map(|v| degree(graph, v) as f64 * scale).collect()
}

// ── Eigenvector ───────────────────────────────────────────────────────────────

/// Eigenvector centrality by power iteration on `A + I`, following in-arcs.
///
/// Starts from the uniform vector, rescales to unit Euclidean norm after
/// every step and stops once the L1 change is below `n · tolerance`.
/// Returns `None` if `max_iter` steps pass without convergence or the
/// vector stops being finite.
pub fn eigenvector_centrality(graph: &MetricGraph, max_iter: usize, tolerance: f64) -> Option<Vec<f64>> {
    let n = graph.vertex_count();
    if n == 0 {
        return Some(Vec::new());
    }
    let successors = graph.successor_lists();
    let mut x = vec![1.0 / n as f64; n];

    for _ in 0..max_iter {
        let last = x.clone();
        for (v, succ) in successors.iter().enumerate() {
            for &w in succ {
                x[w] += last[v];
            }
        }

        let norm = x.iter().map(|xi| xi * xi).sum::<f64>().sqrt();
        if !norm.is_finite() {
            return None;
        }
        if norm > 0.0 {
            x.iter_mut().for_each(|xi| *xi /= norm);
        }

        let change: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if change < n as f64 * tolerance {
            return Some(x);
        }
    }
    None
}

// ── Betweenness ───────────────────────────────────────────────────────────────

/// Approximate betweenness from the given source `pivots` (Brandes, BFS).
///
/// Path endpoints are excluded.  For `n > 2` values are scaled by
/// `1 / ((n − 1)(n − 2))` and then by `n / k` for `k` pivots, which makes
/// the full pivot set exact.  Returns `None` if any value is not finite.
pub fn betweenness_centrality(graph: &MetricGraph, pivots: &[usize]) -> Option<Vec<f64>> {
    let n = graph.vertex_count();
    if n == 0 {
        return Some(Vec::new());
    }
    let successors = graph.successor_lists();
    let mut total = accumulate(&successors, pivots);

    if n > 2 && !pivots.is_empty() {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64) * (n as f64 / pivots.len() as f64);
        total.iter_mut().for_each(|b| *b *= scale);
    }
    total.iter().all(|b| b.is_finite()).then_some(total)
}

#[cfg(not(feature = "parallel"))]
fn accumulate(successors: &[Vec<usize>], pivots: &[usize]) -> Vec<f64> {
    let mut total = vec![0.0; successors.len()];
    let mut scratch = Scratch::new(successors.len());
    for &s in pivots {
        scratch.single_source(successors, s);
        scratch.add_dependencies(s, &mut total);
    }
    total
}

/// Pivot contributions are computed in parallel, then summed in pivot order
/// so the result matches the sequential build bit for bit.
#[cfg(feature = "parallel")]
fn accumulate(successors: &[Vec<usize>], pivots: &[usize]) -> Vec<f64> {
    use rayon::prelude::*;

    let n = successors.len();
    let per_pivot: Vec<Vec<f64>> = pivots
        .par_iter()
        .map_init(
            || Scratch::new(n),
            |scratch, &s| {
                let mut contribution = vec![0.0; n];
                scratch.single_source(successors, s);
                scratch.add_dependencies(s, &mut contribution);
                contribution
            },
        )
        .collect();

    let mut total = vec![0.0; n];
    for contribution in per_pivot {
        for (t, c) in total.iter_mut().zip(contribution) {
            *t += c;
        }
    }
    total
}

/// Reusable per-source BFS state.
struct Scratch {
    /// Vertices in non-decreasing distance order.
    order: Vec<usize>,
    preds: Vec<Vec<usize>>,
    sigma: Vec<f64>,
    dist:  Vec<Option<usize>>,
    delta: Vec<f64>,
    queue: std::collections::VecDeque<usize>,
}

impl Scratch {
    fn new(n: usize) -> Self {
        Self {
            order: Vec::with_capacity(n),
            preds: vec![Vec::new(); n],
            sigma: vec![0.0; n],
            dist:  vec![None; n],
            delta: vec![0.0; n],
            queue: std::collections::VecDeque::with_capacity(n),
        }
    }

    fn reset(&mut self) {
        for &v in &self.order {
            self.preds[v].clear();
            self.sigma[v] = 0.0;
            self.dist[v] = None;
            self.delta[v] = 0.0;
        }
        self.order.clear();
        self.queue.clear();
    }

    /// Shortest-path counts and predecessor lists from `s`.
    fn single_source(&mut self, successors: &[Vec<usize>], s: usize) {
        self.reset();
        self.sigma[s] = 1.0;
        self.dist[s] = Some(0);
        self.queue.push_back(s);

        while let Some(v) = self.queue.pop_front() {
            self.order.push(v);
            let next = self.dist[v].map_or(0, |d| d + 1);
            let sigma_v = self.sigma[v];
            for &w in &successors[v] {
                if self.dist[w].is_none() {
                    self.dist[w] = Some(next);
                    self.queue.push_back(w);
                }
                if self.dist[w] == Some(next) {
                    self.sigma[w] += sigma_v;
                    self.preds[w].push(v);
                }
            }
        }
    }

    /// Back-propagate dependencies and add them to `total`, skipping `s`.
    fn add_dependencies(&mut self, s: usize, total: &mut [f64]) {
        for &w in self.order.iter().rev() {
            let coeff = (1.0 + self.delta[w]) / self.sigma[w];
            for &v in &self.preds[w] {
                self.delta[v] += self.sigma[v] * coeff;
            }
            if w != s {
                total[w] += self.delta[w];
            }
        }
    }
}
