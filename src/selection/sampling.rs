//! Shared sampling primitives for the rank-biased strategies: stable rank
//! ordering, rank-weight formulas, and cumulative-distribution draws.

use crate::comparator::Comparator;

/// Indices of `population` sorted ascending by the comparator.
///
/// The sort is stable, so candidates that compare equal keep their relative
/// input order and the earlier-positioned one receives the better rank.
pub(crate) fn ranked_indices<S, C>(population: &[S], comparator: &C) -> Vec<usize>
where
    C: Comparator<S>,
{
    let mut indices: Vec<usize> = (0..population.len()).collect();
    indices.sort_by(|&a, &b| comparator.compare(&population[a], &population[b]));
    indices
}

/// Baker's linear-ranking probabilities for `n` ranks.
///
/// For zero-based rank `r` (0 = best) and selective pressure `s` in
/// `[1.0, 2.0]`:
///
/// p(r) = (2 - s)/n + 2(s - 1)(n - 1 - r) / (n(n - 1))
///
/// The probabilities are non-negative, sum to one, and decrease linearly
/// from rank 0 to the worst rank.
pub(crate) fn linear_ranking_probabilities(n: usize, pressure: f64) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }

    let nf = n as f64;
    (0..n)
        .map(|r| {
            (2.0 - pressure) / nf
                + 2.0 * (pressure - 1.0) * ((n - 1 - r) as f64) / (nf * (nf - 1.0))
        })
        .collect()
}

/// Cumulative distribution over the given weights.
///
/// Weights are normalized by their sum; the final entry is forced to exactly
/// 1.0 so floating-point drift can never leave a draw without an interval.
pub(crate) fn cumulative_distribution(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();

    let mut cumulative = 0.0;
    let mut distribution = Vec::with_capacity(weights.len());
    for &weight in weights {
        cumulative += weight / total;
        distribution.push(cumulative);
    }

    if let Some(last) = distribution.last_mut() {
        *last = 1.0;
    }

    distribution
}

/// Returns the index of the interval of `distribution` that contains `r`.
///
/// `distribution` must be a cumulative distribution ending at 1.0 and `r`
/// must lie in `[0, 1)`.
pub(crate) fn draw_from_cumulative(distribution: &[f64], r: f64) -> usize {
    for (i, &bound) in distribution.iter().enumerate() {
        if r <= bound {
            return i;
        }
    }

    distribution.len() - 1
}
