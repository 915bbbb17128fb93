use std::fmt;

use crate::comparator::Comparator;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::sampling;
use crate::selection::selection_operator::SelectionOperator;

/// A selection operator that deterministically keeps the best candidates.
///
/// The population is stable-sorted ascending by the comparator and the first
/// `min(mating_pool_size, population_len)` candidates are returned, best
/// first. No randomness is involved; the `rng` argument is ignored.
///
/// Unlike the stochastic strategies, truncation never pads an oversized
/// request by re-sampling: a pool size exceeding the population yields only
/// the population's size, a pool size of zero yields an empty pool, and an
/// empty population degrades to an empty pool instead of an error.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use moselect::selection::{SelectionOperator, TruncationSelection};
///
/// #[derive(Clone, Debug)]
/// struct Candidate {
///     objective: f64,
/// }
///
/// let by_objective = |a: &Candidate, b: &Candidate| {
///     a.objective.partial_cmp(&b.objective).unwrap_or(Ordering::Equal)
/// };
///
/// let population: Vec<Candidate> = [5.0, 2.0, 4.0, 1.0, 3.0]
///     .iter()
///     .map(|&objective| Candidate { objective })
///     .collect();
///
/// let selection = TruncationSelection::new(3, by_objective);
/// let pool = selection.select(&population, None).unwrap();
///
/// let objectives: Vec<f64> = pool.iter().map(|c| c.objective).collect();
/// assert_eq!(objectives, vec![1.0, 2.0, 3.0]);
/// ```
pub struct TruncationSelection<C> {
    mating_pool_size: usize,
    comparator: C,
}

impl<C> TruncationSelection<C> {
    /// Creates a new TruncationSelection operator.
    ///
    /// A `mating_pool_size` of zero is legal and yields an empty pool on
    /// every call.
    pub fn new(mating_pool_size: usize, comparator: C) -> Self {
        Self {
            mating_pool_size,
            comparator,
        }
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }
}

impl<C> fmt::Debug for TruncationSelection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TruncationSelection")
            .field("mating_pool_size", &self.mating_pool_size)
            .finish_non_exhaustive()
    }
}

impl<S, C> SelectionOperator<S> for TruncationSelection<C>
where
    S: Clone,
    C: Comparator<S>,
{
    fn select(
        &self,
        population: &[S],
        _rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<S>> {
        let ranked = sampling::ranked_indices(population, &self.comparator);

        Ok(ranked
            .into_iter()
            .take(self.mating_pool_size)
            .map(|idx| population[idx].clone())
            .collect())
    }
}
