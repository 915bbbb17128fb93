use std::fmt;

use crate::comparator::Comparator;
use crate::error::{Result, SelectionError};
use crate::rng::RandomNumberGenerator;
use crate::selection::sampling;
use crate::selection::selection_operator::SelectionOperator;

/// A selection operator implementing stochastic universal sampling over
/// rank-based weights.
///
/// Like [`LinearRankingSelection`](crate::selection::LinearRankingSelection)
/// it assigns Baker linear-ranking probabilities to comparator ranks, but
/// instead of `k` independent draws it spends a single random offset `r` in
/// `[0, 1/k)` and places `k` equally spaced pointers at `r`, `r + 1/k`,
/// `r + 2/k`, ... over the cumulative distribution. Each pointer selects the
/// candidate whose cumulative interval contains it, in one pass.
///
/// The equally spaced pointers make the number of copies of each candidate
/// deviate from its expectation by at most one, which gives a much lower
/// selection variance than independent draws. A candidate whose interval is
/// wider than `1/k` can still be hit by several pointers.
pub struct StochasticUniversalSampling<C> {
    mating_pool_size: usize,
    pressure: f64,
    comparator: C,
}

impl<C> StochasticUniversalSampling<C> {
    /// Creates a new StochasticUniversalSampling operator with the default
    /// selective pressure of 1.5.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if `mating_pool_size`
    /// is zero.
    pub fn new(mating_pool_size: usize, comparator: C) -> Result<Self> {
        if mating_pool_size == 0 {
            return Err(SelectionError::Configuration(
                "Mating pool size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            mating_pool_size,
            pressure: 1.5,
            comparator,
        })
    }

    /// Replaces the selective pressure.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if `pressure` is
    /// outside `[1.0, 2.0]`.
    pub fn with_pressure(mut self, pressure: f64) -> Result<Self> {
        if !(1.0..=2.0).contains(&pressure) {
            return Err(SelectionError::Configuration(
                "Selection pressure must be in the range [1.0, 2.0]".to_string(),
            ));
        }

        self.pressure = pressure;
        Ok(self)
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }
}

impl<C> fmt::Debug for StochasticUniversalSampling<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StochasticUniversalSampling")
            .field("mating_pool_size", &self.mating_pool_size)
            .field("pressure", &self.pressure)
            .finish_non_exhaustive()
    }
}

impl<S, C> SelectionOperator<S> for StochasticUniversalSampling<C>
where
    S: Clone,
    C: Comparator<S>,
{
    fn select(
        &self,
        population: &[S],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<S>> {
        if population.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }

        let rng = rng.ok_or_else(|| {
            SelectionError::Configuration(
                "Stochastic universal sampling requires a random number generator".to_string(),
            )
        })?;

        let ranked = sampling::ranked_indices(population, &self.comparator);
        let weights = sampling::linear_ranking_probabilities(population.len(), self.pressure);
        let distribution = sampling::cumulative_distribution(&weights);

        let step = 1.0 / self.mating_pool_size as f64;
        let offset = rng.gen_probability() * step;

        // One pass: the pointers are sorted by construction, so the interval
        // cursor only ever moves forward. The last pointer is
        // offset + (k - 1)/k < 1.0 and the distribution ends at exactly 1.0,
        // so the cursor stays in bounds.
        let mut pool = Vec::with_capacity(self.mating_pool_size);
        let mut interval = 0;
        for i in 0..self.mating_pool_size {
            let pointer = offset + i as f64 * step;
            while distribution[interval] < pointer {
                interval += 1;
            }
            pool.push(population[ranked[interval]].clone());
        }

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[derive(Clone, Debug, PartialEq)]
    struct TestCandidate {
        objective: f64,
    }

    fn by_objective(a: &TestCandidate, b: &TestCandidate) -> Ordering {
        a.objective.partial_cmp(&b.objective).unwrap_or(Ordering::Equal)
    }

    fn population(objectives: &[f64]) -> Vec<TestCandidate> {
        objectives
            .iter()
            .map(|&objective| TestCandidate { objective })
            .collect()
    }

    #[test]
    fn test_pool_has_configured_size() {
        let population = population(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = StochasticUniversalSampling::new(5, by_objective).unwrap();
        let pool = selection.select(&population, Some(&mut rng)).unwrap();

        assert_eq!(pool.len(), 5);
        for candidate in &pool {
            assert!(population.contains(candidate));
        }
    }

    #[test]
    fn test_oversized_pool_resamples_with_duplicates() {
        let population = population(&[0.5, 0.8]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = StochasticUniversalSampling::new(8, by_objective).unwrap();
        let pool = selection.select(&population, Some(&mut rng)).unwrap();

        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn test_wide_interval_can_be_hit_twice() {
        // With pressure 2.0 on two candidates the best holds the entire
        // interval except a zero-width tail, so both pointers land on it.
        let population = population(&[1.0, 2.0]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = StochasticUniversalSampling::new(2, by_objective)
            .unwrap()
            .with_pressure(2.0)
            .unwrap();
        let pool = selection.select(&population, Some(&mut rng)).unwrap();

        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|c| c.objective == 1.0));
    }

    #[test]
    fn test_top_ranks_collect_more_picks_than_bottom_ranks() {
        let population = population(
            &(0..100).map(|i| i as f64).collect::<Vec<_>>(),
        );
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = StochasticUniversalSampling::new(5, by_objective).unwrap();

        let mut top = 0usize;
        let mut bottom = 0usize;
        for _ in 0..1000 {
            let pool = selection.select(&population, Some(&mut rng)).unwrap();
            for candidate in pool {
                if candidate.objective < 10.0 {
                    top += 1;
                } else if candidate.objective >= 90.0 {
                    bottom += 1;
                }
            }
        }

        assert!(top > bottom, "top={top} bottom={bottom}");
    }

    #[test]
    fn test_input_population_is_untouched() {
        let population = population(&[0.5, 0.8, 0.3]);
        let snapshot = population.clone();
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = StochasticUniversalSampling::new(4, by_objective).unwrap();
        selection.select(&population, Some(&mut rng)).unwrap();

        assert_eq!(population, snapshot);
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let population: Vec<TestCandidate> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = StochasticUniversalSampling::new(3, by_objective).unwrap();
        let result = selection.select(&population, Some(&mut rng));

        assert!(matches!(result, Err(SelectionError::EmptyPopulation)));
    }

    #[test]
    fn test_missing_rng_is_rejected() {
        let population = population(&[0.5, 0.8]);

        let selection = StochasticUniversalSampling::new(3, by_objective).unwrap();
        assert!(selection.select(&population, None).is_err());
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        assert!(StochasticUniversalSampling::new(0, by_objective).is_err());

        let result = StochasticUniversalSampling::new(3, by_objective)
            .unwrap()
            .with_pressure(2.1);
        assert!(result.is_err());
    }
}
