use std::fmt;

use crate::comparator::Comparator;
use crate::error::{Result, SelectionError};
use crate::rng::RandomNumberGenerator;
use crate::selection::sampling;
use crate::selection::selection_operator::SelectionOperator;

/// A selection operator that samples candidates with linearly decreasing
/// rank probabilities.
///
/// Candidates are ranked by the comparator (rank 0 = best) and assigned
/// probabilities with Baker's linear-ranking formula, controlled by a
/// selective pressure in `[1.0, 2.0]`: at 1.0 every candidate is equally
/// likely, at 2.0 the worst candidate's probability reaches zero. The
/// distribution is computed once per call and the mating pool is drawn from
/// it with replacement.
///
/// Ranking on position rather than raw fitness keeps the pressure stable
/// when a few candidates dominate the objective scale.
pub struct LinearRankingSelection<C> {
    mating_pool_size: usize,
    /// Higher values increase selection pressure.
    pressure: f64,
    comparator: C,
}

impl<C> LinearRankingSelection<C> {
    /// Creates a new LinearRankingSelection operator with the default
    /// selective pressure of 1.5.
    ///
    /// # Arguments
    ///
    /// * `mating_pool_size` - The number of candidates each `select` call
    ///   returns. Must be at least 1.
    /// * `comparator` - The ordering over candidates; ascending, best first.
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

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }
}

impl<C> fmt::Debug for LinearRankingSelection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearRankingSelection")
            .field("mating_pool_size", &self.mating_pool_size)
            .field("pressure", &self.pressure)
            .finish_non_exhaustive()
    }
}

impl<S, C> SelectionOperator<S> for LinearRankingSelection<C>
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
                "Linear ranking selection requires a random number generator".to_string(),
            )
        })?;

        let ranked = sampling::ranked_indices(population, &self.comparator);
        let weights = sampling::linear_ranking_probabilities(population.len(), self.pressure);
        let distribution = sampling::cumulative_distribution(&weights);

        let mut pool = Vec::with_capacity(self.mating_pool_size);
        for _ in 0..self.mating_pool_size {
            let rank = sampling::draw_from_cumulative(&distribution, rng.gen_probability());
            pool.push(population[ranked[rank]].clone());
        }

        Ok(pool)
    }
}
