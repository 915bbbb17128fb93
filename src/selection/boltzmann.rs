use std::fmt;

use tracing::trace;

use crate::comparator::Comparator;
use crate::error::{Result, SelectionError};
use crate::rng::RandomNumberGenerator;
use crate::selection::sampling;
use crate::selection::selection_operator::SelectionOperator;

/// A selection operator that samples candidates with softmax-over-rank
/// probabilities.
///
/// Candidates are ranked by the comparator (rank 0 = best) and rank `r`
/// receives weight `exp(-r / temperature)`. The temperature controls the
/// selective pressure: as it approaches zero the distribution collapses onto
/// the best candidate, and as it grows large the distribution approaches
/// uniform. The distribution is computed once per call and the mating pool is
/// drawn from it with replacement, so the same candidate may appear several
/// times.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use moselect::rng::RandomNumberGenerator;
/// use moselect::selection::{BoltzmannSelection, SelectionOperator};
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
/// let population: Vec<Candidate> = [0.5, 0.8, 0.3, 0.9, 0.1]
///     .iter()
///     .map(|&objective| Candidate { objective })
///     .collect();
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let selection = BoltzmannSelection::new(3, by_objective).unwrap();
/// let pool = selection.select(&population, Some(&mut rng)).unwrap();
///
/// assert_eq!(pool.len(), 3);
/// ```
pub struct BoltzmannSelection<C> {
    mating_pool_size: usize,
    temperature: f64,
    comparator: C,
}

impl<C> BoltzmannSelection<C> {
    /// Creates a new BoltzmannSelection operator with the default temperature
    /// of 1.0.
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
            temperature: 1.0,
            comparator,
        })
    }

    /// Replaces the temperature.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if `temperature` is
    /// not a positive finite number.
    pub fn with_temperature(mut self, temperature: f64) -> Result<Self> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(SelectionError::Configuration(
                "Temperature must be a positive finite number".to_string(),
            ));
        }

        self.temperature = temperature;
        Ok(self)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }
}

impl<C> fmt::Debug for BoltzmannSelection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoltzmannSelection")
            .field("mating_pool_size", &self.mating_pool_size)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl<S, C> SelectionOperator<S> for BoltzmannSelection<C>
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
                "Boltzmann selection requires a random number generator".to_string(),
            )
        })?;

        let ranked = sampling::ranked_indices(population, &self.comparator);

        // Rank 0 has weight 1.0 and all exponents are non-positive, so the
        // weights can never overflow.
        let weights: Vec<f64> = (0..population.len())
            .map(|rank| (-(rank as f64) / self.temperature).exp())
            .collect();
        let distribution = sampling::cumulative_distribution(&weights);

        let mut pool = Vec::with_capacity(self.mating_pool_size);
        for _ in 0..self.mating_pool_size {
            let rank = sampling::draw_from_cumulative(&distribution, rng.gen_probability());
            pool.push(population[ranked[rank]].clone());
        }

        trace!(
            pool = pool.len(),
            population = population.len(),
            temperature = self.temperature,
            "boltzmann selection complete"
        );

        Ok(pool)
    }
}
