use std::cell::Cell;
use std::fmt;

use tracing::trace;

use crate::error::{Result, SelectionError};
use crate::neighborhood::Neighborhood;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;
use crate::sequence::SharedSequenceGenerator;

/// The source a pick was drawn from, recorded after each probabilistic draw.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborType {
    /// The pick came from the whole population.
    Population,
    /// The pick came from the neighbor subset of the current individual.
    Neighbor,
}

/// A composite selection operator that mixes neighborhood and whole-population
/// sampling.
///
/// Each pick flips a Bernoulli coin: with `neighborhood_selection_probability`
/// the candidate is drawn uniformly from the neighbor subset at the shared
/// cursor, otherwise uniformly from the whole population. Probability 1.0
/// always uses the neighbor subset, 0.0 always uses the population, and
/// intermediate values exercise both paths over repeated calls. The source of
/// the most recent draw is recorded and can be queried through
/// [`last_neighbor_type`](PopulationAndNeighborhoodSelection::last_neighbor_type).
///
/// With `select_current_solution` set, the candidate at the cursor is
/// unconditionally the first pick and the probabilistic draw fills the
/// remaining slots.
///
/// The operator reads the shared cursor and never advances it.
pub struct PopulationAndNeighborhoodSelection<S> {
    mating_pool_size: usize,
    neighborhood_selection_probability: f64,
    select_current_solution: bool,
    sequence: SharedSequenceGenerator,
    neighborhood: Box<dyn Neighborhood<S>>,
    last_neighbor_type: Cell<Option<NeighborType>>,
}

impl<S> PopulationAndNeighborhoodSelection<S> {
    /// Creates a new PopulationAndNeighborhoodSelection operator.
    ///
    /// # Arguments
    ///
    /// * `mating_pool_size` - The number of candidates each `select` call
    ///   returns. Must be at least 1.
    /// * `neighborhood_selection_probability` - Per-pick probability of
    ///   drawing from the neighbor subset. Must lie in `[0.0, 1.0]`.
    /// * `select_current_solution` - Whether the candidate at the cursor is
    ///   unconditionally the first pick.
    /// * `sequence` - The shared cursor over population indices.
    /// * `neighborhood` - The topology query supplying neighbor subsets.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if
    /// `mating_pool_size` is zero or the probability is not in `[0.0, 1.0]`.
    pub fn new(
        mating_pool_size: usize,
        neighborhood_selection_probability: f64,
        select_current_solution: bool,
        sequence: SharedSequenceGenerator,
        neighborhood: Box<dyn Neighborhood<S>>,
    ) -> Result<Self> {
        if mating_pool_size == 0 {
            return Err(SelectionError::Configuration(
                "Mating pool size must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&neighborhood_selection_probability) {
            return Err(SelectionError::Configuration(
                "Neighborhood selection probability must be in the range [0.0, 1.0]".to_string(),
            ));
        }

        Ok(Self {
            mating_pool_size,
            neighborhood_selection_probability,
            select_current_solution,
            sequence,
            neighborhood,
            last_neighbor_type: Cell::new(None),
        })
    }

    /// The source of the most recent probabilistic draw, or `None` before
    /// the first one.
    pub fn last_neighbor_type(&self) -> Option<NeighborType> {
        self.last_neighbor_type.get()
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }
}

impl<S> fmt::Debug for PopulationAndNeighborhoodSelection<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopulationAndNeighborhoodSelection")
            .field("mating_pool_size", &self.mating_pool_size)
            .field(
                "neighborhood_selection_probability",
                &self.neighborhood_selection_probability,
            )
            .field("select_current_solution", &self.select_current_solution)
            .field("last_neighbor_type", &self.last_neighbor_type.get())
            .finish_non_exhaustive()
    }
}

impl<S> SelectionOperator<S> for PopulationAndNeighborhoodSelection<S>
where
    S: Clone,
{
    fn select(
        &self,
        population: &[S],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<S>> {
        let n = population.len();
        if n == 0 {
            return Err(SelectionError::EmptyPopulation);
        }

        let rng = rng.ok_or_else(|| {
            SelectionError::Configuration(
                "Population-and-neighborhood selection requires a random number generator"
                    .to_string(),
            )
        })?;

        let current = self.sequence.borrow().value();
        if current >= n {
            return Err(SelectionError::Configuration(format!(
                "Sequence cursor ({}) is out of range for a population of {}",
                current, n
            )));
        }

        let mut pool = Vec::with_capacity(self.mating_pool_size);
        if self.select_current_solution {
            pool.push(population[current].clone());
        }

        while pool.len() < self.mating_pool_size {
            if rng.gen_probability() < self.neighborhood_selection_probability {
                let neighbors = self.neighborhood.neighbors(population, current);
                if neighbors.is_empty() {
                    return Err(SelectionError::Configuration(
                        "Neighborhood query returned no candidates".to_string(),
                    ));
                }

                pool.push(neighbors[rng.gen_index(neighbors.len())].clone());
                self.last_neighbor_type.set(Some(NeighborType::Neighbor));
            } else {
                pool.push(population[rng.gen_index(n)].clone());
                self.last_neighbor_type.set(Some(NeighborType::Population));
            }
        }

        trace!(
            pool = pool.len(),
            source = ?self.last_neighbor_type.get(),
            "population-and-neighborhood selection complete"
        );

        Ok(pool)
    }
}
