use std::fmt;

use crate::error::{Result, SelectionError};
use crate::neighborhood::Neighborhood;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;
use crate::sequence::SharedSequenceGenerator;

/// A composite selection operator that samples from the neighborhood of the
/// current individual.
///
/// For each of the `mating_pool_size` picks the operator queries the
/// neighborhood at the shared cursor exactly once, delegates to the inner
/// single-pick selector to choose one candidate from the neighbor subset,
/// and, when `update_current_solution_index` is set, advances the shared
/// cursor afterwards. One neighborhood query per pick is a contract callers
/// may rely on, since topology queries can be expensive.
///
/// The inner selector is any [`SelectionOperator`] configured to return one
/// candidate; decomposition algorithms typically plug in
/// [`RandomSelection`](crate::selection::RandomSelection) or a binary
/// tournament.
///
/// # Examples
///
/// ```
/// use moselect::neighborhood::Neighborhood;
/// use moselect::rng::RandomNumberGenerator;
/// use moselect::selection::{NeighborhoodSelection, RandomSelection, SelectionOperator};
/// use moselect::sequence::CyclicIntegerSequence;
///
/// /// Every candidate neighbors the two adjacent positions.
/// struct Adjacent;
///
/// impl<S: Clone> Neighborhood<S> for Adjacent {
///     fn neighbors(&self, population: &[S], index: usize) -> Vec<S> {
///         let n = population.len();
///         vec![
///             population[(index + n - 1) % n].clone(),
///             population[(index + 1) % n].clone(),
///         ]
///     }
/// }
///
/// let population: Vec<u32> = (0..5).collect();
/// let sequence = CyclicIntegerSequence::shared(5).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = NeighborhoodSelection::new(
///     2,
///     sequence,
///     Box::new(Adjacent),
///     Box::new(RandomSelection::new(1)),
///     false,
/// )
/// .unwrap();
///
/// let pool = selection.select(&population, Some(&mut rng)).unwrap();
/// assert_eq!(pool.len(), 2);
/// ```
pub struct NeighborhoodSelection<S> {
    mating_pool_size: usize,
    sequence: SharedSequenceGenerator,
    neighborhood: Box<dyn Neighborhood<S>>,
    inner: Box<dyn SelectionOperator<S>>,
    update_current_solution_index: bool,
}

impl<S> NeighborhoodSelection<S> {
    /// Creates a new NeighborhoodSelection operator.
    ///
    /// # Arguments
    ///
    /// * `mating_pool_size` - The number of candidates each `select` call
    ///   returns. Must be at least 1.
    /// * `sequence` - The shared cursor over population indices.
    /// * `neighborhood` - The topology query supplying neighbor subsets.
    /// * `inner` - The single-pick selector applied to each neighbor subset.
    /// * `update_current_solution_index` - Whether the cursor advances after
    ///   each pick.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if
    /// `mating_pool_size` is zero.
    pub fn new(
        mating_pool_size: usize,
        sequence: SharedSequenceGenerator,
        neighborhood: Box<dyn Neighborhood<S>>,
        inner: Box<dyn SelectionOperator<S>>,
        update_current_solution_index: bool,
    ) -> Result<Self> {
        if mating_pool_size == 0 {
            return Err(SelectionError::Configuration(
                "Mating pool size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            mating_pool_size,
            sequence,
            neighborhood,
            inner,
            update_current_solution_index,
        })
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }
}

impl<S> fmt::Debug for NeighborhoodSelection<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeighborhoodSelection")
            .field("mating_pool_size", &self.mating_pool_size)
            .field("inner", &self.inner)
            .field(
                "update_current_solution_index",
                &self.update_current_solution_index,
            )
            .finish_non_exhaustive()
    }
}

impl<S> SelectionOperator<S> for NeighborhoodSelection<S>
where
    S: Clone,
{
    fn select(
        &self,
        population: &[S],
        mut rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<S>> {
        if population.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }

        let mut pool = Vec::with_capacity(self.mating_pool_size);
        for _ in 0..self.mating_pool_size {
            let current = self.sequence.borrow().value();
            let neighbors = self.neighborhood.neighbors(population, current);

            let picked = self.inner.select(&neighbors, rng.as_deref_mut())?;
            let winner = picked.into_iter().next().ok_or_else(|| {
                SelectionError::Configuration(
                    "Inner selection operator returned an empty pool".to_string(),
                )
            })?;
            pool.push(winner);

            if self.update_current_solution_index {
                self.sequence.borrow_mut().advance();
            }
        }

        Ok(pool)
    }
}
