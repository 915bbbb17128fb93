//! # SelectionOperator Trait
//!
//! Every strategy in the catalogue exposes the same capability: turn a
//! candidate population into a mating pool. All strategy-specific
//! configuration (mating-pool size, temperature, tournament size,
//! probabilities, flags, collaborators) is fixed at construction, so a
//! `select` call only needs the population and a random source.

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for mating-pool selection operators.
///
/// Implementations read the population but never mutate, reorder, or retain
/// it; the returned pool holds clones of input candidates. Deterministic
/// strategies accept `None` for the random source, while stochastic
/// strategies fail with a configuration error when it is missing.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use moselect::selection::{SelectionOperator, TruncationSelection};
///
/// #[derive(Clone, Debug, PartialEq)]
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
pub trait SelectionOperator<S>: Debug {
    /// Selects a mating pool from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population of candidates.
    /// * `rng` - An optional random number generator. Strategies that use
    ///   randomness return an error when `rng` is `None`.
    ///
    /// # Returns
    ///
    /// The selected mating pool. Its length equals the operator's configured
    /// mating-pool size unless the strategy documents a deviation.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty (for strategies that
    /// require candidates), too small for the strategy's structural minimum,
    /// or if randomness is required but `rng` is `None`.
    fn select(
        &self,
        population: &[S],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<S>>;
}
