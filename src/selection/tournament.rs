use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::comparator::Comparator;
use crate::error::{Result, SelectionError};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;

/// A selection operator that fills the mating pool through repeated
/// tournaments.
///
/// Each of the `mating_pool_size` picks draws `tournament_size` distinct
/// candidates uniformly from the population and keeps the comparator-best of
/// them; ties resolve toward the earlier population position. Tournament
/// selection balances exploration and exploitation through the tournament
/// size:
///
/// - size 1 degenerates to uniform random choice,
/// - size 2 is the classic binary tournament,
/// - size equal to the population makes every tournament contain the whole
///   population, so the single best candidate wins every pick.
///
/// The probability that the globally best candidate wins a tournament is
/// non-decreasing in the tournament size.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use moselect::rng::RandomNumberGenerator;
/// use moselect::selection::{SelectionOperator, TournamentSelection};
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
/// let selection = TournamentSelection::new(3, 2, by_objective).unwrap();
/// let pool = selection.select(&population, Some(&mut rng)).unwrap();
///
/// assert_eq!(pool.len(), 3);
/// ```
pub struct TournamentSelection<C> {
    mating_pool_size: usize,
    tournament_size: usize,
    comparator: C,
}

impl<C> TournamentSelection<C> {
    /// Creates a new TournamentSelection operator.
    ///
    /// # Arguments
    ///
    /// * `mating_pool_size` - The number of candidates each `select` call
    ///   returns. Must be at least 1.
    /// * `tournament_size` - The number of distinct candidates that
    ///   participate in each tournament. Must be at least 1.
    /// * `comparator` - The ordering over candidates; ascending, best first.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if either size is
    /// zero.
    pub fn new(mating_pool_size: usize, tournament_size: usize, comparator: C) -> Result<Self> {
        if mating_pool_size == 0 {
            return Err(SelectionError::Configuration(
                "Mating pool size must be at least 1".to_string(),
            ));
        }

        if tournament_size == 0 {
            return Err(SelectionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            mating_pool_size,
            tournament_size,
            comparator,
        })
    }

    /// Creates a binary tournament (tournament size 2).
    pub fn binary(mating_pool_size: usize, comparator: C) -> Result<Self> {
        Self::new(mating_pool_size, 2, comparator)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }

    /// Runs a single tournament over distinct participant indices and
    /// returns the index of the winner.
    fn run_tournament<S>(&self, population: &[S], rng: &mut RandomNumberGenerator) -> usize
    where
        C: Comparator<S>,
    {
        let mut participants = rng.sample_distinct(population.len(), self.tournament_size);
        // Scanning in index order makes ties resolve toward the
        // earlier-positioned candidate.
        participants.sort_unstable();

        let mut winner = participants[0];
        for &idx in &participants[1..] {
            if self
                .comparator
                .compare(&population[idx], &population[winner])
                == Ordering::Less
            {
                winner = idx;
            }
        }

        winner
    }
}

impl<C> fmt::Debug for TournamentSelection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TournamentSelection")
            .field("mating_pool_size", &self.mating_pool_size)
            .field("tournament_size", &self.tournament_size)
            .finish_non_exhaustive()
    }
}

impl<S, C> SelectionOperator<S> for TournamentSelection<C>
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

        if self.tournament_size > population.len() {
            return Err(SelectionError::InsufficientPopulation {
                required: self.tournament_size,
                actual: population.len(),
            });
        }

        let rng = rng.ok_or_else(|| {
            SelectionError::Configuration(
                "Tournament selection requires a random number generator".to_string(),
            )
        })?;

        let mut pool = Vec::with_capacity(self.mating_pool_size);
        for _ in 0..self.mating_pool_size {
            let winner = self.run_tournament(population, rng);
            pool.push(population[winner].clone());
        }

        trace!(
            pool = pool.len(),
            population = population.len(),
            tournament_size = self.tournament_size,
            "tournament selection complete"
        );

        Ok(pool)
    }
}
