use crate::error::{Result, SelectionError};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;
use crate::sequence::SharedSequenceGenerator;

/// A selection operator that draws differential-evolution parent sets.
///
/// The "current individual" index is read from a shared
/// [`SequenceGenerator`](crate::sequence::SequenceGenerator) owned by the
/// algorithm; this operator only reads the cursor and never advances it.
/// Each round produces `number_of_parents` distinct candidates:
///
/// - with `take_current_individual_as_parent` set, the candidate at the
///   cursor comes first and the remaining slots are drawn without repetition
///   from the rest of the population;
/// - otherwise all slots are drawn without repetition from the whole
///   population.
///
/// A mating pool larger than one parent set is filled by repeating the whole
/// draw independently: a pool of 6 with 3 parents per round performs two
/// rounds and concatenates them, so the pool size must be an exact multiple
/// of the parent count.
#[derive(Debug)]
pub struct DifferentialEvolutionSelection {
    mating_pool_size: usize,
    number_of_parents: usize,
    take_current_individual_as_parent: bool,
    sequence: SharedSequenceGenerator,
}

impl DifferentialEvolutionSelection {
    /// Creates a new DifferentialEvolutionSelection operator.
    ///
    /// # Arguments
    ///
    /// * `mating_pool_size` - Total number of candidates per `select` call;
    ///   must be a positive multiple of `number_of_parents`.
    /// * `number_of_parents` - Distinct parents drawn per round. Must be at
    ///   least 1.
    /// * `take_current_individual_as_parent` - Whether the candidate at the
    ///   shared cursor is always the first parent of every round.
    /// * `sequence` - The shared cursor over population indices.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if
    /// `number_of_parents` is zero or `mating_pool_size` is not a positive
    /// multiple of it.
    pub fn new(
        mating_pool_size: usize,
        number_of_parents: usize,
        take_current_individual_as_parent: bool,
        sequence: SharedSequenceGenerator,
    ) -> Result<Self> {
        if number_of_parents == 0 {
            return Err(SelectionError::Configuration(
                "Number of parents must be at least 1".to_string(),
            ));
        }

        if mating_pool_size == 0 || mating_pool_size % number_of_parents != 0 {
            return Err(SelectionError::Configuration(format!(
                "Mating pool size ({}) must be a positive multiple of the number of parents ({})",
                mating_pool_size, number_of_parents
            )));
        }

        Ok(Self {
            mating_pool_size,
            number_of_parents,
            take_current_individual_as_parent,
            sequence,
        })
    }

    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }

    pub fn number_of_parents(&self) -> usize {
        self.number_of_parents
    }
}

impl<S> SelectionOperator<S> for DifferentialEvolutionSelection
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

        let required = self.number_of_parents.max(3);
        if n < required {
            return Err(SelectionError::InsufficientPopulation {
                required,
                actual: n,
            });
        }

        let rng = rng.ok_or_else(|| {
            SelectionError::Configuration(
                "Differential evolution selection requires a random number generator".to_string(),
            )
        })?;

        let current = self.sequence.borrow().value();
        if current >= n {
            return Err(SelectionError::Configuration(format!(
                "Sequence cursor ({}) is out of range for a population of {}",
                current, n
            )));
        }

        let rounds = self.mating_pool_size / self.number_of_parents;
        let mut pool = Vec::with_capacity(self.mating_pool_size);

        for _ in 0..rounds {
            if self.take_current_individual_as_parent {
                pool.push(population[current].clone());

                let rest: Vec<usize> = (0..n).filter(|&i| i != current).collect();
                for pick in rng.sample_distinct(rest.len(), self.number_of_parents - 1) {
                    pool.push(population[rest[pick]].clone());
                }
            } else {
                for pick in rng.sample_distinct(n, self.number_of_parents) {
                    pool.push(population[pick].clone());
                }
            }
        }

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::CyclicIntegerSequence;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    struct TestCandidate {
        id: usize,
    }

    fn population(n: usize) -> Vec<TestCandidate> {
        (0..n).map(|id| TestCandidate { id }).collect()
    }

    #[test]
    fn test_current_individual_is_always_first_parent() {
        let population = population(10);
        let sequence = CyclicIntegerSequence::shared(10).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection =
            DifferentialEvolutionSelection::new(3, 3, true, Rc::clone(&sequence)).unwrap();

        for _ in 0..50 {
            let current = sequence.borrow().value();
            let pool = selection.select(&population, Some(&mut rng)).unwrap();

            assert_eq!(pool.len(), 3);
            assert_eq!(pool[0].id, current);
            sequence.borrow_mut().advance();
        }
    }

    #[test]
    fn test_parents_within_a_round_are_distinct() {
        let population = population(10);
        let sequence = CyclicIntegerSequence::shared(10).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = DifferentialEvolutionSelection::new(4, 4, true, sequence).unwrap();

        for _ in 0..50 {
            let pool = selection.select(&population, Some(&mut rng)).unwrap();
            let mut ids: Vec<usize> = pool.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 4);
        }
    }

    #[test]
    fn test_oversized_pool_runs_independent_rounds() {
        let population = population(10);
        let sequence = CyclicIntegerSequence::shared(10).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection =
            DifferentialEvolutionSelection::new(6, 3, true, Rc::clone(&sequence)).unwrap();
        let pool = selection.select(&population, Some(&mut rng)).unwrap();

        assert_eq!(pool.len(), 6);
        // Both rounds lead with the current individual.
        let current = sequence.borrow().value();
        assert_eq!(pool[0].id, current);
        assert_eq!(pool[3].id, current);
    }

    #[test]
    fn test_without_current_flag_all_parents_are_sampled() {
        let population = population(3);
        let sequence = CyclicIntegerSequence::shared(3).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = DifferentialEvolutionSelection::new(3, 3, false, sequence).unwrap();
        let pool = selection.select(&population, Some(&mut rng)).unwrap();

        let mut ids: Vec<usize> = pool.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_population_below_structural_minimum_is_rejected() {
        let sequence = CyclicIntegerSequence::shared(2).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = DifferentialEvolutionSelection::new(3, 3, true, sequence).unwrap();
        let result = selection.select(&population(2), Some(&mut rng));

        assert!(matches!(
            result,
            Err(SelectionError::InsufficientPopulation {
                required: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_cursor_out_of_range_is_rejected() {
        let population = population(4);
        let sequence = CyclicIntegerSequence::shared(10).unwrap();
        for _ in 0..7 {
            sequence.borrow_mut().advance();
        }
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = DifferentialEvolutionSelection::new(3, 3, true, sequence).unwrap();
        let result = selection.select(&population, Some(&mut rng));

        assert!(matches!(result, Err(SelectionError::Configuration(_))));
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let sequence = CyclicIntegerSequence::shared(1).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = DifferentialEvolutionSelection::new(3, 3, true, sequence).unwrap();
        let result = selection.select(&population(0), Some(&mut rng));

        assert!(matches!(result, Err(SelectionError::EmptyPopulation)));
    }

    #[test]
    fn test_missing_rng_is_rejected() {
        let sequence = CyclicIntegerSequence::shared(5).unwrap();

        let selection = DifferentialEvolutionSelection::new(3, 3, true, sequence).unwrap();
        assert!(selection.select(&population(5), None).is_err());
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let sequence = CyclicIntegerSequence::shared(5).unwrap();

        assert!(
            DifferentialEvolutionSelection::new(3, 0, true, Rc::clone(&sequence)).is_err()
        );
        assert!(
            DifferentialEvolutionSelection::new(0, 3, true, Rc::clone(&sequence)).is_err()
        );
        // Pool size must be an exact multiple of the parent count.
        assert!(DifferentialEvolutionSelection::new(5, 3, true, sequence).is_err());
    }
}
