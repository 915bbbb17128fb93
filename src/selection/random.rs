use crate::error::{Result, SelectionError};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;

/// A selection operator that picks candidates uniformly at random.
///
/// With replacement (the default), each of the configured picks is an
/// independent uniform draw and duplicates are allowed, so the request may
/// exceed the population size. Without replacement the result is a uniformly
/// random subset with no repeats; a request exceeding the population size is
/// rejected rather than truncated, and a request equal to the population
/// size returns a uniformly random permutation of it.
///
/// A request of zero candidates yields an empty pool, even on an empty
/// population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RandomSelection {
    number_of_elements_to_select: usize,
    with_replacement: bool,
}

impl RandomSelection {
    /// Creates a new RandomSelection operator drawing with replacement.
    pub fn new(number_of_elements_to_select: usize) -> Self {
        Self {
            number_of_elements_to_select,
            with_replacement: true,
        }
    }

    /// Switches the operator to drawing without replacement.
    pub fn without_replacement(mut self) -> Self {
        self.with_replacement = false;
        self
    }

    pub fn number_of_elements_to_select(&self) -> usize {
        self.number_of_elements_to_select
    }

    pub fn is_with_replacement(&self) -> bool {
        self.with_replacement
    }
}

impl<S> SelectionOperator<S> for RandomSelection
where
    S: Clone,
{
    fn select(
        &self,
        population: &[S],
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<S>> {
        let n = population.len();
        let k = self.number_of_elements_to_select;

        if k == 0 {
            return Ok(Vec::new());
        }

        if self.with_replacement {
            if n == 0 {
                return Err(SelectionError::EmptyPopulation);
            }
        } else if k > n {
            return Err(SelectionError::InsufficientPopulation {
                required: k,
                actual: n,
            });
        }

        let rng = rng.ok_or_else(|| {
            SelectionError::Configuration(
                "Random selection requires a random number generator".to_string(),
            )
        })?;

        let pool = if self.with_replacement {
            (0..k).map(|_| population[rng.gen_index(n)].clone()).collect()
        } else {
            rng.sample_distinct(n, k)
                .into_iter()
                .map(|idx| population[idx].clone())
                .collect()
        };

        Ok(pool)
    }
}
