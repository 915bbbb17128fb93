//! # Error Types
//!
//! This module defines the error type shared by every selection operator in
//! the catalogue. Two classes of failure exist: invalid configuration, which
//! is reported at construction time and never deferred, and invalid call-time
//! input, which leaves the operator and the caller's population untouched.
//!
//! ## Examples
//!
//! ```rust
//! use moselect::error::{Result, SelectionError};
//!
//! fn guard(population_len: usize) -> Result<()> {
//!     if population_len == 0 {
//!         return Err(SelectionError::EmptyPopulation);
//!     }
//!     Ok(())
//! }
//!
//! assert!(guard(0).is_err());
//! assert!(guard(5).is_ok());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or applying a selection
/// operator.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// Error that occurs when an invalid configuration is provided, either at
    /// construction time (non-positive temperature, zero sizes, out-of-range
    /// probabilities) or when the call-time setup is unusable (a stochastic
    /// operator invoked without a random number generator, a shared sequence
    /// cursor that does not fit the population).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is given to an operator
    /// that needs at least one candidate to sample from.
    #[error("Empty population error: cannot select from an empty population")]
    EmptyPopulation,

    /// Error that occurs when the population is too small for the structural
    /// needs of a strategy, such as a tournament larger than the population,
    /// a without-replacement request exceeding the population, or a
    /// differential-evolution draw on fewer candidates than parents.
    #[error(
        "Insufficient population: the operation requires at least {required} candidates, but the population holds {actual}"
    )]
    InsufficientPopulation {
        /// Minimum number of candidates the operation needs.
        required: usize,
        /// Number of candidates actually supplied.
        actual: usize,
    },
}

/// A specialized Result type for selection operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `SelectionError`.
pub type Result<T> = std::result::Result<T, SelectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectionError::Configuration("temperature must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: temperature must be positive"
        );

        let err = SelectionError::EmptyPopulation;
        assert!(err.to_string().contains("empty population"));

        let err = SelectionError::InsufficientPopulation {
            required: 3,
            actual: 2,
        };
        assert!(err.to_string().contains("at least 3"));
        assert!(err.to_string().contains("holds 2"));
    }
}
