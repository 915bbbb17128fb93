pub mod comparator;
pub mod error;
pub mod neighborhood;
pub mod rng;
pub mod selection;
pub mod sequence;

// Re-export commonly used types for convenience
pub use comparator::Comparator;
pub use error::{Result, SelectionError};
pub use neighborhood::Neighborhood;
pub use selection::SelectionOperator;
pub use sequence::{CyclicIntegerSequence, SequenceGenerator, SharedSequenceGenerator};
