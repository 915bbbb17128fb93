//! # Sequence Generators
//!
//! Decomposition-style algorithms walk the population with a "current
//! individual" cursor that survives across generations. The cursor is modeled
//! as a `SequenceGenerator` owned by the algorithm and shared with whichever
//! operators need it through an `Rc<RefCell<...>>` handle, so its advancement
//! is visible to every holder. The handle is deliberately not `Send`: a
//! shared cursor belongs to exactly one algorithm instance running on one
//! thread.
//!
//! `CyclicIntegerSequence` is the concrete implementation shipped with the
//! catalogue: a counter over `[0, length)` that wraps back to zero.
//!
//! ## Example
//!
//! ```rust
//! use moselect::sequence::{CyclicIntegerSequence, SequenceGenerator};
//!
//! let mut sequence = CyclicIntegerSequence::new(3).unwrap();
//! assert_eq!(sequence.value(), 0);
//!
//! sequence.advance();
//! sequence.advance();
//! assert_eq!(sequence.value(), 2);
//!
//! sequence.advance();
//! assert_eq!(sequence.value(), 0); // wrapped
//! ```

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::error::{Result, SelectionError};

/// A stateful cursor over population indices.
///
/// Operators document whether they read or advance the cursor; the owning
/// algorithm decides when to advance it otherwise.
pub trait SequenceGenerator: Debug {
    /// Current cursor position.
    fn value(&self) -> usize;

    /// Moves the cursor to the next position.
    fn advance(&mut self);

    /// Number of positions the cursor cycles over.
    fn length(&self) -> usize;
}

/// Shared handle to a sequence generator, owned by the algorithm and handed
/// to the operators that consume it.
pub type SharedSequenceGenerator = Rc<RefCell<dyn SequenceGenerator>>;

/// A cyclic counter over `[0, length)`, starting at zero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct CyclicIntegerSequence {
    current: usize,
    length: usize,
}

impl CyclicIntegerSequence {
    /// Creates a cyclic sequence over `[0, length)`.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError::Configuration` error if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(SelectionError::Configuration(
                "Sequence length must be at least 1".to_string(),
            ));
        }

        Ok(Self { current: 0, length })
    }

    /// Creates a cyclic sequence already wrapped in the shared handle the
    /// operators consume.
    pub fn shared(length: usize) -> Result<SharedSequenceGenerator> {
        Ok(Rc::new(RefCell::new(Self::new(length)?)))
    }
}

impl SequenceGenerator for CyclicIntegerSequence {
    fn value(&self) -> usize {
        self.current
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.length;
    }

    fn length(&self) -> usize {
        self.length
    }
}
