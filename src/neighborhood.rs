//! # Neighborhood Query
//!
//! Decomposition-based algorithms associate each population index with a
//! subset of "close" candidates, computed by a topology (weight-vector
//! distances, grids) that lives outside this crate. The selection operators
//! only consume the query side of that topology through the `Neighborhood`
//! trait.

/// Query interface over a neighborhood topology.
pub trait Neighborhood<S> {
    /// Returns the neighbor subset of `population` around `index`.
    ///
    /// The returned candidates are clones of population entries; the query
    /// must not mutate or reorder the population itself.
    fn neighbors(&self, population: &[S], index: usize) -> Vec<S>;
}
