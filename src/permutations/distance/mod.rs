//! Distance measures between permutations.
//!
//! Eleven measures over pairs of same-length permutations, each behind
//! the [`PermutationDistance`] trait so the drivers can treat them
//! uniformly. Every measure reports zero between equal permutations and
//! is symmetric in its arguments.

mod edges;
mod kendall_tau;
mod positional;
mod rearrangement;

pub use edges::{AcyclicEdgeDistance, CyclicEdgeDistance, CyclicRTypeDistance, RTypeDistance};
pub use kendall_tau::KendallTauDistance;
pub use positional::{
    DeviationDistance, ExactMatchDistance, LeeDistance, SquaredDeviationDistance,
};
pub use rearrangement::{InterchangeDistance, ReinsertionDistance};

use crate::permutations::perm::Permutation;

/// A distance measure between permutations of the same length.
pub trait PermutationDistance: Send + Sync {
    /// Short identifier used in driver output.
    fn name(&self) -> &'static str;

    /// The distance between `p` and `q`.
    ///
    /// # Panics
    /// Panics if the permutations differ in length.
    fn distance(&self, p: &Permutation, q: &Permutation) -> u64;
}

/// Every measure, in the column order the table driver prints.
pub fn all_measures() -> Vec<Box<dyn PermutationDistance>> {
    vec![
        Box::new(AcyclicEdgeDistance),
        Box::new(CyclicEdgeDistance),
        Box::new(RTypeDistance),
        Box::new(CyclicRTypeDistance),
        Box::new(DeviationDistance),
        Box::new(SquaredDeviationDistance),
        Box::new(LeeDistance),
        Box::new(KendallTauDistance),
        Box::new(ReinsertionDistance),
        Box::new(ExactMatchDistance),
        Box::new(InterchangeDistance),
    ]
}
