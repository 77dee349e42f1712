//! Permutations and distance measures between them.

pub mod distance;
pub mod perm;

pub use distance::{all_measures, PermutationDistance};
pub use perm::Permutation;
