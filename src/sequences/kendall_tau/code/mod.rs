//! Kendall tau sequence distance implementations.
//!
//! This module contains the implementation variants of the distance plus
//! the inversion counter they share.

mod common;
mod hash_based;
mod sort_based;

pub use common::count_inversions;
pub use hash_based::kendall_tau_hash;
pub use sort_based::kendall_tau_sort;

use crate::utils::VariantInfo;

/// Type alias for the sequence distance function signature
pub type SequenceDistanceFn = fn(&[f64], &[f64]) -> u64;

/// Get all implementation variants, reference first
pub fn available_variants() -> Vec<VariantInfo<SequenceDistanceFn>> {
    vec![
        VariantInfo {
            name: "hash",
            description: "Pairs equal elements through hash-map buckets of positions",
            function: kendall_tau_hash,
        },
        VariantInfo {
            name: "sort",
            description: "Pairs equal elements through a stable sort by value",
            function: kendall_tau_sort,
        },
    ]
}
