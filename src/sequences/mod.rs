//! Distance measures over sequences.
//!
//! Sequences are ordered multisets: unlike permutations, elements may
//! repeat and carry arbitrary `f64` values.

pub mod kendall_tau;
