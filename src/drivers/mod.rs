//! Example drivers behind the command line interface: a distance table
//! over all short permutations, average distances between random
//! permutations, and the hash-vs-sort comparison sweep.

pub mod average;
pub mod compare;
pub mod table;
