//! Sorting utilities.
//!
//! Provides an insertion sort whose comparator may refuse to order a pair.

mod insertion;

pub use insertion::try_insertion_sort_by;
