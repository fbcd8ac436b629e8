//! ordinal-key-util - Collaborator utilities for ordinal-key
//!
//! This crate provides the generic capabilities the ordinal key core consumes
//! without depending on their internals: JSON text encoding with output
//! options, and sorting with a comparator that may reject a pair.

pub mod json;
pub mod sort;

// Re-exports for convenience
pub use json::{from_json_str, to_json_string, JsonError, OutputFormatting};
pub use sort::try_insertion_sort_by;
