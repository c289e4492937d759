//! Forest filtering with reparenting.
//!
//! This module transforms a call-tree forest by removing skipped nodes and
//! reattaching their kept descendants to the nearest kept ancestor, keeping
//! the hierarchy and sibling order a flame graph renderer depends on.

pub mod tree_filter;

// Re-export main entry points
pub use tree_filter::{filter_forest, try_filter_forest};
