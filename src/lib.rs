//! Flametree
//!
//! Call-tree filtering and reparenting for flame graph rendering.
//!
//! A profiler frontend often needs to hide frames from a flame graph
//! (the classic case is "show application frames only") without breaking
//! the ancestor/descendant relationships the visualization depends on. This
//! crate owns exactly that step: it takes a forest of call-tree nodes and a
//! per-node skip predicate, removes the skipped nodes, and reattaches their
//! kept descendants to the nearest kept ancestor (or promotes them to
//! roots), preserving sibling order.
//!
//! ## Getting Started
//!
//! ```
//! use flametree::{Aggregate, Frame, FrameForest, filter_forest};
//!
//! let mut forest = FrameForest::new();
//! let root = forest.push_root(Frame::application("main"), Aggregate::new(100, 0));
//! let libc = forest.push_child(root, Frame::system("__libc_read"), Aggregate::new(60, 10));
//! forest.push_child(libc, Frame::application("parse_row"), Aggregate::new(50, 50));
//!
//! // Hide system frames; parse_row reattaches directly under main.
//! let roots = filter_forest(&mut forest, |node| !node.frame.is_application).unwrap();
//! assert_eq!(roots, vec![root]);
//! assert_eq!(forest.node(root).children().len(), 1);
//! ```
//!
//! Weight aggregation, layout, and tooltip formatting live in the consuming
//! renderer; this crate never recomputes weights and never touches frame
//! metadata.

pub mod filter;
pub mod tree;
pub mod utils;

// Re-export the main types and entry points
pub use filter::{filter_forest, try_filter_forest};
pub use tree::{Aggregate, Frame, FrameForest, FrameNode, NodeId, SourceHint};
pub use utils::FilterError;
