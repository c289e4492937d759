//! Call-tree data model.
//!
//! This module defines:
//! - Frame payload types (name, application flag, source hint, weights)
//! - The arena-owning forest of call-tree nodes
//! - Stable node handles used by the filter and by renderers

pub mod forest;
pub mod frame;

// Re-export main types
pub use forest::{FrameForest, FrameNode, NodeId};
pub use frame::{Aggregate, Frame, SourceHint};
