//! Error types for the library.
//!
//! We use `thiserror` for library-style errors with custom types.

use thiserror::Error;

use crate::tree::NodeId;

/// Errors that can occur while filtering a forest
///
/// A filter error leaves the forest in a partially rewritten state; the
/// operation is not transactional. Callers are expected to rebuild the
/// forest from source data rather than recover the partial result.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The supplied skip predicate failed for a node
    #[error("skip predicate failed on node {node}")]
    PredicateFailed {
        node: NodeId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A parent chain never reached a root within the size of the forest
    #[error("parent chain from node {0} never reaches a root (cycle in forest)")]
    ParentCycle(NodeId),

    /// A node was reached twice while marking (shared child or child cycle)
    #[error("node {0} reached more than once during traversal (malformed forest)")]
    RevisitedNode(NodeId),
}
