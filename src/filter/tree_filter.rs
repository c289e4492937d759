//! Prune a call-tree forest while preserving hierarchy.
//!
//! Skipped nodes vanish; their kept descendants reattach to the nearest
//! kept ancestor or become new roots. Sibling order survives exactly as in
//! the original trace, so indentation, width aggregation, and click-to-zoom
//! in the renderer keep working on the filtered forest.

use log::debug;

use crate::tree::{FrameForest, FrameNode, NodeId};
use crate::utils::error::FilterError;

/// Filter a forest in place with an infallible skip predicate
///
/// **Public** - main entry point for filtering
///
/// # Arguments
/// * `forest` - Forest to filter; its root list is replaced on success
/// * `skip` - Returns true for nodes to remove; called once per node
///            against the original (unfiltered) tree
///
/// # Returns
/// The surviving roots, in order: kept original roots plus kept nodes
/// promoted because no ancestor of theirs survived.
///
/// # Errors
/// * `FilterError::ParentCycle` / `FilterError::RevisitedNode` - the forest
///   violates the acyclic-tree invariant (upstream construction bug)
///
/// # Algorithm
/// 1. Walk the original forest in pre-order with an explicit stack and
///    mark the nodes to keep (the predicate runs exactly once per node)
/// 2. Revisit kept nodes in that same pre-order: rebuild each one's
///    children list and reattach it under its nearest kept ancestor,
///    promoting it to a root when the original parent chain is exhausted
///
/// Processing in pre-order guarantees a kept parent is rebuilt before any
/// descendant attaches to it, and that reattached siblings keep their
/// original left-to-right order even when they come from different depths.
pub fn filter_forest<F>(forest: &mut FrameForest, mut skip: F) -> Result<Vec<NodeId>, FilterError>
where
    F: FnMut(&FrameNode) -> bool,
{
    try_filter_forest(forest, |node| Ok::<bool, std::convert::Infallible>(skip(node)))
}

/// Filter a forest in place with a fallible skip predicate
///
/// **Public** - variant for predicates that can fail (e.g. a predicate
/// resolving frame metadata lazily)
///
/// The first predicate error aborts the pass and is returned as
/// `FilterError::PredicateFailed` naming the offending node. The forest is
/// left as-is up to that point; there is no rollback.
pub fn try_filter_forest<F, E>(
    forest: &mut FrameForest,
    mut skip: F,
) -> Result<Vec<NodeId>, FilterError>
where
    F: FnMut(&FrameNode) -> Result<bool, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let node_count = forest.len();
    debug!(
        "Filtering forest: {} nodes, {} roots",
        node_count,
        forest.roots().len()
    );

    // Pass 1: mark the keep set, recording kept nodes in pre-order.
    // Children are pushed reversed so they pop in left-to-right order.
    let mut keep = vec![false; node_count];
    let mut visited = vec![false; node_count];
    let mut kept_order: Vec<NodeId> = Vec::with_capacity(node_count);

    let mut stack: Vec<NodeId> = forest.roots().to_vec();
    stack.reverse();

    while let Some(id) = stack.pop() {
        if visited[id.index()] {
            return Err(FilterError::RevisitedNode(id));
        }
        visited[id.index()] = true;

        let node = forest.node(id);
        match skip(node) {
            Ok(false) => {
                keep[id.index()] = true;
                kept_order.push(id);
            }
            Ok(true) => {}
            Err(source) => {
                return Err(FilterError::PredicateFailed {
                    node: id,
                    source: source.into(),
                });
            }
        }

        stack.extend(node.children().iter().rev());
    }

    // Pass 2: rebuild links. Kept nodes arrive in pre-order, so every kept
    // parent has its children list cleared before any descendant attaches,
    // and attachments land in original left-to-right order.
    let mut new_roots: Vec<NodeId> = Vec::new();

    for &id in &kept_order {
        forest.node_mut(id).children.clear();

        // Nearest kept ancestor along the original parent chain. Only kept
        // nodes ever get their parent rewritten, and the walk stops at the
        // first kept node, so the chain read here is the original one.
        let mut parent = forest.node(id).parent();
        let mut steps = 0usize;
        while let Some(p) = parent {
            if keep[p.index()] {
                break;
            }
            steps += 1;
            if steps > node_count {
                return Err(FilterError::ParentCycle(id));
            }
            parent = forest.node(p).parent();
        }

        forest.node_mut(id).parent = parent;
        match parent {
            Some(p) => forest.node_mut(p).children.push(id),
            None => new_roots.push(id),
        }
    }

    debug!(
        "Filter kept {} of {} nodes, {} surviving roots",
        kept_order.len(),
        node_count,
        new_roots.len()
    );

    forest.set_roots(new_roots.clone());
    Ok(new_roots)
}
