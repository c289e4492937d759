//! Arena-owning forest of call-tree nodes.
//!
//! Ownership is deliberately one-directional: the forest owns every node,
//! `children` lists hold non-owning handles, and `parent` is a back
//! reference used purely for traversal. Handles stay valid for the life of
//! the forest; filtering rewires links but never allocates or frees nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::frame::{Aggregate, Frame};

/// Stable handle to a node inside a [`FrameForest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the owning forest's arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single call-tree node: frame payload plus tree links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNode {
    /// Identity and metadata of the executing unit. Opaque to the filter;
    /// only skip predicates inspect it.
    pub frame: Frame,

    /// Precomputed subtree weights. Never recomputed by this crate.
    pub aggregate: Aggregate,

    /// Ordered children, left to right as observed in the original trace
    pub(crate) children: Vec<NodeId>,

    /// Owning node, or `None` for a root
    pub(crate) parent: Option<NodeId>,
}

impl FrameNode {
    /// Ordered children of this node
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent of this node, `None` for a root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Forest of call trees backed by a single arena
///
/// Built once by the upstream profile-construction stage, then handed to
/// [`crate::filter::filter_forest`] and on to the renderer. The root list
/// is ordered; sibling order everywhere in the forest is meaningful and
/// preserved by every operation in this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameForest {
    nodes: Vec<FrameNode>,
    roots: Vec<NodeId>,
}

impl FrameForest {
    /// Create an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena (kept and skipped alike)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ordered tree heads of the forest
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Borrow a node by handle
    ///
    /// # Panics
    /// Panics if `id` did not come from this forest.
    pub fn node(&self, id: NodeId) -> &FrameNode {
        &self.nodes[id.index()]
    }

    /// Borrow a node by handle, `None` if the handle is foreign
    pub fn get(&self, id: NodeId) -> Option<&FrameNode> {
        self.nodes.get(id.index())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut FrameNode {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn set_roots(&mut self, roots: Vec<NodeId>) {
        self.roots = roots;
    }

    /// Append a new tree head to the forest
    pub fn push_root(&mut self, frame: Frame, aggregate: Aggregate) -> NodeId {
        let id = self.alloc(frame, aggregate, None);
        self.roots.push(id);
        id
    }

    /// Append a new child under `parent`, after its existing children
    ///
    /// # Panics
    /// Panics if `parent` did not come from this forest.
    pub fn push_child(&mut self, parent: NodeId, frame: Frame, aggregate: Aggregate) -> NodeId {
        let id = self.alloc(frame, aggregate, Some(parent));
        self.nodes[parent.index()].children.push(id);
        id
    }

    fn alloc(&mut self, frame: Frame, aggregate: Aggregate, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(FrameNode {
            frame,
            aggregate,
            children: Vec::new(),
            parent,
        });
        id
    }

    /// Iterate the forest in pre-order (root to leaf, left to right)
    ///
    /// Implemented with an explicit stack, so arbitrarily deep trees do not
    /// grow the native call stack. This is the order renderers draw in and
    /// the order the filter processes in.
    pub fn preorder(&self) -> Preorder<'_> {
        let mut stack: Vec<NodeId> = self.roots.clone();
        stack.reverse();
        Preorder {
            forest: self,
            stack,
        }
    }
}

/// Explicit-stack pre-order traversal over a [`FrameForest`]
pub struct Preorder<'a> {
    forest: &'a FrameForest,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Push children reversed so they pop in original left-to-right order
        let children = &self.forest.node(id).children;
        self.stack.extend(children.iter().rev());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_aggregate(weight: u64) -> Aggregate {
        Aggregate::new(weight, weight)
    }

    #[test]
    fn test_push_root_and_child_links() {
        let mut forest = FrameForest::new();
        let root = forest.push_root(Frame::application("main"), Aggregate::new(10, 0));
        let child = forest.push_child(root, Frame::application("work"), leaf_aggregate(10));

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.roots(), &[root]);
        assert_eq!(forest.node(root).children(), &[child]);
        assert_eq!(forest.node(child).parent(), Some(root));
        assert_eq!(forest.node(root).parent(), None);
    }

    #[test]
    fn test_preorder_visits_left_to_right() {
        // main
        //  |- a
        //  |   |- b
        //  |- c
        let mut forest = FrameForest::new();
        let main = forest.push_root(Frame::application("main"), Aggregate::new(10, 0));
        let a = forest.push_child(main, Frame::application("a"), Aggregate::new(6, 2));
        let b = forest.push_child(a, Frame::application("b"), leaf_aggregate(4));
        let c = forest.push_child(main, Frame::application("c"), leaf_aggregate(4));

        let order: Vec<NodeId> = forest.preorder().collect();
        assert_eq!(order, vec![main, a, b, c]);
    }

    #[test]
    fn test_preorder_spans_multiple_roots() {
        let mut forest = FrameForest::new();
        let r1 = forest.push_root(Frame::application("r1"), leaf_aggregate(1));
        let r2 = forest.push_root(Frame::application("r2"), leaf_aggregate(1));
        let r1_child = forest.push_child(r1, Frame::application("x"), leaf_aggregate(1));

        let order: Vec<NodeId> = forest.preorder().collect();
        assert_eq!(order, vec![r1, r1_child, r2]);
    }

    #[test]
    fn test_empty_forest() {
        let forest = FrameForest::new();
        assert!(forest.is_empty());
        assert_eq!(forest.preorder().count(), 0);
        assert!(forest.roots().is_empty());
    }
}
