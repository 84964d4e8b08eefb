//! Node identifier for arena-backed graphs.
//!
//! [`NodeId`] is the dense integer handle used by [`DirectedGraph`](crate::graph::DirectedGraph)
//! and, internally, by [`IndexedGraph`](crate::graph::IndexedGraph) to address its keys.
//! Keeping vertices as small `Copy` indices means the decomposition bookkeeping never
//! has to borrow from the structure the vertices describe.

use std::fmt;

/// A strongly-typed index of a node within a [`DirectedGraph`](crate::graph::DirectedGraph).
///
/// Node IDs are assigned sequentially from 0 as nodes are added, so they double as
/// positions into per-node vectors. They satisfy every bound the SCC engine places
/// on a vertex (`Clone + Eq + Hash + Debug`) and can be used as vertices directly.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
///
/// assert_eq!(a, NodeId::new(0));
/// assert_eq!(b.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// Normal code obtains IDs from [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node);
    /// constructing one by hand does not make it valid for any particular graph.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw 0-based index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
