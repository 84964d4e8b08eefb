//! Edge identifier for arena-backed graphs.

use std::fmt;

/// A strongly-typed index of an edge within a [`DirectedGraph`](crate::graph::DirectedGraph).
///
/// Edge IDs are handed out sequentially by
/// [`DirectedGraph::add_edge`](crate::graph::DirectedGraph::add_edge) and give access
/// to the edge payload and its endpoints. The SCC engine itself only ever looks at
/// endpoints, so edge IDs are mostly of interest to code that builds graphs.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{DirectedGraph, EdgeId};
///
/// let mut graph: DirectedGraph<&str, &str> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let edge = graph.add_edge(a, b, "A->B")?;
///
/// assert_eq!(edge, EdgeId::new(0));
/// assert_eq!(graph.edge(edge), Some(&"A->B"));
/// assert_eq!(graph.edge_endpoints(edge), Some((a, b)));
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates an `EdgeId` from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw 0-based index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
