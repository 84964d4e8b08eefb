//! Arena-backed directed graph.
//!
//! [`DirectedGraph`] stores node payloads and edge payloads in contiguous vectors and
//! keeps per-node adjacency lists of [`EdgeId`]s in both directions. Nodes are
//! addressed by [`NodeId`], which is also the graph's [`GraphBase::Vertex`] type, so
//! the graph can be handed to the SCC engine as-is.

use crate::{
    graph::{
        algorithms,
        edge::EdgeId,
        node::NodeId,
        traits::{GraphBase, Successors},
    },
    Error, Result,
};

/// Internal storage for edge data and endpoints.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    /// Source node of the edge
    source: NodeId,
    /// Target node of the edge
    target: NodeId,
    /// User-provided edge data
    data: E,
}

/// A directed multigraph with typed node and edge data.
///
/// - Node data (`N`) and edge data (`E`) are arbitrary payloads
/// - Successor and predecessor queries walk per-node adjacency lists
/// - Parallel edges and self-loops are allowed
///
/// Graphs are built incrementally and then treated as immutable; nothing in the
/// algorithms module mutates a graph it is given.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{DirectedGraph, Successors};
///
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
///
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let successors: Vec<_> = graph.successors(&a)?.collect();
/// assert_eq!(successors, vec![b, c]);
///
/// let predecessors: Vec<_> = graph.predecessors(b).collect();
/// assert_eq!(predecessors, vec![a]);
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    /// Node data storage
    nodes: Vec<N>,
    /// Edge data storage
    edges: Vec<EdgeData<E>>,
    /// Outgoing edges per node
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edges per node
    incoming: Vec<Vec<EdgeId>>,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates a new empty directed graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `node_capacity` - Expected number of nodes
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
        }
    }

    /// Adds a node and returns its sequentially assigned [`NodeId`].
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Returns the data of `node`, or `None` if it does not exist.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all node IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Checks if `node` is valid for this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Adds a directed edge from `source` to `target` with the given data.
    ///
    /// Parallel edges and self-loops are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either `source` or `target` does not exist
    /// in the graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        if !self.contains_node(source) {
            return Err(Error::GraphError(format!(
                "source node {} does not exist in graph with {} nodes",
                source,
                self.nodes.len()
            )));
        }
        if !self.contains_node(target) {
            return Err(Error::GraphError(format!(
                "target node {} does not exist in graph with {} nodes",
                target,
                self.nodes.len()
            )));
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            source,
            target,
            data,
        });

        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);

        Ok(id)
    }

    /// Returns the data of `edge`, or `None` if it does not exist.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.data)
    }

    /// Returns `(source, target)` of `edge`, or `None` if it does not exist.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge.index()).map(|e| (e.source, e.target))
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over `(source, target)` of every edge in insertion order.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.iter().map(|e| (e.source, e.target))
    }

    /// Returns an iterator over the successors of `node`.
    ///
    /// Unlike [`Successors::successors`], an unknown node simply has no successors.
    pub fn successor_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing
            .get(node.index())
            .into_iter()
            .flatten()
            .map(|&edge_id| self.edges[edge_id.index()].target)
    }

    /// Returns an iterator over the predecessors of `node`.
    ///
    /// An unknown node has no predecessors.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming
            .get(node.index())
            .into_iter()
            .flatten()
            .map(|&edge_id| self.edges[edge_id.index()].source)
    }

    /// Returns the out-degree of `node` (0 for an unknown node).
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing.get(node.index()).map_or(0, Vec::len)
    }

    /// Returns the in-degree of `node` (0 for an unknown node).
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming.get(node.index()).map_or(0, Vec::len)
    }

    /// Returns a copy of this graph with every edge reversed.
    ///
    /// Node IDs, node data and edge IDs are preserved: edge `e` goes `u -> v` here
    /// and `v -> u` in the result. Use [`transpose`](crate::graph::transpose) for
    /// arbitrary [`Successors`] implementations.
    #[must_use]
    pub fn reversed(&self) -> DirectedGraph<N, E>
    where
        N: Clone,
        E: Clone,
    {
        DirectedGraph {
            nodes: self.nodes.clone(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeData {
                    source: e.target,
                    target: e.source,
                    data: e.data.clone(),
                })
                .collect(),
            outgoing: self.incoming.clone(),
            incoming: self.outgoing.clone(),
        }
    }

    /// Computes all strongly connected components of this graph.
    ///
    /// Components are returned sources-first with respect to the condensation DAG.
    ///
    /// # Errors
    ///
    /// See [`strongly_connected_components`](crate::graph::algorithms::strongly_connected_components).
    pub fn strongly_connected_components(&self) -> Result<Vec<Vec<NodeId>>> {
        algorithms::strongly_connected_components(self)
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    type Vertex = NodeId;

    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids()
    }

    fn contains_vertex(&self, vertex: &NodeId) -> bool {
        self.contains_node(*vertex)
    }
}

impl<N, E> Successors for DirectedGraph<N, E> {
    fn successors(&self, vertex: &NodeId) -> Result<impl Iterator<Item = NodeId> + '_> {
        if !self.contains_node(*vertex) {
            return Err(Error::unknown_vertex(vertex));
        }
        Ok(self.successor_nodes(*vertex))
    }
}
