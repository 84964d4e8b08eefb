//! Keyed graph wrapper for domain-typed vertices.
//!
//! [`IndexedGraph`] lets callers build a graph directly from their own vertex
//! identifiers (block labels, method names, interned symbols) while the adjacency
//! itself lives in an arena [`DirectedGraph`] addressed by dense [`NodeId`]s.
//! Keys are kept in insertion order, which makes vertex enumeration, and therefore
//! SCC emission order, reproducible.
//!
//! # Examples
//!
//! ```rust
//! use sccgraph::graph::IndexedGraph;
//!
//! let mut graph: IndexedGraph<&str, ()> = IndexedGraph::new();
//! graph.add_edge("entry", "loop", ())?;
//! graph.add_edge("loop", "body", ())?;
//! graph.add_edge("body", "loop", ())?;
//! graph.add_edge("loop", "exit", ())?;
//!
//! let sccs = graph.strongly_connected_components()?;
//! assert_eq!(sccs.len(), 3);
//! assert_eq!(sccs[0], vec!["entry"]);
//! assert_eq!(sccs[2], vec!["exit"]);
//! # Ok::<(), sccgraph::Error>(())
//! ```

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::{
    graph::{
        algorithms::{self, StronglyConnectedComponents},
        transpose, DirectedGraph, GraphBase, NodeId, Successors,
    },
    Error, Result,
};

/// A graph whose vertices are arbitrary keys of type `K`.
///
/// Each key is mapped to a [`NodeId`] on first sight; the reverse mapping is a plain
/// vector indexed by that ID. The graph implements [`GraphBase`] and [`Successors`]
/// with `Vertex = K`, so the SCC engine reports components in terms of the caller's
/// own keys.
///
/// # Type Parameters
///
/// * `K` - The key type for vertices
/// * `E` - The edge data type
#[derive(Debug, Clone)]
pub struct IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Adjacency storage; node payloads are unused
    graph: DirectedGraph<(), E>,
    /// Map from key to `NodeId`
    key_to_node: HashMap<K, NodeId>,
    /// Keys by `NodeId` index, in insertion order
    keys: Vec<K>,
}

impl<K, E> Default for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty indexed graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
            key_to_node: HashMap::new(),
            keys: Vec::new(),
        }
    }

    /// Creates a new indexed graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: DirectedGraph::with_capacity(node_capacity, edge_capacity),
            key_to_node: HashMap::with_capacity(node_capacity),
            keys: Vec::with_capacity(node_capacity),
        }
    }

    /// Adds a vertex for `key`, or returns the existing `NodeId` if already present.
    ///
    /// Calling this repeatedly with the same key always returns the same ID and
    /// leaves the enumeration order untouched.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&node_id) = self.key_to_node.get(&key) {
            return node_id;
        }

        let node_id = self.graph.add_node(());
        self.key_to_node.insert(key.clone(), node_id);
        self.keys.push(key);
        node_id
    }

    /// Adds a directed edge between two keys, creating missing vertices.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a new edge was added
    /// * `Ok(false)` if an edge `from -> to` already existed
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph rejects the edge.
    pub fn add_edge(&mut self, from: K, to: K, data: E) -> Result<bool> {
        let from_node = self.add_node(from);
        let to_node = self.add_node(to);

        if self.graph.successor_nodes(from_node).any(|s| s == to_node) {
            return Ok(false);
        }

        self.graph.add_edge(from_node, to_node, data)?;
        Ok(true)
    }

    /// Adds a directed edge between two keys without checking for an existing one.
    ///
    /// Use this to build multigraphs, or when the caller already knows the edge is
    /// new and wants to avoid the linear duplicate scan of [`add_edge`](Self::add_edge).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph rejects the edge.
    pub fn add_parallel_edge(&mut self, from: K, to: K, data: E) -> Result<()> {
        let from_node = self.add_node(from);
        let to_node = self.add_node(to);
        self.graph.add_edge(from_node, to_node, data)?;
        Ok(())
    }

    /// Returns the `NodeId` for `key`, if it exists.
    #[must_use]
    pub fn get_node_id(&self, key: &K) -> Option<NodeId> {
        self.key_to_node.get(key).copied()
    }

    /// Returns the key for `node_id`, if it exists.
    #[must_use]
    pub fn get_key(&self, node_id: NodeId) -> Option<&K> {
        self.keys.get(node_id.index())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns the underlying arena graph.
    ///
    /// Useful for running the engine over `NodeId`s and mapping results back with
    /// [`map_nodes_to_keys`](Self::map_nodes_to_keys).
    #[must_use]
    pub fn inner(&self) -> &DirectedGraph<(), E> {
        &self.graph
    }

    /// Returns an iterator over all keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.iter()
    }

    /// Maps `NodeId`s back to keys, skipping IDs that have none.
    #[must_use]
    pub fn map_nodes_to_keys(&self, nodes: &[NodeId]) -> Vec<K> {
        nodes
            .iter()
            .filter_map(|&node_id| self.get_key(node_id).cloned())
            .collect()
    }
}

impl<K> IndexedGraph<K, ()>
where
    K: Hash + Eq + Clone,
{
    /// Builds a graph from `(from, to)` key pairs.
    ///
    /// Vertices are enumerated in order of first appearance; duplicate pairs are
    /// collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge cannot be inserted.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to, ())?;
        }
        Ok(graph)
    }
}

// Algorithm convenience methods
impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone + Debug,
{
    /// Returns a new graph with the same keys and every edge reversed.
    ///
    /// # Errors
    ///
    /// Never fails for a well-formed `IndexedGraph`; the signature mirrors
    /// [`transpose`](crate::graph::transpose).
    pub fn transpose(&self) -> Result<IndexedGraph<K, ()>> {
        transpose(self)
    }

    /// Starts a lazy SCC decomposition over the keys of this graph.
    ///
    /// # Errors
    ///
    /// See [`decompose`](crate::graph::algorithms::decompose).
    pub fn components(&self) -> Result<StronglyConnectedComponents<K>> {
        algorithms::decompose(self)
    }

    /// Computes all strongly connected components as vectors of keys.
    ///
    /// Components are ordered sources-first with respect to the condensation DAG.
    ///
    /// # Errors
    ///
    /// See [`strongly_connected_components`](crate::graph::algorithms::strongly_connected_components).
    pub fn strongly_connected_components(&self) -> Result<Vec<Vec<K>>> {
        algorithms::strongly_connected_components(self)
    }
}

impl<K, E> GraphBase for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone + Debug,
{
    type Vertex = K;

    fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    fn vertices(&self) -> impl Iterator<Item = K> + '_ {
        self.keys.iter().cloned()
    }

    fn contains_vertex(&self, vertex: &K) -> bool {
        self.key_to_node.contains_key(vertex)
    }
}

impl<K, E> Successors for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone + Debug,
{
    fn successors(&self, vertex: &K) -> Result<impl Iterator<Item = K> + '_> {
        let node = self
            .get_node_id(vertex)
            .ok_or_else(|| Error::unknown_vertex(vertex))?;

        Ok(self
            .graph
            .successor_nodes(node)
            .map(|succ| self.keys[succ.index()].clone()))
    }
}
