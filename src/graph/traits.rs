//! Trait definitions for the graph capability consumed by the SCC engine.
//!
//! The engine only ever needs to *read* a graph: enumerate its vertices and ask for
//! the direct successors of one of them. These two needs are split across a small
//! trait hierarchy so that any adjacency representation can be plugged in without
//! copying it first.
//!
//! - [`GraphBase`] - the vertex type, vertex enumeration and membership
//! - [`Successors`] - forward edge traversal (outgoing edges)
//!
//! # Vertex Identity
//!
//! Vertices are opaque values. The engine compares and hashes them, clones them into
//! its own bookkeeping, and renders them with `Debug` when reporting an
//! [`Error::UnknownVertex`](crate::Error::UnknownVertex). Nothing else is assumed.
//!
//! # Enumeration Order
//!
//! The order produced by [`GraphBase::vertices`] selects the roots of the first DFS
//! pass and the order produced by [`Successors::successors`] drives descent. Neither
//! influences *which* components are found. They do influence the order components
//! are emitted in and the order of vertices within a component, so an implementation
//! whose enumeration is not stable across calls yields correct but run-dependent
//! emission order.

use std::{fmt::Debug, hash::Hash};

use crate::Result;

/// Base trait describing the vertex set of a graph.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{DirectedGraph, GraphBase};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// graph.add_node("B");
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert!(graph.contains_vertex(&a));
/// assert_eq!(graph.vertices().count(), 2);
/// ```
pub trait GraphBase {
    /// Identifier of a vertex.
    type Vertex: Clone + Eq + Hash + Debug;

    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over every vertex, each exactly once.
    ///
    /// The order must be deterministic for a given graph for emission order to be
    /// reproducible.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Returns `true` if `vertex` belongs to the declared vertex set.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Errors
///
/// Implementations must fail with [`Error::UnknownVertex`](crate::Error::UnknownVertex)
/// when asked for the successors of a vertex that [`GraphBase::contains_vertex`]
/// rejects. A declared vertex without outgoing edges yields an empty iterator.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{IndexedGraph, Successors};
///
/// let mut graph: IndexedGraph<char, ()> = IndexedGraph::new();
/// graph.add_edge('a', 'b', ())?;
/// graph.add_edge('a', 'c', ())?;
///
/// let succ: Vec<char> = graph.successors(&'a')?.collect();
/// assert_eq!(succ, vec!['b', 'c']);
/// assert_eq!(graph.successors(&'c')?.count(), 0);
/// assert!(graph.successors(&'z').is_err());
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the direct successors of `vertex`.
    ///
    /// For a directed edge `(u, v)`, `v` is a successor of `u`. Parallel edges
    /// yield the target once per edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `vertex` is not
    /// part of the graph.
    fn successors(&self, vertex: &Self::Vertex)
        -> Result<impl Iterator<Item = Self::Vertex> + '_>;
}
