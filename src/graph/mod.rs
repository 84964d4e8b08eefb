//! Directed graph infrastructure for SCC decomposition.
//!
//! This module provides the read-only graph capability the SCC engine consumes,
//! two concrete graph types that implement it, and the supporting pieces of the
//! algorithm that are not specific to one pass.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`] and [`DirectedGraph`] form an arena graph
//!   addressed by dense indices; [`IndexedGraph`] layers arbitrary keys on top
//! - **Traits**: [`GraphBase`] and [`Successors`] describe everything the engine needs
//!   from a graph, so any adjacency representation can be decomposed in place
//! - **Support**: [`transpose`] builds the reversed graph, [`VisitedMap`] tracks
//!   per-pass visited state over a declared vertex set
//! - **Algorithms**: the Kosaraju passes and the lazy producer in [`algorithms`]
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Node and edge identifiers use newtype wrappers to prevent accidental mixing of
//! indices and provide type safety at compile time.
//!
//! ## Read-Only Algorithms
//!
//! Graphs are built incrementally, then handed to the algorithms by shared
//! reference. The transpose is always a separate owned graph.
//!
//! # Usage Examples
//!
//! ## Creating a Simple Graph
//!
//! ```rust
//! use sccgraph::graph::DirectedGraph;
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph: DirectedGraph<&str, &str> = DirectedGraph::new();
//!
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//!
//! graph.add_edge(a, b, "A->B")?;
//! graph.add_edge(a, c, "A->C")?;
//! graph.add_edge(b, d, "B->D")?;
//! graph.add_edge(c, d, "C->D")?;
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! # Ok::<(), sccgraph::Error>(())
//! ```
//!
//! ## Decomposing a Graph
//!
//! ```rust
//! use sccgraph::graph::{algorithms, DirectedGraph};
//!
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, ())?;
//! graph.add_edge(b, a, ())?;
//! graph.add_edge(b, c, ())?;
//!
//! let sccs = algorithms::strongly_connected_components(&graph)?;
//! assert_eq!(sccs, vec![vec![a, b], vec![c]]);
//! # Ok::<(), sccgraph::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module implement [`Send`] and [`Sync`] when their generic
//! parameters do.

mod directed;
mod edge;
mod indexed;
mod node;
mod traits;
mod transpose;
mod visited;

pub mod algorithms;

// Re-export core types at module level
pub use directed::DirectedGraph;
pub use edge::EdgeId;
pub use indexed::IndexedGraph;
pub use node::NodeId;
pub use traits::{GraphBase, Successors};
pub use transpose::transpose;
pub use visited::VisitedMap;
