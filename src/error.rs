use thiserror::Error;

/// The generic Error type, which covers every failure this library can report.
///
/// Decomposition is deterministic and in-memory, so there are only two ways for
/// it to fail: the graph refers to a vertex it never declared, or a graph was
/// constructed inconsistently. Both abort the current operation; nothing is
/// retried or silently skipped.
///
/// # Examples
///
/// ```rust
/// use sccgraph::{graph::{DirectedGraph, NodeId}, Error};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_node(());
///
/// match graph.add_edge(a, NodeId::new(7), ()) {
///     Err(Error::GraphError(message)) => assert!(message.contains("n7")),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex outside the graph's declared vertex set was referenced.
    ///
    /// Raised when successors are requested for, a traversal is rooted at, or
    /// visited state is queried for a vertex that the graph does not enumerate.
    /// Such a vertex is never treated as one without successors, since that
    /// would leave it outside the visited bookkeeping.
    ///
    /// The payload is the `Debug` rendering of the offending vertex.
    #[error("Unknown vertex - {0}")]
    UnknownVertex(String),

    /// Graph construction error.
    ///
    /// Raised when a graph is built inconsistently, e.g. an edge endpoint
    /// refers to a node that does not exist.
    #[error("{0}")]
    GraphError(String),
}

impl Error {
    /// Builds an [`Error::UnknownVertex`] from any `Debug` vertex.
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{vertex:?}"))
    }
}
