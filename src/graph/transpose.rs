//! Transpose builder.
//!
//! Kosaraju's second pass walks the graph against the direction of its edges. Rather
//! than asking every [`Successors`] implementation to also answer predecessor
//! queries, the engine materialises the reversed graph once as an owned
//! [`IndexedGraph`] and then uses the very same successor abstraction on it.

use crate::{
    graph::{GraphBase, IndexedGraph, Successors},
    Error, Result,
};

/// Builds a new graph with the same vertex set as `graph` and every edge reversed.
///
/// For every vertex `v` and every successor `w` of `v` in `graph`, the result has
/// `v` among the successors of `w`. Vertices are enumerated in the same order as in
/// `graph`, and the successors of a vertex in the result appear in the order their
/// sources are enumerated in `graph`. Parallel edges stay parallel.
///
/// The input graph is only read. The result owns all of its data.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `graph` reports a successor that is not part
/// of its own vertex set, or propagates the error of a failing
/// [`Successors::successors`] call.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{transpose, DirectedGraph, NodeId, Successors};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b, ())?;
///
/// let transposed = transpose(&graph)?;
/// assert_eq!(transposed.successors(&b)?.collect::<Vec<NodeId>>(), vec![a]);
/// assert_eq!(transposed.successors(&a)?.count(), 0);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub fn transpose<G>(graph: &G) -> Result<IndexedGraph<G::Vertex, ()>>
where
    G: Successors + ?Sized,
{
    // Edge count is unknown until every successor list has been walked
    let mut transposed = IndexedGraph::with_capacity(graph.vertex_count(), 0);
    for vertex in graph.vertices() {
        transposed.add_node(vertex);
    }

    for source in graph.vertices() {
        for target in graph.successors(&source)? {
            if !transposed.contains_vertex(&target) {
                return Err(Error::unknown_vertex(&target));
            }
            transposed.add_parallel_edge(target, source.clone(), ())?;
        }
    }

    Ok(transposed)
}
