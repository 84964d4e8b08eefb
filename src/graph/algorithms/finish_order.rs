//! Finish-order pass (first Kosaraju pass).
//!
//! Runs a depth-first search over the whole graph and records vertices in the order
//! their exploration completes. Both this pass and the component extraction pass
//! use an explicit work stack of frames instead of recursion, so the call stack
//! stays flat no matter how long the longest path in the graph is.

use std::vec;

use crate::{
    graph::{Successors, VisitedMap},
    Result,
};

/// One level of an explicit-stack DFS: a vertex and the successors still to look at.
pub(super) struct Frame<V> {
    /// The vertex this frame explores
    pub(super) vertex: V,
    /// Successors of `vertex` not yet examined, in graph order
    pub(super) pending: vec::IntoIter<V>,
}

impl<V> Frame<V> {
    /// Opens a frame for `vertex`, snapshotting its successor list.
    pub(super) fn enter<G>(graph: &G, vertex: V) -> Result<Self>
    where
        G: Successors<Vertex = V> + ?Sized,
    {
        let pending = graph.successors(&vertex)?.collect::<Vec<_>>().into_iter();
        Ok(Frame { vertex, pending })
    }
}

/// Computes the DFS finish order of every vertex in `graph`.
///
/// Vertices are taken as roots in [`vertices`](crate::graph::GraphBase::vertices)
/// order; every root still unvisited starts a new DFS so that disconnected parts are
/// covered. Within a DFS a vertex is marked when first entered, its unvisited
/// successors are explored in successor order, and only then is it pushed onto the
/// returned stack. The last element is therefore the vertex that finished last.
///
/// `visited` must track the vertex set of `graph`; vertices already marked in it are
/// treated as explored and will not appear in the result. Passing a fresh
/// [`VisitedMap::for_graph`] yields every vertex exactly once.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if a successor is not
/// tracked by `visited`, or the error of a failing
/// [`Successors::successors`] call.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{algorithms::finish_order, IndexedGraph, VisitedMap};
///
/// // A -> B -> C, plus an isolated D
/// let mut graph: IndexedGraph<&str, ()> = IndexedGraph::new();
/// graph.add_edge("A", "B", ())?;
/// graph.add_edge("B", "C", ())?;
/// graph.add_node("D");
///
/// let mut visited = VisitedMap::for_graph(&graph);
/// let finished = finish_order(&graph, &mut visited)?;
/// assert_eq!(finished, vec!["C", "B", "A", "D"]);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub fn finish_order<G>(graph: &G, visited: &mut VisitedMap<G::Vertex>) -> Result<Vec<G::Vertex>>
where
    G: Successors + ?Sized,
{
    let mut finished = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if visited.mark(&root)? {
            explore(graph, root, visited, &mut finished)?;
        }
    }

    Ok(finished)
}

/// DFS from an already marked `root`, appending vertices to `finished` as they complete.
fn explore<G>(
    graph: &G,
    root: G::Vertex,
    visited: &mut VisitedMap<G::Vertex>,
    finished: &mut Vec<G::Vertex>,
) -> Result<()>
where
    G: Successors + ?Sized,
{
    let mut stack = vec![Frame::enter(graph, root)?];

    while let Some(frame) = stack.last_mut() {
        match frame.pending.next() {
            Some(next) => {
                if visited.mark(&next)? {
                    stack.push(Frame::enter(graph, next)?);
                }
            }
            None => {
                if let Some(done) = stack.pop() {
                    finished.push(done.vertex);
                }
            }
        }
    }

    Ok(())
}
