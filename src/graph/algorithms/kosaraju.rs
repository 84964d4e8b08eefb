//! Component extraction pass and the lazy SCC producer (second Kosaraju pass).
//!
//! [`decompose`] runs the finish-order pass and builds the transpose up front, then
//! hands back a [`StronglyConnectedComponents`] iterator. The iterator owns the
//! finish stack, a visited map and the transposed graph, and every call to
//! [`Iterator::next`] resumes popping the finish stack where the previous call
//! stopped. Nothing is recomputed between pulls.
//!
//! # Emission Order
//!
//! Roots are popped in strictly decreasing finish time. The DFS from such a root in
//! the transpose can only reach vertices of its own component or of components that
//! were already emitted, so components come out sources-first with respect to the
//! condensation DAG.
//!
//! # Complexity
//!
//! - Time: O(V + E)
//! - Space: O(V + E) for the transposed graph, O(V) for the bookkeeping

use std::{fmt::Debug, hash::Hash, iter::FusedIterator};

use crate::{
    graph::{
        algorithms::finish_order::{finish_order, Frame},
        transpose, IndexedGraph, Successors, VisitedMap,
    },
    Error, Result,
};

/// Collects the component rooted at `root` by a DFS over `transposed`.
///
/// Returns `Ok(None)` if `root` was already swept into an earlier component.
/// Otherwise every vertex reachable from `root` through unvisited vertices of
/// `transposed` is marked and returned in DFS preorder, starting with `root`.
///
/// `transposed` must be the transpose of the graph the finish order was computed
/// on. Running this over the original graph instead silently merges components.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `root` or one of the traversed successors is
/// not tracked by `visited`, or the error of a failing [`Successors::successors`]
/// call.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{algorithms::extract_component, transpose, IndexedGraph, VisitedMap};
///
/// // A <-> B -> C
/// let graph = IndexedGraph::from_edges([('A', 'B'), ('B', 'A'), ('B', 'C')])?;
/// let transposed = transpose(&graph)?;
/// let mut visited = VisitedMap::for_graph(&transposed);
///
/// assert_eq!(extract_component(&transposed, 'A', &mut visited)?, Some(vec!['A', 'B']));
/// assert_eq!(extract_component(&transposed, 'B', &mut visited)?, None);
/// assert_eq!(extract_component(&transposed, 'C', &mut visited)?, Some(vec!['C']));
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub fn extract_component<T>(
    transposed: &T,
    root: T::Vertex,
    visited: &mut VisitedMap<T::Vertex>,
) -> Result<Option<Vec<T::Vertex>>>
where
    T: Successors + ?Sized,
{
    if !visited.mark(&root)? {
        return Ok(None);
    }

    let mut component = vec![root.clone()];
    let mut stack = vec![Frame::enter(transposed, root)?];

    while let Some(frame) = stack.last_mut() {
        match frame.pending.next() {
            Some(next) => {
                if visited.mark(&next)? {
                    component.push(next.clone());
                    stack.push(Frame::enter(transposed, next)?);
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(Some(component))
}

/// Where a decomposition currently stands.
#[derive(Debug)]
enum Phase<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Finish order and transpose are built; roots are being popped
    Extracting {
        /// Remaining finish stack, last finished on top
        finish: Vec<V>,
        /// Visited state of the extraction pass
        visited: VisitedMap<V>,
        /// Owned transpose of the input graph
        transposed: IndexedGraph<V, ()>,
    },
    /// Finish stack exhausted or the decomposition failed
    Done,
}

/// Lazy sequence of strongly connected components.
///
/// Created by [`decompose`]. Each item is one component as a non-empty `Vec` of
/// vertices; together the items partition the vertex set of the input graph.
///
/// The iterator is fused. If extraction fails, the error is yielded once and the
/// iterator is finished afterwards. Dropping it early releases all of its state and
/// has no effect on other decompositions.
#[derive(Debug)]
pub struct StronglyConnectedComponents<V>
where
    V: Clone + Eq + Hash + Debug,
{
    phase: Phase<V>,
    emitted: usize,
}

impl<V> StronglyConnectedComponents<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Number of finish-stack entries not yet popped.
    ///
    /// This is an upper bound on the number of components still to come; entries
    /// already swept into an emitted component are discarded when popped.
    #[must_use]
    pub fn remaining_roots(&self) -> usize {
        match &self.phase {
            Phase::Extracting { finish, .. } => finish.len(),
            Phase::Done => 0,
        }
    }

    /// Number of components yielded so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns `true` once the sequence is exhausted or has failed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }
}

impl<V> Iterator for StronglyConnectedComponents<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Item = Result<Vec<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        let Phase::Extracting {
            finish,
            visited,
            transposed,
        } = &mut self.phase
        else {
            return None;
        };

        while let Some(root) = finish.pop() {
            match extract_component(&*transposed, root, visited) {
                Ok(Some(component)) => {
                    self.emitted += 1;
                    log::trace!(
                        "component #{} with {} vertices ({} roots left)",
                        self.emitted,
                        component.len(),
                        finish.len()
                    );
                    return Some(Ok(component));
                }
                Ok(None) => {}
                Err(error) => {
                    self.phase = Phase::Done;
                    return Some(Err(abort(error)));
                }
            }
        }

        log::debug!(
            "SCC decomposition finished with {} components",
            self.emitted
        );
        self.phase = Phase::Done;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_roots()))
    }
}

impl<V> FusedIterator for StronglyConnectedComponents<V> where V: Clone + Eq + Hash + Debug {}

fn abort(error: Error) -> Error {
    log::warn!("SCC decomposition aborted: {error}");
    error
}

/// Starts a lazy strongly connected component decomposition of `graph`.
///
/// The finish-order pass and the transpose are computed before this returns; the
/// components themselves are extracted one per call to [`Iterator::next`].
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `graph` reports a successor outside its own
/// vertex set, or the error of a failing [`Successors::successors`] call. An empty
/// graph is not an error; it yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{algorithms::decompose, IndexedGraph};
///
/// // A -> B -> C, no cycles
/// let graph = IndexedGraph::from_edges([("A", "B"), ("B", "C")])?;
///
/// let mut components = decompose(&graph)?;
/// assert_eq!(components.next().transpose()?, Some(vec!["A"]));
/// assert_eq!(components.remaining_roots(), 2);
///
/// let rest = components.collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(rest, vec![vec!["B"], vec!["C"]]);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub fn decompose<G>(graph: &G) -> Result<StronglyConnectedComponents<G::Vertex>>
where
    G: Successors + ?Sized,
{
    let mut visited = VisitedMap::for_graph(graph);
    let finish = finish_order(graph, &mut visited).map_err(abort)?;
    let transposed = transpose(graph).map_err(abort)?;
    visited.reset();

    log::debug!(
        "SCC decomposition started: {} vertices, {} edges",
        transposed.node_count(),
        transposed.edge_count()
    );

    Ok(StronglyConnectedComponents {
        phase: Phase::Extracting {
            finish,
            visited,
            transposed,
        },
        emitted: 0,
    })
}

/// Computes all strongly connected components of `graph` eagerly.
///
/// Equivalent to collecting [`decompose`]. Components are ordered sources-first
/// with respect to the condensation DAG; vertices within a component are in no
/// particular order.
///
/// # Errors
///
/// Same as [`decompose`], plus any error hit while extracting a component.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{algorithms::strongly_connected_components, DirectedGraph};
///
/// // Simple cycle: A -> B -> C -> A
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
/// graph.add_edge(c, a, ())?;
///
/// let sccs = strongly_connected_components(&graph)?;
/// assert_eq!(sccs.len(), 1);
/// assert_eq!(sccs[0].len(), 3);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Result<Vec<Vec<G::Vertex>>>
where
    G: Successors + ?Sized,
{
    decompose(graph)?.collect()
}

/// Reusable handle for decomposing one borrowed graph.
///
/// Every call to [`components`](Self::components) starts an independent run with
/// fresh state, so partially consumed iterators never influence later ones.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{algorithms::Kosaraju, IndexedGraph};
///
/// let graph = IndexedGraph::from_edges([(1, 2), (2, 1), (2, 3)])?;
/// let kosaraju = Kosaraju::new(&graph);
///
/// // Peek at the first component only
/// let first = kosaraju.components()?.next().transpose()?;
/// assert_eq!(first.map(|c| c.len()), Some(2));
///
/// // A new run starts from scratch
/// assert_eq!(kosaraju.collect()?.len(), 2);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub struct Kosaraju<'g, G>
where
    G: ?Sized,
{
    graph: &'g G,
}

impl<G> Clone for Kosaraju<'_, G>
where
    G: ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Kosaraju<'_, G> where G: ?Sized {}

impl<'g, G> Kosaraju<'g, G>
where
    G: Successors + ?Sized,
{
    /// Creates a handle over `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Kosaraju { graph }
    }

    /// Returns the graph this handle decomposes.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Starts a new lazy decomposition.
    ///
    /// # Errors
    ///
    /// See [`decompose`].
    pub fn components(&self) -> Result<StronglyConnectedComponents<G::Vertex>> {
        decompose(self.graph)
    }

    /// Runs a full decomposition and collects every component.
    ///
    /// # Errors
    ///
    /// See [`strongly_connected_components`].
    pub fn collect(&self) -> Result<Vec<Vec<G::Vertex>>> {
        strongly_connected_components(self.graph)
    }
}
