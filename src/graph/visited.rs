//! Per-pass visited-state bookkeeping.
//!
//! A [`VisitedMap`] is keyed by exactly the vertices a graph declares. Each DFS pass
//! of the decomposition starts from a map where every vertex is unvisited, marks
//! vertices at most once, and never clears a mark until the next [`VisitedMap::reset`].
//! Touching a vertex outside the key set is an error rather than an implicit insert,
//! so a dangling successor cannot slip through unmarked.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::{graph::GraphBase, Error, Result};

/// Visited flags for the declared vertex set of one graph.
///
/// # Examples
///
/// ```rust
/// use sccgraph::graph::{IndexedGraph, VisitedMap};
///
/// let mut graph: IndexedGraph<&str, ()> = IndexedGraph::new();
/// graph.add_edge("A", "B", ())?;
///
/// let mut visited = VisitedMap::for_graph(&graph);
/// assert!(visited.mark(&"A")?);
/// assert!(!visited.mark(&"A")?);
/// assert!(visited.is_visited(&"A")?);
/// assert!(!visited.is_visited(&"B")?);
/// assert!(visited.mark(&"Z").is_err());
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct VisitedMap<V> {
    flags: HashMap<V, bool>,
    marked: usize,
}

impl<V> VisitedMap<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates a map with every vertex of `graph` unvisited.
    #[must_use]
    pub fn for_graph<G>(graph: &G) -> Self
    where
        G: GraphBase<Vertex = V> + ?Sized,
    {
        Self::from_vertices(graph.vertices())
    }

    /// Creates a map with the given vertices unvisited.
    ///
    /// Duplicates are collapsed.
    pub fn from_vertices(vertices: impl IntoIterator<Item = V>) -> Self {
        VisitedMap {
            flags: vertices.into_iter().map(|v| (v, false)).collect(),
            marked: 0,
        }
    }

    /// Marks `vertex` as visited.
    ///
    /// Returns `true` if the vertex was unvisited before this call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `vertex` is not a key of this map.
    pub fn mark(&mut self, vertex: &V) -> Result<bool> {
        let flag = self
            .flags
            .get_mut(vertex)
            .ok_or_else(|| Error::unknown_vertex(vertex))?;
        if *flag {
            return Ok(false);
        }
        *flag = true;
        self.marked += 1;
        Ok(true)
    }

    /// Returns whether `vertex` has been visited in the current pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `vertex` is not a key of this map.
    pub fn is_visited(&self, vertex: &V) -> Result<bool> {
        self.flags
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }

    /// Returns `true` if `vertex` is one of the keys of this map.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.flags.contains_key(vertex)
    }

    /// Clears every mark, keeping the key set.
    pub fn reset(&mut self) {
        self.flags.values_mut().for_each(|flag| *flag = false);
        self.marked = 0;
    }

    /// Number of vertices marked since creation or the last reset.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.marked
    }

    /// Number of vertices tracked by this map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the map tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns `true` once every tracked vertex is marked.
    #[must_use]
    pub fn all_visited(&self) -> bool {
        self.marked == self.flags.len()
    }
}
