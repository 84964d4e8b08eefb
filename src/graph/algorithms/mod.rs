//! Kosaraju strongly connected component decomposition.
//!
//! The decomposition is split along the two passes of Kosaraju's algorithm, and
//! both passes are exposed so they can be driven or tested on their own.
//!
//! # Available Algorithms
//!
//! ## Passes
//!
//! - [`finish_order`] - DFS over the graph recording vertices by completion time
//! - [`extract_component`] - DFS over the transpose collecting one component
//!
//! ## Decomposition
//!
//! - [`decompose`] - Lazy decomposition returning [`StronglyConnectedComponents`]
//! - [`strongly_connected_components`] - Eager decomposition into a `Vec`
//! - [`Kosaraju`] - Reusable handle over a borrowed graph
//!
//! # Traversal Strategy
//!
//! Both passes keep their DFS state on an explicit heap-allocated stack, so a
//! chain of a million vertices is handled as easily as a single cycle.
//!
//! # Examples
//!
//! ```rust
//! use sccgraph::graph::{algorithms, IndexedGraph};
//!
//! // Two disjoint cycles
//! let graph = IndexedGraph::from_edges([("A", "B"), ("B", "A"), ("C", "D"), ("D", "C")])?;
//!
//! for component in algorithms::decompose(&graph)? {
//!     assert_eq!(component?.len(), 2);
//! }
//! # Ok::<(), sccgraph::Error>(())
//! ```

mod finish_order;
mod kosaraju;

// Re-export all public items
pub use finish_order::finish_order;
pub use kosaraju::{
    decompose, extract_component, strongly_connected_components, Kosaraju,
    StronglyConnectedComponents,
};
