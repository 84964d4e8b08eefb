//! # sccgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the sccgraph library. Import this module to get quick access to everything needed
//! to build a graph and decompose it into strongly connected components.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all sccgraph operations
pub use crate::Error;

/// The result type used throughout sccgraph
pub use crate::Result;

// ================================================================================================
// Graph Types
// ================================================================================================

/// Arena graph addressed by dense node indices
pub use crate::graph::DirectedGraph;

/// Graph keyed by arbitrary caller-supplied vertex values
pub use crate::graph::IndexedGraph;

/// Strongly-typed node and edge identifiers
pub use crate::graph::{EdgeId, NodeId};

// ================================================================================================
// Graph Capability
// ================================================================================================

/// Traits describing the read-only graph surface the engine consumes
pub use crate::graph::{GraphBase, Successors};

/// Per-pass visited bookkeeping over a declared vertex set
pub use crate::graph::VisitedMap;

/// Builds the edge-reversed copy of a graph
pub use crate::graph::transpose;

// ================================================================================================
// SCC Decomposition
// ================================================================================================

/// Lazy and eager entry points
pub use crate::graph::algorithms::{decompose, strongly_connected_components};

/// Reusable decomposition handle and the lazy component iterator
pub use crate::graph::algorithms::{Kosaraju, StronglyConnectedComponents};

/// The individual Kosaraju passes
pub use crate::graph::algorithms::{extract_component, finish_order};
