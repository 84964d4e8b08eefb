// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # sccgraph
//!
//! Lazy strongly connected component (SCC) decomposition for directed graphs,
//! built on Kosaraju's two-pass depth-first search.
//!
//! The engine works against a small read-only graph capability
//! ([`graph::GraphBase`] + [`graph::Successors`]) and is generic over the vertex
//! identifier type. Two concrete graph types are provided:
//!
//! - [`graph::DirectedGraph`] - an arena graph addressed by [`graph::NodeId`]
//! - [`graph::IndexedGraph`] - a graph keyed by arbitrary domain values
//!
//! ## Quick Start
//!
//! ```rust
//! use sccgraph::prelude::*;
//!
//! let mut graph: IndexedGraph<&str, ()> = IndexedGraph::new();
//! graph.add_edge("A", "B", ())?;
//! graph.add_edge("B", "C", ())?;
//! graph.add_edge("C", "A", ())?;
//! graph.add_edge("C", "D", ())?;
//!
//! let mut components = decompose(&graph)?;
//!
//! // Components arrive lazily, sources of the condensation first
//! let first = components.next().unwrap()?;
//! assert_eq!(first.len(), 3);
//! let second = components.next().unwrap()?;
//! assert_eq!(second, vec!["D"]);
//! assert!(components.next().is_none());
//! # Ok::<(), sccgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - graph types, the capability traits and the transpose builder
//! - [`graph::algorithms`] - the finish-order pass, component extraction and
//!   the lazy producer
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Logging
//!
//! The crate reports progress through the [`log`] facade (`debug` for
//! decomposition start/end, `trace` per component). No logger is installed;
//! that is up to the host application.
//!
//! ## Thread Safety
//!
//! A decomposition is single-threaded and owns all of its state. Graph types are
//! [`Send`] and [`Sync`] when their payloads are, so independent decompositions
//! can run on separate threads against a shared graph.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use sccgraph::prelude::*;
///
/// let graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// assert!(strongly_connected_components(&graph)?.is_empty());
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub mod prelude;

/// Directed graph infrastructure and SCC algorithms.
///
/// See the module documentation for the graph model and
/// [`graph::algorithms`] for the Kosaraju engine.
pub mod graph;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Example
///
/// ```rust
/// use sccgraph::{graph::IndexedGraph, Result};
///
/// fn build() -> Result<IndexedGraph<u32, ()>> {
///     let mut graph = IndexedGraph::new();
///     graph.add_edge(1, 2, ())?;
///     Ok(graph)
/// }
/// # build().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all graph and decomposition operations.
///
/// See [`Error`] for the individual variants.
pub use error::Error;
