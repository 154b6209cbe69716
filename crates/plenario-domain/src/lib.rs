//! Plenario Domain Layer
//!
//! This crate contains the graph model shared by every other Plenario crate.
//! It knows nothing about input tables or weighting policies; it only defines
//! legislators, the edges between them and the undirected graph that holds
//! both.
//!
//! ## Key Concepts
//!
//! - **Legislator**: a node, identified by a stable integer id
//! - **PairKey**: the normalized unordered pair of two distinct legislators
//! - **Edge**: one weighted link between a pair, remembering the orientation
//!   in which it was first discovered
//! - **LegislatorGraph**: undirected, simple graph with insertion-ordered
//!   nodes and edges
//!
//! ## Architecture
//!
//! - Pure data structures, no I/O
//! - The graph refuses self-loops and edges to unknown nodes, so the
//!   "simple graph over exactly the input legislators" invariant holds by
//!   construction
//! - Iteration order is insertion order everywhere, which makes sorted views
//!   reproducible

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod graph;
pub mod legislator;

// Re-exports for convenience
pub use edge::{Edge, EdgeAttributes, PairKey};
pub use graph::LegislatorGraph;
pub use legislator::{Legislator, LegislatorId};
