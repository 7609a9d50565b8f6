//! Mutable weighted directed graph
//!
//! [`WeightedGraph`] is the behavioural contract; [`EdgeListGraph`] and
//! [`AdjacencyGraph`] are two interchangeable representations of it.
//! Callers cannot tell them apart except through render order and
//! performance.
//!
//! Representation invariant, holding after every public operation:
//!
//! - every edge's endpoints are in the vertex set
//! - at most one edge per ordered `(source, target)` pair
//! - every stored weight is strictly positive

pub mod adjacency;
pub mod edges;

pub use adjacency::AdjacencyGraph;
pub use edges::EdgeListGraph;

use crate::errors::Result;
use crate::types::{Edge, Weight};
use rustc_hash::{FxHashMap, FxHashSet};

/// A mutable weighted directed graph with string vertex labels.
///
/// Labels are case-sensitive. Every query returning a set or map returns an
/// owned snapshot; mutating the graph afterwards does not affect it.
pub trait WeightedGraph: Default {
    /// Create an empty graph
    fn empty() -> Self {
        Self::default()
    }

    /// Add a vertex.
    ///
    /// Returns `true` if the vertex was already present (no-op), `false` if
    /// it was newly inserted.
    fn add(&mut self, vertex: &str) -> bool;

    /// Add, change, or remove the edge `source -> target`.
    ///
    /// A positive `weight` inserts both endpoints if needed and creates or
    /// overwrites the edge. Zero removes the edge if present; vertices are
    /// never removed by `set`. Returns the edge's previous weight, or 0 if
    /// there was no such edge.
    ///
    /// Fails with [`PoetError::InvalidWeight`](crate::PoetError::InvalidWeight)
    /// for a negative weight, leaving the graph untouched.
    fn set(&mut self, source: &str, target: &str, weight: Weight) -> Result<Weight>;

    /// Remove a vertex together with every incoming and outgoing edge.
    ///
    /// Returns `true` if the vertex was present.
    fn remove(&mut self, vertex: &str) -> bool;

    /// Snapshot of all vertex labels
    fn vertices(&self) -> FxHashSet<String>;

    /// All vertices with an edge into `target`, mapped to that edge's weight.
    ///
    /// Empty when `target` has no incoming edges or is not in the graph.
    fn sources(&self, target: &str) -> FxHashMap<String, Weight>;

    /// All vertices `source` has an edge to, mapped to that edge's weight.
    ///
    /// Empty when `source` has no outgoing edges or is not in the graph.
    fn targets(&self, source: &str) -> FxHashMap<String, Weight>;

    /// Snapshot of every edge, in render order
    fn edges(&self) -> Vec<Edge>;

    /// Check whether `vertex` is in the graph
    fn contains(&self, vertex: &str) -> bool;

    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Weight of `source -> target`, or 0 if there is no such edge
    fn weight(&self, source: &str, target: &str) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// Number of edges
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Check if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// One `(source -> target, weight)` line per edge, newline-joined.
    ///
    /// The empty graph renders as the empty string.
    fn render(&self) -> String {
        self.edges()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

/// Rebuild `src` in another (or the same) representation.
///
/// Vertices are inserted in sorted order, then edges in `src`'s render
/// order, so isolated vertices survive the copy.
pub fn copy_graph<S, D>(src: &S) -> Result<D>
where
    S: WeightedGraph,
    D: WeightedGraph,
{
    let mut dst = D::empty();

    let mut vertices: Vec<String> = src.vertices().into_iter().collect();
    vertices.sort_unstable();
    for vertex in &vertices {
        dst.add(vertex);
    }

    for edge in src.edges() {
        dst.set(&edge.source, &edge.target, edge.weight)?;
    }

    Ok(dst)
}
