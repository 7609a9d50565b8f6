//! Edge-list graph representation
//!
//! Edges are stored as a flat list of `(source, target, weight)` triples and
//! adjacency is rediscovered by linear scan. Vertex removal is a single
//! filter pass over the list.

use super::WeightedGraph;
use crate::errors::{PoetError, Result};
use crate::types::{Edge, Weight};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A weighted directed graph stored as a vertex set plus a list of edges
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    /// All vertex labels
    vertices: FxHashSet<String>,
    /// Edges in insertion order; an overwrite keeps the edge's position
    edges: Vec<Edge>,
}

impl EdgeListGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn find_edge(&self, source: &str, target: &str) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.source == source && e.target == target)
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            let mut seen = FxHashSet::default();
            for edge in &self.edges {
                debug_assert!(self.vertices.contains(&edge.source));
                debug_assert!(self.vertices.contains(&edge.target));
                debug_assert!(edge.weight > 0, "stored weight must be positive");
                debug_assert!(
                    seen.insert((edge.source.as_str(), edge.target.as_str())),
                    "duplicate edge {} -> {}",
                    edge.source,
                    edge.target
                );
            }
        }
    }
}

impl WeightedGraph for EdgeListGraph {
    fn add(&mut self, vertex: &str) -> bool {
        if self.vertices.contains(vertex) {
            return true;
        }
        self.vertices.insert(vertex.to_string());
        self.check_rep();
        false
    }

    fn set(&mut self, source: &str, target: &str, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            return Err(PoetError::invalid_weight(weight));
        }
        if weight > 0 {
            self.add(source);
            self.add(target);
        }

        let previous = match self.find_edge(source, target) {
            Some(idx) => {
                let previous = self.edges[idx].weight;
                if weight > 0 {
                    self.edges[idx].weight = weight;
                } else {
                    self.edges.remove(idx);
                }
                previous
            }
            None => {
                if weight > 0 {
                    self.edges.push(Edge::new(source, target, weight));
                }
                0
            }
        };

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &str) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        self.edges.retain(|e| !e.touches(vertex));
        self.check_rep();
        true
    }

    fn vertices(&self) -> FxHashSet<String> {
        self.vertices.clone()
    }

    fn sources(&self, target: &str) -> FxHashMap<String, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target == target)
            .map(|e| (e.source.clone(), e.weight))
            .collect()
    }

    fn targets(&self, source: &str) -> FxHashMap<String, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source == source)
            .map(|e| (e.target.clone(), e.weight))
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    fn contains(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn weight(&self, source: &str, target: &str) -> Weight {
        self.find_edge(source, target)
            .map(|idx| self.edges[idx].weight)
            .unwrap_or(0)
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl fmt::Display for EdgeListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
