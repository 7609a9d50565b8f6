//! Adjacency-map graph representation
//!
//! Each vertex owns an FxHashMap of its outgoing targets, giving O(1)
//! outgoing lookups. Removing a vertex has to visit every remaining vertex
//! to strip edges pointing at it.

use super::WeightedGraph;
use crate::errors::{PoetError, Result};
use crate::types::{Edge, Weight};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A vertex and its outgoing edges
#[derive(Debug, Clone)]
struct VertexNode {
    label: String,
    /// Outgoing edges: target label -> weight
    targets: FxHashMap<String, Weight>,
}

impl VertexNode {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            targets: FxHashMap::default(),
        }
    }
}

/// A weighted directed graph stored as per-vertex outgoing maps
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Maps label -> index into `nodes`
    label_to_id: FxHashMap<String, usize>,
    /// Vertices in insertion order
    nodes: Vec<VertexNode>,
}

impl AdjacencyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated vertex capacity
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            nodes: Vec::with_capacity(vertex_capacity),
        }
    }

    fn node(&self, label: &str) -> Option<&VertexNode> {
        self.label_to_id.get(label).map(|&id| &self.nodes[id])
    }

    /// Get or create the node for `label`, returning its index
    fn get_or_create_node(&mut self, label: &str) -> usize {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len();
        self.label_to_id.insert(label.to_string(), id);
        self.nodes.push(VertexNode::new(label));
        id
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            debug_assert_eq!(self.label_to_id.len(), self.nodes.len());
            for (id, node) in self.nodes.iter().enumerate() {
                debug_assert_eq!(self.label_to_id.get(&node.label), Some(&id));
                for (target, &weight) in &node.targets {
                    debug_assert!(self.label_to_id.contains_key(target));
                    debug_assert!(weight > 0, "stored weight must be positive");
                }
            }
        }
    }
}

impl WeightedGraph for AdjacencyGraph {
    fn add(&mut self, vertex: &str) -> bool {
        if self.label_to_id.contains_key(vertex) {
            return true;
        }
        self.get_or_create_node(vertex);
        self.check_rep();
        false
    }

    fn set(&mut self, source: &str, target: &str, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            return Err(PoetError::invalid_weight(weight));
        }

        let previous = if weight > 0 {
            let id = self.get_or_create_node(source);
            self.get_or_create_node(target);
            self.nodes[id]
                .targets
                .insert(target.to_string(), weight)
                .unwrap_or(0)
        } else {
            match self.label_to_id.get(source) {
                Some(&id) => self.nodes[id].targets.remove(target).unwrap_or(0),
                None => 0,
            }
        };

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &str) -> bool {
        let Some(id) = self.label_to_id.remove(vertex) else {
            return false;
        };

        self.nodes.remove(id);
        for (shifted, node) in self.nodes.iter().enumerate().skip(id) {
            self.label_to_id.insert(node.label.clone(), shifted);
        }
        for node in &mut self.nodes {
            node.targets.remove(vertex);
        }

        self.check_rep();
        true
    }

    fn vertices(&self) -> FxHashSet<String> {
        self.nodes.iter().map(|n| n.label.clone()).collect()
    }

    fn sources(&self, target: &str) -> FxHashMap<String, Weight> {
        self.nodes
            .iter()
            .filter_map(|n| n.targets.get(target).map(|&w| (n.label.clone(), w)))
            .collect()
    }

    fn targets(&self, source: &str) -> FxHashMap<String, Weight> {
        self.node(source)
            .map(|n| n.targets.clone())
            .unwrap_or_default()
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for node in &self.nodes {
            let mut targets: Vec<_> = node.targets.iter().collect();
            targets.sort_unstable_by(|a, b| a.0.cmp(b.0));
            edges.extend(
                targets
                    .into_iter()
                    .map(|(target, &weight)| Edge::new(node.label.as_str(), target.as_str(), weight)),
            );
        }
        edges
    }

    fn contains(&self, vertex: &str) -> bool {
        self.label_to_id.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn weight(&self, source: &str, target: &str) -> Weight {
        self.node(source)
            .and_then(|n| n.targets.get(target).copied())
            .unwrap_or(0)
    }

    fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.targets.len()).sum()
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
