//! Word affinity graph construction
//!
//! Vertices are words; the weight of `w1 -> w2` is the number of times
//! `w1` is immediately followed by `w2` in the corpus.

use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::nlp::tokenizer::{read_corpus, Tokenizer};
use std::path::Path;

/// Folds a token stream into a word affinity graph
#[derive(Debug, Clone, Copy)]
pub struct AffinityGraphBuilder {
    /// Lowercase tokens before they become vertices
    case_fold: bool,
}

impl Default for AffinityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AffinityGraphBuilder {
    /// Create a builder that lowercases tokens
    pub fn new() -> Self {
        Self { case_fold: true }
    }

    /// Enable or disable lowercasing of tokens
    pub fn with_case_folding(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Build a graph from tokens, consuming them once and in order.
    ///
    /// A single token yields one vertex and no edges; no tokens yield the
    /// empty graph.
    pub fn build<G, I, S>(&self, tokens: I) -> Result<G>
    where
        G: WeightedGraph,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        trace_stage!("affinity_build");

        let mut graph = G::empty();
        let mut tokens = tokens.into_iter().map(|t| self.fold(t.as_ref()));

        let Some(mut current) = tokens.next() else {
            return Ok(graph);
        };
        graph.add(&current);

        for next in tokens {
            let previous = graph.set(&current, &next, 1)?;
            if previous != 0 {
                graph.set(&current, &next, previous + 1)?;
            }
            current = next;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built affinity graph"
        );

        Ok(graph)
    }

    /// Build a graph from in-memory corpus text
    pub fn from_text<G: WeightedGraph>(&self, corpus: &str) -> Result<G> {
        self.build(Tokenizer::new().tokens(corpus))
    }

    /// Build a graph from a corpus file.
    ///
    /// Fails without producing a graph if the file cannot be read.
    pub fn from_path<G: WeightedGraph>(&self, path: impl AsRef<Path>) -> Result<G> {
        let corpus = read_corpus(path)?;
        self.from_text(&corpus)
    }

    fn fold(&self, token: &str) -> String {
        if self.case_fold {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, EdgeListGraph};
    use rustc_hash::FxHashMap;

    fn weights(pairs: &[(&str, i64)]) -> FxHashMap<String, i64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_counts_adjacencies() {
        let graph: AdjacencyGraph = AffinityGraphBuilder::new()
            .from_text("Hello, HELLO, hello, goodbye!")
            .unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(
            graph.targets("hello,"),
            weights(&[("hello,", 2), ("goodbye!", 1)])
        );
        assert!(graph.targets("goodbye!").is_empty());
    }

    #[test]
    fn test_single_token() {
        let graph: EdgeListGraph = AffinityGraphBuilder::new().from_text("Hello").unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.contains("hello"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_corpus() {
        let graph: EdgeListGraph = AffinityGraphBuilder::new().from_text(" \n").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_build_from_iterator() {
        let tokens = vec!["to", "be", "or", "not", "to", "be"];
        let graph: AdjacencyGraph = AffinityGraphBuilder::new().build(tokens).unwrap();

        assert_eq!(graph.weight("to", "be"), 2);
        assert_eq!(graph.weight("be", "or"), 1);
        assert_eq!(graph.weight("not", "to"), 1);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_without_case_folding() {
        let graph: AdjacencyGraph = AffinityGraphBuilder::new()
            .with_case_folding(false)
            .from_text("Go go Go")
            .unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.weight("Go", "go"), 1);
        assert_eq!(graph.weight("go", "Go"), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<AdjacencyGraph> =
            AffinityGraphBuilder::new().from_path(dir.path().join("xyz.txt"));

        assert!(result.unwrap_err().is_io());
    }
}
