//! Bridge-word poem generation
//!
//! Given an input text, [`GraphPoet`] tries to insert a bridge word between
//! every adjacent pair of input words. The bridge between `w1` and `w2` is
//! the word `b` for which `w1 -> b -> w2` is a two-edge path of maximum
//! combined weight in the affinity graph. Input words keep their case;
//! bridge words are rendered as stored in the graph (lowercase when the
//! corpus was case-folded).
//!
//! ```
//! use graph_poet::GraphPoet;
//!
//! let poet: GraphPoet = GraphPoet::from_text(
//!     "This is a test of the Mugar Omni Theater sound system.",
//! ).unwrap();
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! ```

use crate::errors::Result;
use crate::graph::{AdjacencyGraph, WeightedGraph};
use crate::nlp::tokenizer::{read_corpus, Tokenizer};
use crate::poet::affinity::AffinityGraphBuilder;
use crate::types::{PoetConfig, TieBreak};
use std::fmt;
use std::path::Path;

/// A bridge word and the combined weight of its two-edge path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    pub word: String,
    /// Sum of both edge weights; widened so two `Weight::MAX` edges fit
    pub weight: i128,
}

/// A graph-based poetry generator
#[derive(Debug, Clone)]
pub struct GraphPoet<G: WeightedGraph = AdjacencyGraph> {
    graph: G,
    config: PoetConfig,
}

impl<G: WeightedGraph> GraphPoet<G> {
    /// Create a poet from corpus text with the default config
    pub fn from_text(corpus: &str) -> Result<Self> {
        Self::from_text_with_config(corpus, PoetConfig::default())
    }

    /// Create a poet from corpus text
    pub fn from_text_with_config(corpus: &str, config: PoetConfig) -> Result<Self> {
        let graph = AffinityGraphBuilder::new()
            .with_case_folding(config.case_fold_corpus)
            .from_text(corpus)?;
        Ok(Self { graph, config })
    }

    /// Create a poet from a corpus file with the default config.
    ///
    /// Fails if the corpus cannot be found or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_config(path, PoetConfig::default())
    }

    /// Create a poet from a corpus file
    pub fn from_path_with_config(path: impl AsRef<Path>, config: PoetConfig) -> Result<Self> {
        let corpus = read_corpus(path)?;
        Self::from_text_with_config(&corpus, config)
    }

    /// Create a poet over an already built affinity graph
    pub fn from_graph(graph: G) -> Self {
        Self {
            graph,
            config: PoetConfig::default(),
        }
    }

    /// Builder method: set the tie-breaking rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Get the active configuration
    pub fn config(&self) -> &PoetConfig {
        &self.config
    }

    /// Get an independent copy of the affinity graph
    pub fn graph(&self) -> G
    where
        G: Clone,
    {
        self.graph.clone()
    }

    /// Find the best bridge word between `current` and `next`, if any
    pub fn bridge_word(&self, current: &str, next: &str) -> Option<Bridge> {
        let from = self.config.fold(current);
        let to = self.config.fold(next);

        let mut best: Option<Bridge> = None;
        for (middle, first) in self.graph.targets(&from) {
            let second = self.graph.weight(&middle, &to);
            if second == 0 {
                continue;
            }

            let weight = i128::from(first) + i128::from(second);
            let better = match &best {
                None => true,
                Some(b) if weight != b.weight => weight > b.weight,
                Some(b) => self.config.tie_break == TieBreak::Lexicographic && middle < b.word,
            };
            if better {
                best = Some(Bridge {
                    word: middle,
                    weight,
                });
            }
        }
        best
    }

    /// Generate a poem from `input`.
    ///
    /// Words are joined by single spaces. No input words give the empty
    /// string; a single word is returned unchanged.
    pub fn poem(&self, input: &str) -> String {
        trace_stage!("poem");

        let mut words: Vec<String> = Vec::new();
        for word in Tokenizer::new().tokens(input) {
            if let Some(previous) = words.last() {
                if let Some(bridge) = self.bridge_word(previous, &word) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        before = %previous,
                        after = %word,
                        bridge = %bridge.word,
                        weight = %bridge.weight,
                        "inserted bridge word"
                    );
                    words.push(bridge.word);
                }
            }
            words.push(word);
        }
        words.join(" ")
    }
}

impl<G: WeightedGraph> fmt::Display for GraphPoet<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.graph.render())
    }
}
