//! # graph_poet
//!
//! A mutable weighted directed graph with two interchangeable
//! representations, and a poetry generator built on top of it.
//!
//! ## Features
//!
//! - **Two representations**: [`EdgeListGraph`] and [`AdjacencyGraph`]
//!   implement the same [`WeightedGraph`] contract
//! - **Word affinity graphs**: corpus word-adjacency counts as edge weights
//! - **Bridge-word poems**: insert the heaviest two-hop word between
//!   adjacent input words
//! - **Tracing**: optional spans and events behind the `tracing` feature

/// Enter a tracing span for a processing stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("stage", stage = $name).entered();
    };
}

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod poet;
pub mod types;

// Re-export commonly used types
pub use errors::{PoetError, Result};
pub use graph::{copy_graph, AdjacencyGraph, EdgeListGraph, WeightedGraph};
pub use nlp::tokenizer::{read_corpus, Tokenizer};
pub use poet::{AffinityGraphBuilder, Bridge, GraphPoet};
pub use types::{Edge, PoetConfig, TieBreak, Weight};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
