//! Core types for graph_poet
//!
//! This module defines the value types shared by both graph
//! representations and the poet configuration.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge weight.
///
/// Signed so that a negative argument to `set` can be rejected instead of
/// wrapping. Stored weights are always strictly positive.
pub type Weight = i64;

// ============================================================================
// Edge
// ============================================================================

/// A directed, weighted edge snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source vertex label
    pub source: String,
    /// Target vertex label
    pub target: String,
    /// Edge weight (always > 0 for a stored edge)
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Check whether `vertex` is either endpoint of this edge
    pub fn touches(&self, vertex: &str) -> bool {
        self.source == vertex || self.target == vertex
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {}, {})", self.source, self.target, self.weight)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// How to choose among bridge words sharing the maximum combined weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Lexicographically smallest bridge word wins (deterministic across
    /// representations)
    #[default]
    Lexicographic,
    /// First maximum in the graph's own `targets` enumeration order
    FirstFound,
}

/// Configuration for [`GraphPoet`](crate::poet::generator::GraphPoet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoetConfig {
    /// Tie-breaking rule for equally weighted bridge words
    pub tie_break: TieBreak,
    /// Lowercase corpus tokens and lookup words (the standard behaviour)
    pub case_fold_corpus: bool,
}

impl Default for PoetConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Lexicographic,
            case_fold_corpus: true,
        }
    }
}

impl PoetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder method: set the tie-breaking rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builder method: enable or disable corpus case folding
    pub fn with_case_fold_corpus(mut self, case_fold: bool) -> Self {
        self.case_fold_corpus = case_fold;
        self
    }

    /// Fold `word` for graph lookup according to this config
    pub fn fold(&self, word: &str) -> String {
        if self.case_fold_corpus {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PoetError;

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("a", "b", 1);
        assert_eq!(edge.to_string(), "(a -> b, 1)");
    }

    #[test]
    fn test_edge_touches() {
        let edge = Edge::new("a", "b", 3);
        assert!(edge.touches("a"));
        assert!(edge.touches("b"));
        assert!(!edge.touches("c"));
    }

    #[test]
    fn test_config_default() {
        let cfg = PoetConfig::default();
        assert_eq!(cfg.tie_break, TieBreak::Lexicographic);
        assert!(cfg.case_fold_corpus);
    }

    #[test]
    fn test_config_fold() {
        let cfg = PoetConfig::default();
        assert_eq!(cfg.fold("Hello,"), "hello,");

        let cfg = PoetConfig::default().with_case_fold_corpus(false);
        assert_eq!(cfg.fold("Hello,"), "Hello,");
    }

    #[test]
    fn test_config_serde_missing_fields_default() {
        let cfg = PoetConfig::from_json("{}").unwrap();
        assert_eq!(cfg, PoetConfig::default());
    }

    #[test]
    fn test_config_serde_with_tie_break() {
        let json = r#"{"tie_break": "first_found", "case_fold_corpus": false}"#;
        let cfg = PoetConfig::from_json(json).unwrap();
        assert_eq!(cfg.tie_break, TieBreak::FirstFound);
        assert!(!cfg.case_fold_corpus);
    }

    #[test]
    fn test_config_serde_rejects_unknown_tie_break() {
        let json = r#"{"tie_break": "random"}"#;
        assert!(matches!(
            PoetConfig::from_json(json),
            Err(PoetError::Serialization { .. })
        ));
    }
}
