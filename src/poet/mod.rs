//! Word affinity graphs and bridge-word poems
//!
//! - [`affinity`]: folds a corpus into a weighted directed word graph
//! - [`generator`]: inserts maximum-weight bridge words into input text

pub mod affinity;
pub mod generator;

pub use affinity::AffinityGraphBuilder;
pub use generator::{Bridge, GraphPoet};
