//! Benchmark support crate for blockgraph.
//!
//! Provides the parameter type shared by the Criterion benchmarks for class
//! assignment and edge sampling.

use std::fmt;

/// Parameters for a generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerationBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Edge probability used for both same-class and mixed pairs.
    pub edge_probability: f64,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.edge_probability)
    }
}
