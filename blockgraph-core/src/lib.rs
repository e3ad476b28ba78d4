//! Blockgraph core library.
//!
//! Generates undirected graphs from a two-block stochastic block model: every
//! node draws a binary class, then every unordered node pair draws one
//! Bernoulli trial whose success probability depends on whether the pair
//! shares a class.
//!
//! The random source is always explicit. For a fixed seed the draw sequence,
//! and therefore the graph, is reproducible: `node_count` class draws followed
//! by one draw per pair in row-major order.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod classes;
mod edges;
mod error;
mod generator;
mod graph;
mod names;
mod probability;

pub use crate::{
    classes::assign_classes,
    edges::{pair_count, sample_edges},
    error::{GraphError, GraphErrorCode, Result},
    generator::{GraphGenerator, GraphGeneratorBuilder, generate_graph},
    graph::{Edge, Graph, InvalidNodeClass, Node, NodeClass},
    names::{NameSource, RandomNames},
    probability::Probability,
};
