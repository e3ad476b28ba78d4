//! Node, edge, and graph value types produced by the generator.
//!
//! When the `serde` feature is enabled every type serializes with the field
//! names `Id`, `Class`, `Name` for nodes and `X`, `Y` for edges, and
//! [`NodeClass`] serializes as the integer `0` or `1`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary community label assigned to each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub enum NodeClass {
    /// Class `0`.
    Zero,
    /// Class `1`.
    One,
}

impl NodeClass {
    /// Returns the numeric label, `0` or `1`.
    ///
    /// # Examples
    /// ```
    /// use blockgraph_core::NodeClass;
    ///
    /// assert_eq!(NodeClass::Zero.label(), 0);
    /// assert_eq!(NodeClass::One.label(), 1);
    /// ```
    #[must_use]
    pub const fn label(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl From<NodeClass> for u8 {
    fn from(class: NodeClass) -> Self {
        class.label()
    }
}

/// Error returned when converting an integer other than `0` or `1` into a
/// [`NodeClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("node class must be 0 or 1 (got {0})")]
pub struct InvalidNodeClass(pub u8);

impl TryFrom<u8> for NodeClass {
    type Error = InvalidNodeClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(InvalidNodeClass(other)),
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A generated node.
///
/// `id` equals the node's position in generation order. `name` is a display
/// label only: two nodes may share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Node {
    /// Zero-based identifier.
    pub id: usize,
    /// Community label.
    pub class: NodeClass,
    /// Human-readable display name.
    pub name: String,
}

/// An undirected edge embedding copies of both endpoints.
///
/// `x` is always the endpoint enumerated first, so `x.id < y.id`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub struct Edge {
    /// First endpoint.
    pub x: Node,
    /// Second endpoint.
    pub y: Node,
}

impl Edge {
    /// Returns the endpoint identifiers as `(x, y)`.
    #[must_use]
    pub const fn ids(&self) -> (usize, usize) {
        (self.x.id, self.y.id)
    }
}

/// The output of a generation run: nodes in id order and edges in row-major
/// pair order.
///
/// # Examples
/// ```
/// use blockgraph_core::GraphGeneratorBuilder;
///
/// let graph = GraphGeneratorBuilder::new()
///     .with_node_count(4)
///     .with_inter_class_probability(1.0)
///     .with_intra_class_probability(1.0)
///     .with_seed(7)
///     .build()
///     .expect("configuration is valid")
///     .generate()
///     .expect("generation succeeds");
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub(crate) const fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Returns the nodes in id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the edges in enumeration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consumes the graph, returning `(nodes, edges)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}
