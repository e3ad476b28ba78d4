//! Edge sampling over every unordered node pair.
//!
//! Pairs `(n, m)` with `n < m` are visited in row-major order and each pair
//! consumes exactly one uniform draw, whether or not it becomes an edge. The
//! resulting edge order is part of the output contract and, together with the
//! draw order, is what makes seeded runs reproducible.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::GraphError,
    graph::{Edge, Node},
    probability::Probability,
};

/// Returns the number of unordered pairs among `node_count` nodes.
///
/// # Errors
/// Returns [`GraphError::NodeCountOverflow`] when the count does not fit in
/// `usize`.
///
/// # Examples
/// ```
/// use blockgraph_core::pair_count;
///
/// assert_eq!(pair_count(0).expect("fits"), 0);
/// assert_eq!(pair_count(1).expect("fits"), 0);
/// assert_eq!(pair_count(4).expect("fits"), 6);
/// ```
pub fn pair_count(node_count: usize) -> Result<usize> {
    let overflow = GraphError::NodeCountOverflow { node_count };
    // One of `n` and `n - 1` is even, so halving it first keeps the
    // product exact.
    let below = node_count.saturating_sub(1);
    let (even, other) = if node_count % 2 == 0 {
        (node_count, below)
    } else {
        (below, node_count)
    };
    (even / 2).checked_mul(other).ok_or(overflow)
}

/// Samples the edge set for `nodes`.
///
/// Same-class pairs succeed with `intra_class_probability`, mixed pairs with
/// `inter_class_probability`. Edges keep the enumeration orientation:
/// `nodes[n]` first, `nodes[m]` second.
///
/// # Errors
/// Returns [`GraphError::InvalidProbability`] before drawing anything when
/// either probability lies outside `[0, 1]` (inter-class is checked first).
///
/// # Examples
/// ```
/// use blockgraph_core::{Node, NodeClass, sample_edges};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let nodes: Vec<Node> = (0..3)
///     .map(|id| Node { id, class: NodeClass::Zero, name: format!("n{id}") })
///     .collect();
/// let mut rng = SmallRng::seed_from_u64(5);
/// let edges = sample_edges(&nodes, 0.0, 1.0, &mut rng).expect("valid probabilities");
/// let ids: Vec<(usize, usize)> = edges.iter().map(|edge| edge.ids()).collect();
/// assert_eq!(ids, vec![(0, 1), (0, 2), (1, 2)]);
/// ```
pub fn sample_edges<R>(
    nodes: &[Node],
    inter_class_probability: f64,
    intra_class_probability: f64,
    rng: &mut R,
) -> Result<Vec<Edge>>
where
    R: Rng + ?Sized,
{
    let inter = Probability::new("inter_class_probability", inter_class_probability)?;
    let intra = Probability::new("intra_class_probability", intra_class_probability)?;
    pair_count(nodes.len())?;
    Ok(sample_validated(nodes, inter, intra, rng))
}

#[instrument(
    name = "core.sample_edges",
    level = "debug",
    skip_all,
    fields(
        nodes = nodes.len(),
        inter_class_probability = inter.get(),
        intra_class_probability = intra.get(),
    ),
)]
pub(crate) fn sample_validated<R>(
    nodes: &[Node],
    inter: Probability,
    intra: Probability,
    rng: &mut R,
) -> Vec<Edge>
where
    R: Rng + ?Sized,
{
    let mut edges = Vec::new();
    for (offset, first) in nodes.iter().enumerate() {
        for second in nodes.iter().skip(offset + 1) {
            let probability = if first.class == second.class {
                intra
            } else {
                inter
            };
            if probability.trial(rng) {
                edges.push(Edge {
                    x: first.clone(),
                    y: second.clone(),
                });
            }
        }
    }

    debug!(edges = edges.len(), "edges sampled");
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::{fixture, rstest};

    use crate::graph::NodeClass;

    fn node(id: usize, class: NodeClass) -> Node {
        Node {
            id,
            class,
            name: format!("node {id}"),
        }
    }

    #[fixture]
    fn mixed_nodes() -> Vec<Node> {
        vec![
            node(0, NodeClass::Zero),
            node(1, NodeClass::One),
            node(2, NodeClass::Zero),
            node(3, NodeClass::One),
        ]
    }

    #[fixture]
    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(99)
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(5, 10)]
    #[case(6, 15)]
    fn pair_count_matches_closed_form(#[case] node_count: usize, #[case] expected: usize) {
        assert_eq!(pair_count(node_count).expect("fits"), expected);
    }

    #[test]
    fn pair_count_rejects_overflow() {
        assert_eq!(
            pair_count(usize::MAX),
            Err(GraphError::NodeCountOverflow {
                node_count: usize::MAX
            })
        );
    }

    #[rstest]
    fn certain_edges_follow_row_major_order(mixed_nodes: Vec<Node>, mut rng: SmallRng) {
        let edges = sample_edges(&mixed_nodes, 1.0, 1.0, &mut rng).expect("valid");
        let ids: Vec<(usize, usize)> = edges.iter().map(Edge::ids).collect();
        assert_eq!(ids, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[rstest]
    fn impossible_edges_yield_nothing(mixed_nodes: Vec<Node>, mut rng: SmallRng) {
        let edges = sample_edges(&mixed_nodes, 0.0, 0.0, &mut rng).expect("valid");
        assert!(edges.is_empty());
    }

    #[rstest]
    fn intra_only_connects_matching_classes(mixed_nodes: Vec<Node>, mut rng: SmallRng) {
        let edges = sample_edges(&mixed_nodes, 0.0, 1.0, &mut rng).expect("valid");
        let ids: Vec<(usize, usize)> = edges.iter().map(Edge::ids).collect();
        assert_eq!(ids, vec![(0, 2), (1, 3)]);
        assert!(edges.iter().all(|edge| edge.x.class == edge.y.class));
    }

    #[rstest]
    fn inter_only_connects_differing_classes(mixed_nodes: Vec<Node>, mut rng: SmallRng) {
        let edges = sample_edges(&mixed_nodes, 1.0, 0.0, &mut rng).expect("valid");
        let ids: Vec<(usize, usize)> = edges.iter().map(Edge::ids).collect();
        assert_eq!(ids, vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    fn fewer_than_two_nodes_yield_no_edges(#[case] count: usize, mut rng: SmallRng) {
        let nodes: Vec<Node> = (0..count).map(|id| node(id, NodeClass::Zero)).collect();
        let edges = sample_edges(&nodes, 1.0, 1.0, &mut rng).expect("valid");
        assert!(edges.is_empty());
    }

    #[rstest]
    fn complete_graph_has_each_pair_once(mut rng: SmallRng) {
        let nodes: Vec<Node> = (0..12)
            .map(|id| {
                let class = if id % 3 == 0 {
                    NodeClass::Zero
                } else {
                    NodeClass::One
                };
                node(id, class)
            })
            .collect();
        let edges = sample_edges(&nodes, 1.0, 1.0, &mut rng).expect("valid");
        assert_eq!(edges.len(), 66);
        let unique: HashSet<(usize, usize)> = edges.iter().map(Edge::ids).collect();
        assert_eq!(unique.len(), edges.len());
        assert!(edges.iter().all(|edge| edge.x.id < edge.y.id));
    }

    #[rstest]
    #[case::inter_low(-0.1, 0.5, "inter_class_probability")]
    #[case::inter_high(1.5, 0.5, "inter_class_probability")]
    #[case::intra_low(0.5, -0.1, "intra_class_probability")]
    #[case::intra_high(0.5, 1.5, "intra_class_probability")]
    fn rejects_invalid_probabilities(
        mixed_nodes: Vec<Node>,
        mut rng: SmallRng,
        #[case] inter: f64,
        #[case] intra: f64,
        #[case] expected: &str,
    ) {
        let err = sample_edges(&mixed_nodes, inter, intra, &mut rng)
            .expect_err("probability must be rejected");
        assert!(matches!(
            err,
            GraphError::InvalidProbability { parameter, .. } if parameter == expected
        ));
    }
}
