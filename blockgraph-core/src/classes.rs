//! Class assignment: one Bernoulli draw per node.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    graph::{Node, NodeClass},
    names::NameSource,
    probability::Probability,
};

/// Draws a class label for each of `node_count` nodes.
///
/// Node `i` receives `id = i` and [`NodeClass::Zero`] when its uniform draw
/// falls below `class_zero_probability`, otherwise [`NodeClass::One`].
/// Exactly `node_count` values are drawn from `rng`; names come from `names`.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidProbability`] before drawing anything
/// when `class_zero_probability` lies outside `[0, 1]`.
///
/// # Examples
/// ```
/// use blockgraph_core::{NodeClass, assign_classes};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let mut names = || "Ann Lee".to_owned();
/// let nodes = assign_classes(3, 1.0, &mut rng, &mut names).expect("valid probability");
/// assert_eq!(nodes.len(), 3);
/// assert!(nodes.iter().all(|node| node.class == NodeClass::Zero));
/// ```
pub fn assign_classes<R, N>(
    node_count: usize,
    class_zero_probability: f64,
    rng: &mut R,
    names: &mut N,
) -> Result<Vec<Node>>
where
    R: Rng + ?Sized,
    N: NameSource + ?Sized,
{
    let class_zero = Probability::new("class_zero_probability", class_zero_probability)?;
    Ok(assign_validated(node_count, class_zero, rng, names))
}

#[instrument(
    name = "core.assign_classes",
    level = "debug",
    skip(class_zero, rng, names),
    fields(class_zero_probability = class_zero.get()),
)]
pub(crate) fn assign_validated<R, N>(
    node_count: usize,
    class_zero: Probability,
    rng: &mut R,
    names: &mut N,
) -> Vec<Node>
where
    R: Rng + ?Sized,
    N: NameSource + ?Sized,
{
    let nodes: Vec<Node> = (0..node_count)
        .map(|id| {
            let class = if class_zero.trial(rng) {
                NodeClass::Zero
            } else {
                NodeClass::One
            };
            Node {
                id,
                class,
                name: names.next_name(),
            }
        })
        .collect();

    debug!(
        class_zero = nodes.iter().filter(|n| n.class == NodeClass::Zero).count(),
        "classes assigned"
    );
    nodes
}
