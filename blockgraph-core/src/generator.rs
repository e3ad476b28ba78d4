//! Two-block stochastic block model generation.
//!
//! [`generate_graph`] composes class assignment and edge sampling over an
//! explicit random source. [`GraphGeneratorBuilder`] validates a parameter
//! set once and yields an immutable [`GraphGenerator`] that owns seeding.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    classes::assign_validated,
    edges::{pair_count, sample_validated},
    graph::Graph,
    names::{NameSource, RandomNames},
    probability::Probability,
};

/// Mixed into the configured seed to derive the independent name stream.
const NAME_STREAM_SALT: u64 = 0xA5A5_A5A5_A5A5_A5A5;

const DEFAULT_PROBABILITY: f64 = 0.5;

/// Generates a graph by assigning classes and then sampling edges.
///
/// All three probabilities are validated before `rng` is touched. The first
/// invalid one, in the order class-zero, inter-class, intra-class, is
/// reported. On success `rng` has produced exactly
/// `node_count + node_count * (node_count - 1) / 2` draws.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidProbability`] for an out-of-range
/// probability and [`crate::GraphError::NodeCountOverflow`] when the pair
/// count of `node_count` does not fit in `usize`.
///
/// # Examples
/// ```
/// use blockgraph_core::{RandomNames, generate_graph};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let mut names = RandomNames::seeded(4);
/// let graph = generate_graph(5, 0.5, 0.0, 0.0, &mut rng, &mut names)
///     .expect("probabilities are valid");
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[instrument(
    name = "core.generate_graph",
    err,
    skip(rng, names),
    fields(edges = field::Empty),
)]
pub fn generate_graph<R, N>(
    node_count: usize,
    class_zero_probability: f64,
    inter_class_probability: f64,
    intra_class_probability: f64,
    rng: &mut R,
    names: &mut N,
) -> Result<Graph>
where
    R: Rng + ?Sized,
    N: NameSource + ?Sized,
{
    let params = GraphParams::validate(
        node_count,
        class_zero_probability,
        inter_class_probability,
        intra_class_probability,
    )?;
    let graph = params.run(rng, names);
    Span::current().record("edges", graph.edge_count());
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(graph)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct GraphParams {
    node_count: usize,
    class_zero: Probability,
    inter: Probability,
    intra: Probability,
}

impl GraphParams {
    fn validate(
        node_count: usize,
        class_zero_probability: f64,
        inter_class_probability: f64,
        intra_class_probability: f64,
    ) -> Result<Self> {
        let class_zero = Probability::new("class_zero_probability", class_zero_probability)?;
        let inter = Probability::new("inter_class_probability", inter_class_probability)?;
        let intra = Probability::new("intra_class_probability", intra_class_probability)?;
        pair_count(node_count)?;
        Ok(Self {
            node_count,
            class_zero,
            inter,
            intra,
        })
    }

    fn run<R, N>(&self, rng: &mut R, names: &mut N) -> Graph
    where
        R: Rng + ?Sized,
        N: NameSource + ?Sized,
    {
        let nodes = assign_validated(self.node_count, self.class_zero, rng, names);
        let edges = sample_validated(&nodes, self.inter, self.intra, rng);
        Graph::new(nodes, edges)
    }
}

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use blockgraph_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_node_count(10)
///     .with_class_zero_probability(0.3)
///     .with_inter_class_probability(0.05)
///     .with_intra_class_probability(0.6)
///     .with_seed(11)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.node_count(), 10);
/// assert_eq!(generator.seed(), Some(11));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphGeneratorBuilder {
    node_count: usize,
    class_zero_probability: f64,
    inter_class_probability: f64,
    intra_class_probability: f64,
    seed: Option<u64>,
}

impl Default for GraphGeneratorBuilder {
    fn default() -> Self {
        Self {
            node_count: 0,
            class_zero_probability: DEFAULT_PROBABILITY,
            inter_class_probability: DEFAULT_PROBABILITY,
            intra_class_probability: DEFAULT_PROBABILITY,
            seed: None,
        }
    }
}

impl GraphGeneratorBuilder {
    /// Creates a builder with no nodes, every probability at `0.5`, and no
    /// seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes to generate.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Sets the probability that a node is assigned class `0`.
    #[must_use]
    pub const fn with_class_zero_probability(mut self, probability: f64) -> Self {
        self.class_zero_probability = probability;
        self
    }

    /// Sets the edge probability between nodes of different classes.
    #[must_use]
    pub const fn with_inter_class_probability(mut self, probability: f64) -> Self {
        self.inter_class_probability = probability;
        self
    }

    /// Sets the edge probability between nodes of the same class.
    #[must_use]
    pub const fn with_intra_class_probability(mut self, probability: f64) -> Self {
        self.intra_class_probability = probability;
        self
    }

    /// Fixes the random seed so generation is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidProbability`] when any probability
    /// lies outside `[0, 1]`, and [`crate::GraphError::NodeCountOverflow`]
    /// when the node count is too large to enumerate its pairs.
    ///
    /// # Examples
    /// ```
    /// use blockgraph_core::{GraphError, GraphGeneratorBuilder};
    ///
    /// let err = GraphGeneratorBuilder::new()
    ///     .with_intra_class_probability(1.5)
    ///     .build()
    ///     .expect_err("1.5 is not a probability");
    /// assert!(matches!(err, GraphError::InvalidProbability { .. }));
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        let params = GraphParams::validate(
            self.node_count,
            self.class_zero_probability,
            self.inter_class_probability,
            self.intra_class_probability,
        )?;
        Ok(GraphGenerator {
            params,
            seed: self.seed,
        })
    }
}

/// A validated generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphGenerator {
    params: GraphParams,
    seed: Option<u64>,
}

impl GraphGenerator {
    /// Returns the configured node count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.params.node_count }

    /// Returns the configured class-zero probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn class_zero_probability(&self) -> f64 { self.params.class_zero.get() }

    /// Returns the configured inter-class edge probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn inter_class_probability(&self) -> f64 { self.params.inter.get() }

    /// Returns the configured intra-class edge probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn intra_class_probability(&self) -> f64 { self.params.intra.get() }

    /// Returns the configured seed, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Generates a graph.
    ///
    /// With a seed, the class/edge source is `SmallRng::seed_from_u64(seed)`
    /// and names come from a second stream derived from the same seed, so
    /// repeated calls return identical graphs. Without a seed both streams
    /// are drawn from operating-system entropy.
    ///
    /// # Errors
    /// Propagates failures from [`generate_graph`]; the parameters were
    /// already validated, so none are expected in practice.
    pub fn generate(&self) -> Result<Graph> {
        match self.seed {
            Some(seed) => {
                let mut rng = SmallRng::seed_from_u64(seed);
                let mut names = RandomNames::seeded(seed ^ NAME_STREAM_SALT);
                self.generate_with(&mut rng, &mut names)
            }
            None => {
                let mut rng = SmallRng::from_entropy();
                let mut names = RandomNames::from_entropy();
                self.generate_with(&mut rng, &mut names)
            }
        }
    }

    /// Generates a graph from caller-supplied random and name sources.
    ///
    /// # Errors
    /// Propagates failures from [`generate_graph`].
    pub fn generate_with<R, N>(&self, rng: &mut R, names: &mut N) -> Result<Graph>
    where
        R: Rng + ?Sized,
        N: NameSource + ?Sized,
    {
        generate_graph(
            self.params.node_count,
            self.params.class_zero.get(),
            self.params.inter.get(),
            self.params.intra.get(),
            rng,
            names,
        )
    }
}
