//! Tests for the graph generation API.

mod common;

use std::collections::HashSet;

use blockgraph_core::{
    GraphError, GraphGeneratorBuilder, NodeClass, RandomNames, assign_classes, generate_graph,
    sample_edges,
};
use common::{CountingRng, ScriptedRng, sequential_names};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use blockgraph_test_support::tracing::RecordingLayer;

#[fixture]
fn names() -> RandomNames {
    RandomNames::seeded(17)
}

#[rstest]
#[case::empty(0)]
#[case::single(1)]
#[case::pair(2)]
#[case::dozen(12)]
#[case::larger(40)]
fn draws_one_value_per_node_and_per_pair(#[case] node_count: usize, mut names: RandomNames) {
    let mut rng = CountingRng::seeded(5);
    generate_graph(node_count, 0.5, 0.3, 0.6, &mut rng, &mut names).expect("valid parameters");
    let pairs = node_count * node_count.saturating_sub(1) / 2;
    assert_eq!(rng.draws(), node_count + pairs);
}

#[rstest]
fn scripted_draws_decide_classes_then_pairs() {
    // Classes: 0.25 < 0.5 -> Zero, 0.75 -> One, 0.25 -> Zero.
    // Pairs (0,1) inter, (0,2) intra, (1,2) inter.
    let mut rng = ScriptedRng::new(&[0.25, 0.75, 0.25, 0.0625, 0.5, 0.0625]);
    let mut names = sequential_names();
    let graph = generate_graph(3, 0.5, 0.125, 0.375, &mut rng, &mut names)
        .expect("valid parameters");

    let classes: Vec<NodeClass> = graph.nodes().iter().map(|node| node.class).collect();
    assert_eq!(classes, vec![NodeClass::Zero, NodeClass::One, NodeClass::Zero]);
    let ids: Vec<(usize, usize)> = graph.edges().iter().map(|edge| edge.ids()).collect();
    assert_eq!(ids, vec![(0, 1), (1, 2)]);
    assert_eq!(rng.remaining(), 0);
}

#[rstest]
fn edges_embed_full_node_copies(mut names: RandomNames) {
    let mut rng = SmallRng::seed_from_u64(8);
    let graph = generate_graph(5, 0.5, 1.0, 1.0, &mut rng, &mut names).expect("valid");
    for edge in graph.edges() {
        assert_eq!(Some(&edge.x), graph.nodes().get(edge.x.id));
        assert_eq!(Some(&edge.y), graph.nodes().get(edge.y.id));
    }
}

#[rstest]
fn four_node_complete_graph_order(mut names: RandomNames) {
    let mut rng = SmallRng::seed_from_u64(1);
    let graph = generate_graph(4, 0.5, 1.0, 1.0, &mut rng, &mut names).expect("valid");
    let ids: Vec<(usize, usize)> = graph.edges().iter().map(|edge| edge.ids()).collect();
    assert_eq!(ids, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
}

#[rstest]
#[case::class_zero(-0.1, 0.5, 0.5, "class_zero_probability")]
#[case::inter(0.5, 1.5, 0.5, "inter_class_probability")]
#[case::intra(0.5, 0.5, -0.1, "intra_class_probability")]
fn invalid_probability_is_rejected_before_any_draw(
    #[case] class_zero: f64,
    #[case] inter: f64,
    #[case] intra: f64,
    #[case] expected: &str,
    mut names: RandomNames,
) {
    let mut rng = CountingRng::seeded(0);
    let err = generate_graph(10, class_zero, inter, intra, &mut rng, &mut names)
        .expect_err("invalid probability must fail");
    assert!(matches!(
        err,
        GraphError::InvalidProbability { parameter, .. } if parameter == expected
    ));
    assert_eq!(rng.draws(), 0);
}

#[rstest]
fn generator_matches_free_function_for_same_sources() {
    let generator = GraphGeneratorBuilder::new()
        .with_node_count(25)
        .with_class_zero_probability(0.3)
        .with_inter_class_probability(0.2)
        .with_intra_class_probability(0.8)
        .build()
        .expect("valid");

    let mut left_rng = SmallRng::seed_from_u64(77);
    let mut left_names = RandomNames::seeded(3);
    let left = generator
        .generate_with(&mut left_rng, &mut left_names)
        .expect("generation succeeds");

    let mut right_rng = SmallRng::seed_from_u64(77);
    let mut right_names = RandomNames::seeded(3);
    let right = generate_graph(25, 0.3, 0.2, 0.8, &mut right_rng, &mut right_names)
        .expect("generation succeeds");

    assert_eq!(left, right);
}

#[rstest]
fn names_do_not_influence_structure() {
    let mut left_rng = SmallRng::seed_from_u64(12);
    let mut right_rng = SmallRng::seed_from_u64(12);
    let mut fixed = || "Ann Lee".to_owned();
    let mut random = RandomNames::seeded(99);

    let left = generate_graph(20, 0.5, 0.2, 0.7, &mut left_rng, &mut fixed).expect("valid");
    let right = generate_graph(20, 0.5, 0.2, 0.7, &mut right_rng, &mut random).expect("valid");

    let left_classes: Vec<NodeClass> = left.nodes().iter().map(|node| node.class).collect();
    let right_classes: Vec<NodeClass> = right.nodes().iter().map(|node| node.class).collect();
    assert_eq!(left_classes, right_classes);
    let left_ids: Vec<(usize, usize)> = left.edges().iter().map(|edge| edge.ids()).collect();
    let right_ids: Vec<(usize, usize)> = right.edges().iter().map(|edge| edge.ids()).collect();
    assert_eq!(left_ids, right_ids);
}

#[rstest]
fn generate_records_core_tracing(mut names: RandomNames) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let mut rng = SmallRng::seed_from_u64(4);

    let graph = tracing::subscriber::with_default(subscriber, || {
        generate_graph(4, 0.5, 1.0, 1.0, &mut rng, &mut names)
    })
    .expect("generation succeeds");
    assert_eq!(graph.edge_count(), 6);

    let spans = layer.spans();
    let span = spans
        .iter()
        .find(|span| span.name == "core.generate_graph")
        .expect("core.generate_graph span must exist");
    assert_eq!(span.fields.get("node_count"), Some(&"4".to_owned()));
    assert_eq!(span.fields.get("edges"), Some(&"6".to_owned()));

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::INFO
            && event.target.starts_with("blockgraph_core")
            && event
                .fields
                .get("message")
                .is_some_and(|value| value == "graph generated")
            && event.fields.get("edges") == Some(&"6".to_owned())
    }));
}

proptest! {
    #[test]
    fn assigned_ids_are_contiguous(
        node_count in 0_usize..200,
        class_zero in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut names = RandomNames::seeded(seed);
        let nodes = assign_classes(node_count, class_zero, &mut rng, &mut names)
            .expect("probability is valid");
        prop_assert_eq!(nodes.len(), node_count);
        for (index, node) in nodes.iter().enumerate() {
            prop_assert_eq!(node.id, index);
        }
    }

    #[test]
    fn sampled_edges_are_simple_and_ordered(
        node_count in 0_usize..40,
        inter in 0.0_f64..=1.0,
        intra in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut names = RandomNames::seeded(seed);
        let nodes = assign_classes(node_count, 0.5, &mut rng, &mut names)
            .expect("probability is valid");
        let edges = sample_edges(&nodes, inter, intra, &mut rng)
            .expect("probabilities are valid");

        let ids: Vec<(usize, usize)> = edges.iter().map(|edge| edge.ids()).collect();
        let unique: HashSet<(usize, usize)> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert!(ids.iter().all(|(x, y)| x < y && *y < node_count));
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn out_of_range_probabilities_always_fail(
        bad in prop_oneof![-10.0_f64..-0.000_001, 1.000_001_f64..10.0],
        position in 0_usize..3,
    ) {
        let mut probabilities = [0.5_f64; 3];
        probabilities[position] = bad;
        let [class_zero, inter, intra] = probabilities;
        let result = GraphGeneratorBuilder::new()
            .with_node_count(3)
            .with_class_zero_probability(class_zero)
            .with_inter_class_probability(inter)
            .with_intra_class_probability(intra)
            .build();
        let is_invalid_probability =
            matches!(result, Err(GraphError::InvalidProbability { .. }));
        prop_assert!(is_invalid_probability);
    }
}
