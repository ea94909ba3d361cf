//! Checks the diagnostics emitted by generators and the simulation driver.

use netlab_core::{SimulationBuilder, random_graph, ring_lattice, star_graph};
use netlab_test_support::tracing::CaptureLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use tracing::Level;

#[rstest]
#[case::odd_degree(10, 3, "ring lattice degree must be even, decrementing")]
#[case::oversized_degree(5, 8, "ring lattice degree must be below the node count, clamping")]
fn ring_lattice_warns_when_correcting_degree(
    #[case] nodes: usize,
    #[case] neighbours: usize,
    #[case] message: &str,
) {
    let (_graph, capture) = CaptureLayer::capture(|| ring_lattice(nodes, neighbours));
    assert!(capture.has_event(Level::WARN, message));
    let span = capture
        .span("topology.ring_lattice")
        .expect("generator span must exist");
    assert_eq!(span.fields.get("nodes"), Some(&nodes.to_string()));
}

#[rstest]
fn valid_ring_lattice_is_silent() {
    let (_graph, capture) = CaptureLayer::capture(|| ring_lattice(10, 4));
    assert_eq!(capture.count_at(Level::WARN), 0);
}

#[rstest]
fn star_below_two_nodes_warns() {
    let (graph, capture) = CaptureLayer::capture(|| star_graph(1));
    assert!(graph.is_empty());
    let warning = capture
        .events()
        .into_iter()
        .find(|event| event.level == Level::WARN)
        .expect("warning must be emitted");
    assert_eq!(warning.field("nodes"), Some("1"));
    assert_eq!(warning.span.as_deref(), Some("topology.star"));
}

#[rstest]
#[case::nan(f64::NAN, "edge probability is NaN, treating it as 0")]
#[case::negative(-0.25, "edge probability must lie within [0, 1], clamping")]
fn random_graph_warns_about_bad_probability(#[case] probability: f64, #[case] message: &str) {
    let (graph, capture) = CaptureLayer::capture(|| {
        random_graph(6, probability, &mut SmallRng::seed_from_u64(1))
    });
    assert_eq!(graph.edge_count(), 0);
    assert!(capture.has_event(Level::WARN, message));
}

#[rstest]
fn simulation_run_reports_its_outcome() {
    let mut simulation = SimulationBuilder::new()
        .with_total_nodes(25)
        .with_beta(0.0)
        .with_gamma(1.0)
        .build()
        .expect("configuration must be valid");
    let (steps, capture) = CaptureLayer::capture(|| simulation.run(10));
    assert_eq!(steps, 1);

    let run = capture.span("epidemic.run").expect("run span must exist");
    assert_eq!(run.fields.get("nodes"), Some(&"25".to_owned()));
    assert_eq!(capture.spans().iter().filter(|span| span.name == "epidemic.step").count(), 1);

    let stopped = capture
        .events()
        .into_iter()
        .find(|event| event.message() == Some("simulation stopped"))
        .expect("stop event must exist");
    assert_eq!(stopped.level, Level::INFO);
    assert_eq!(stopped.field("recovered"), Some("3"));
    assert_eq!(stopped.field("extinct"), Some("true"));
}
