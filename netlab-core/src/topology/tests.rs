//! Unit and property tests for the topology generators.

use std::collections::HashSet;

use proptest::{
    prelude::{Just, Strategy, any},
    prop_assert, prop_assert_eq, proptest,
};
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rstest::rstest;
use test_strategy::Arbitrary;

use super::*;
use crate::graph::NodeId;

/// Wraps an RNG and counts the 64-bit words it hands out.
struct CountingRng {
    inner: SmallRng,
    words: usize,
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.words += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.words += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.words += 1;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.words += 1;
        self.inner.try_fill_bytes(dest)
    }
}

#[derive(Clone, Debug, Arbitrary)]
enum TopologyCase {
    Complete {
        #[strategy(0usize..24)]
        nodes: usize,
    },
    RingLattice {
        #[strategy(0usize..24)]
        nodes: usize,
        #[strategy(0usize..30)]
        neighbours: usize,
    },
    Star {
        #[strategy(0usize..24)]
        nodes: usize,
    },
    Random {
        #[strategy(0usize..24)]
        nodes: usize,
        #[strategy(-0.5f64..1.5)]
        probability: f64,
        seed: u64,
    },
}

impl TopologyCase {
    fn build(&self) -> Graph {
        match *self {
            Self::Complete { nodes } => Topology::Complete { nodes }.generate(&mut no_rng()),
            Self::RingLattice { nodes, neighbours } => {
                Topology::RingLattice { nodes, neighbours }.generate(&mut no_rng())
            }
            Self::Star { nodes } => Topology::Star { nodes }.generate(&mut no_rng()),
            Self::Random {
                nodes,
                probability,
                seed,
            } => Topology::Random { nodes, probability }
                .generate(&mut SmallRng::seed_from_u64(seed)),
        }
    }
}

fn no_rng() -> SmallRng {
    SmallRng::seed_from_u64(0)
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 1)]
#[case(4, 6)]
#[case(7, 21)]
fn complete_graph_joins_every_pair(#[case] nodes: usize, #[case] edges: usize) {
    let graph = complete_graph(nodes);
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
}

#[rstest]
#[case(2)]
#[case(5)]
#[case(12)]
fn star_graph_links_leaves_to_hub(#[case] nodes: usize) {
    let graph = star_graph(nodes);
    let hub = NodeId::new(HUB);
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), nodes - 1);
    assert!(graph.edges().iter().all(|edge| edge.touches(hub)));
    assert_eq!(graph.degree(hub), nodes - 1);
}

#[rstest]
#[case(0)]
#[case(1)]
fn star_graph_degenerates_to_empty(#[case] nodes: usize) {
    assert_eq!(star_graph(nodes), Graph::empty());
}

#[rstest]
#[case::pairs(10, 2, 10)]
#[case::quads(10, 4, 20)]
#[case::sextets(9, 6, 27)]
#[case::no_neighbours(6, 0, 0)]
fn ring_lattice_has_n_times_half_k_edges(
    #[case] nodes: usize,
    #[case] neighbours: usize,
    #[case] edges: usize,
) {
    let graph = ring_lattice(nodes, neighbours);
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
    for node in graph.nodes() {
        assert_eq!(graph.degree(node), neighbours);
    }
}

#[test]
fn ring_lattice_decrements_odd_degree() {
    assert_eq!(ring_lattice(10, 5), ring_lattice(10, 4));
    assert_eq!(ring_lattice(10, 1).edge_count(), 0);
}

#[rstest]
#[case::odd_nodes_become_complete(5, 8, 10)]
#[case::even_nodes_round_down(6, 6, 12)]
#[case::single_node(1, 4, 0)]
#[case::two_nodes(2, 2, 0)]
fn ring_lattice_clamps_degree_to_node_count(
    #[case] nodes: usize,
    #[case] neighbours: usize,
    #[case] edges: usize,
) {
    assert_eq!(ring_lattice(nodes, neighbours).edge_count(), edges);
}

#[test]
fn ring_lattice_wraps_around_the_cycle() {
    let graph = ring_lattice(6, 2);
    assert!(graph.contains_edge(0, 5));
    assert!(graph.contains_edge(5, 0));
    assert!(graph.contains_edge(2, 3));
    assert!(!graph.contains_edge(0, 2));
}

#[test]
fn ring_lattice_on_zero_nodes_is_empty() {
    assert_eq!(ring_lattice(0, 4), Graph::empty());
}

#[rstest]
#[case::never(0.0, 0)]
#[case::always(1.0, 28)]
#[case::clamped_low(-3.0, 0)]
#[case::clamped_high(7.5, 28)]
#[case::nan(f64::NAN, 0)]
fn random_graph_extreme_probabilities(#[case] probability: f64, #[case] edges: usize) {
    let mut rng = SmallRng::seed_from_u64(11);
    let graph = random_graph(8, probability, &mut rng);
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), edges);
}

#[test]
fn random_graph_draws_once_per_candidate_pair() {
    let mut rng = CountingRng {
        inner: SmallRng::seed_from_u64(3),
        words: 0,
    };
    let _graph = random_graph(9, 0.5, &mut rng);
    assert_eq!(rng.words, 9 * 8 / 2);
}

#[test]
fn random_graph_is_reproducible_under_a_seed() {
    let first = random_graph(30, 0.2, &mut SmallRng::seed_from_u64(99));
    let second = random_graph(30, 0.2, &mut SmallRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn topology_reports_name_and_nodes() {
    let topology = Topology::Random {
        nodes: 12,
        probability: 0.3,
    };
    assert_eq!(topology.name(), "random");
    assert_eq!(topology.nodes(), 12);
    assert_eq!(Topology::Star { nodes: 4 }.name(), "star");
}

proptest! {
    #[test]
    fn generated_edges_are_simple_and_in_bounds(case in any::<TopologyCase>()) {
        let graph = case.build();
        let mut seen = HashSet::new();
        for edge in graph.edges() {
            prop_assert!(edge.source() < edge.target());
            prop_assert!(edge.target().index() < graph.node_count());
            prop_assert!(seen.insert(*edge), "duplicate edge {:?}", edge);
        }
    }

    #[test]
    fn even_ring_lattices_are_regular(
        (nodes, half) in (3usize..40).prop_flat_map(|nodes| (Just(nodes), 0..=(nodes - 1) / 2))
    ) {
        let neighbours = half * 2;
        let graph = ring_lattice(nodes, neighbours);
        prop_assert_eq!(graph.edge_count(), nodes * neighbours / 2);
        for node in graph.nodes() {
            prop_assert_eq!(graph.degree(node), neighbours);
        }
    }
}
