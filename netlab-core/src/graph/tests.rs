//! Unit tests for the graph model and adjacency lists.

use rstest::rstest;

use super::*;

#[rstest]
#[case::ordered(1, 4)]
#[case::reversed(4, 1)]
fn edges_are_canonical(#[case] a: usize, #[case] b: usize) {
    let edge = Edge::new(a, b).expect("distinct endpoints");
    assert_eq!(edge.source(), NodeId::new(1));
    assert_eq!(edge.target(), NodeId::new(4));
    assert!(edge.touches(NodeId::new(4)));
    assert!(!edge.touches(NodeId::new(2)));
}

#[test]
fn try_from_edges_deduplicates_unordered_pairs() {
    let graph = Graph::try_from_edges(4, [(0, 1), (1, 0), (2, 3), (0, 1)])
        .expect("edges are valid");
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(
        graph.edges(),
        &[
            Edge::new(0, 1).expect("edge"),
            Edge::new(2, 3).expect("edge")
        ]
    );
}

#[rstest]
#[case::out_of_range(vec![(0, 3)], GraphError::UnknownNode { node: 3, node_count: 3 })]
#[case::self_loop(vec![(0, 1), (2, 2)], GraphError::SelfLoop { node: 2 })]
fn try_from_edges_rejects_invalid_edges(
    #[case] edges: Vec<(usize, usize)>,
    #[case] expected: GraphError,
) {
    let err = Graph::try_from_edges(3, edges).expect_err("invalid edges must fail");
    assert_eq!(err, expected);
}

#[test]
fn empty_and_edgeless_graphs() {
    let empty = Graph::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.nodes().len(), 0);

    let isolated = Graph::edgeless(5);
    assert!(!isolated.is_empty());
    assert_eq!(isolated.node_count(), 5);
    assert_eq!(isolated.edge_count(), 0);
    assert!(isolated.nodes().all(|node| isolated.degree(node) == 0));
}

#[test]
fn adjacency_matches_edge_list() {
    let graph =
        Graph::try_from_edges(4, [(3, 0), (0, 1), (1, 2), (0, 2)]).expect("edges are valid");
    let adjacency = graph.adjacency();
    assert_eq!(adjacency.node_count(), 4);
    for node in graph.nodes() {
        assert_eq!(adjacency.degree(node), graph.degree(node));
        let neighbours = adjacency.neighbours(node);
        assert!(neighbours.windows(2).all(|pair| pair[0] < pair[1]));
        for &other in neighbours {
            assert!(graph.contains_edge(node.index(), other.index()));
        }
    }
    assert!(adjacency.neighbours(NodeId::new(9)).is_empty());
}
