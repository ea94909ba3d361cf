//! Structural metrics over undirected graphs.
//!
//! Both metrics are pure and tolerate disconnected graphs: unreachable pairs
//! are left out of the path-length average rather than counted as infinite,
//! and isolated or degree-one nodes contribute zero clustering.

use std::collections::VecDeque;

use tracing::instrument;

use crate::graph::{Adjacency, Graph, NodeId};

/// Mean shortest-hop distance over all reachable ordered node pairs.
///
/// Runs a breadth-first search from every node, so the cost is
/// `O(V * (V + E))`. Returns `0.0` for graphs with fewer than two nodes or
/// without any reachable pair.
///
/// # Examples
/// ```
/// use netlab_core::{average_path_length, complete_graph, star_graph};
///
/// assert_eq!(average_path_length(&complete_graph(5)), 1.0);
/// assert!((average_path_length(&star_graph(5)) - 1.6).abs() < 1e-12);
/// ```
#[must_use]
#[instrument(
    name = "metrics.average_path_length",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn average_path_length(graph: &Graph) -> f64 {
    if graph.node_count() < 2 {
        return 0.0;
    }

    let adjacency = graph.adjacency();
    let mut total_hops = 0usize;
    let mut reachable_pairs = 0usize;
    let mut distances: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    for source in graph.nodes() {
        distances.fill(None);
        breadth_first_distances(&adjacency, source, &mut distances, &mut queue);
        let reachable = distances
            .iter()
            .enumerate()
            .filter(|(target, _)| *target != source.index())
            .filter_map(|(_, distance)| *distance);
        for hops in reachable {
            total_hops += hops;
            reachable_pairs += 1;
        }
    }

    if reachable_pairs == 0 {
        return 0.0;
    }
    total_hops as f64 / reachable_pairs as f64
}

/// Fills `distances` with hop counts from `source`; unreachable nodes stay `None`.
fn breadth_first_distances(
    adjacency: &Adjacency,
    source: NodeId,
    distances: &mut [Option<usize>],
    queue: &mut VecDeque<NodeId>,
) {
    queue.clear();
    if let Some(slot) = distances.get_mut(source.index()) {
        *slot = Some(0);
        queue.push_back(source);
    }

    while let Some(node) = queue.pop_front() {
        let Some(hops) = distances.get(node.index()).copied().flatten() else {
            continue;
        };
        for &next in adjacency.neighbours(node) {
            let Some(slot) = distances.get_mut(next.index()) else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(hops + 1);
                queue.push_back(next);
            }
        }
    }
}

/// Average local clustering coefficient over every node.
///
/// A node of degree `k >= 2` scores `2 * links / (k * (k - 1))`, where
/// `links` counts the edges among its neighbours. Nodes of degree below two
/// score zero but still count towards the mean. Returns `0.0` for the empty
/// graph.
///
/// # Examples
/// ```
/// use netlab_core::{Graph, clustering_coefficient, complete_graph, star_graph};
///
/// assert_eq!(clustering_coefficient(&complete_graph(4)), 1.0);
/// assert_eq!(clustering_coefficient(&star_graph(6)), 0.0);
///
/// // A triangle with a pendant node: (1 + 1 + 1/3 + 0) / 4.
/// let graph = Graph::try_from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).expect("valid");
/// assert!((clustering_coefficient(&graph) - 7.0 / 12.0).abs() < 1e-12);
/// ```
#[must_use]
#[instrument(
    name = "metrics.clustering_coefficient",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn clustering_coefficient(graph: &Graph) -> f64 {
    if graph.is_empty() {
        return 0.0;
    }

    let adjacency = graph.adjacency();
    let total: f64 = graph
        .nodes()
        .map(|node| local_clustering(&adjacency, node))
        .sum();
    total / graph.node_count() as f64
}

fn local_clustering(adjacency: &Adjacency, node: NodeId) -> f64 {
    let neighbours = adjacency.neighbours(node);
    let degree = neighbours.len();
    if degree < 2 {
        return 0.0;
    }

    let mut links = 0usize;
    for (offset, &first) in neighbours.iter().enumerate() {
        for &second in neighbours.iter().skip(offset + 1) {
            if adjacency.are_adjacent(first, second) {
                links += 1;
            }
        }
    }
    (2 * links) as f64 / (degree * (degree - 1)) as f64
}

/// Summary statistics for a generated topology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopologySummary {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
    /// Mean node degree, `2E / N`.
    pub average_degree: f64,
    /// See [`average_path_length`].
    pub average_path_length: f64,
    /// See [`clustering_coefficient`].
    pub clustering_coefficient: f64,
}

/// Computes the [`TopologySummary`] of `graph`.
///
/// # Examples
/// ```
/// use netlab_core::{complete_graph, summarize};
///
/// let summary = summarize(&complete_graph(4));
/// assert_eq!(summary.edges, 6);
/// assert_eq!(summary.average_degree, 3.0);
/// assert_eq!(summary.clustering_coefficient, 1.0);
/// ```
#[must_use]
pub fn summarize(graph: &Graph) -> TopologySummary {
    TopologySummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        average_degree: average_degree(graph.node_count(), graph.edge_count()),
        average_path_length: average_path_length(graph),
        clustering_coefficient: clustering_coefficient(graph),
    }
}

/// Mean degree of a graph with `nodes` nodes and `edges` edges; `0.0` when empty.
pub(crate) fn average_degree(nodes: usize, edges: usize) -> f64 {
    if nodes == 0 {
        return 0.0;
    }
    (2 * edges) as f64 / nodes as f64
}
