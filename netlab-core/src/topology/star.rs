//! Star graph generator.

use tracing::{instrument, warn};

use crate::graph::{Graph, GraphBuilder};

/// Node index of the star's hub.
pub const HUB: usize = 0;

/// Generates a star with node `0` as the hub and `nodes - 1` leaves.
///
/// A star needs a hub and at least one leaf; for fewer than two nodes the
/// empty graph is returned and a warning is logged.
///
/// # Examples
/// ```
/// use netlab_core::{NodeId, star_graph};
///
/// let graph = star_graph(5);
/// assert_eq!(graph.edge_count(), 4);
/// assert!(graph.edges().iter().all(|edge| edge.touches(NodeId::new(0))));
/// assert!(star_graph(1).is_empty());
/// ```
#[must_use]
#[instrument(name = "topology.star", level = "debug")]
pub fn star_graph(nodes: usize) -> Graph {
    if nodes < 2 {
        warn!(nodes, "star requires at least two nodes, returning an empty graph");
        return Graph::empty();
    }

    let mut builder = GraphBuilder::new(nodes);
    for leaf in 1..nodes {
        builder.add_edge(HUB, leaf);
    }
    builder.finish()
}
