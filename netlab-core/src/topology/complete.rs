//! Complete ("global coupling") graph generator.

use tracing::instrument;

use crate::graph::{Graph, GraphBuilder};

/// Generates the complete graph on `nodes` nodes.
///
/// Every unordered pair `{i, j}` with `i < j` is joined, giving
/// `nodes * (nodes - 1) / 2` edges. Zero or one node yields no edges.
///
/// # Examples
/// ```
/// use netlab_core::complete_graph;
///
/// let graph = complete_graph(4);
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 6);
/// ```
#[must_use]
#[instrument(name = "topology.complete", level = "debug")]
pub fn complete_graph(nodes: usize) -> Graph {
    let mut builder = GraphBuilder::new(nodes);
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            builder.add_edge(i, j);
        }
    }
    builder.finish()
}
