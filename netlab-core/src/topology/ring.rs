//! Ring lattice ("nearest-neighbour") generator.

use tracing::{instrument, warn};

use crate::graph::{Graph, GraphBuilder};

/// Generates a ring lattice where each node links to its `neighbours`
/// nearest nodes on a cycle, half on each side.
///
/// An odd `neighbours` is decremented to the even value below it, and a value
/// of at least `nodes` is clamped to `nodes - 1`; both corrections log a
/// warning. The clamp runs after the parity correction, so each side reaches
/// `neighbours / 2` nodes rounded down. Pairs reached from both directions are
/// stored once.
///
/// # Examples
/// ```
/// use netlab_core::ring_lattice;
///
/// let graph = ring_lattice(10, 4);
/// assert_eq!(graph.edge_count(), 20);
/// assert!(graph.contains_edge(0, 9));
/// assert!(graph.contains_edge(0, 8));
/// assert!(!graph.contains_edge(0, 7));
/// ```
#[must_use]
#[instrument(name = "topology.ring_lattice", level = "debug")]
pub fn ring_lattice(nodes: usize, neighbours: usize) -> Graph {
    if nodes == 0 {
        return Graph::empty();
    }

    let mut degree = neighbours;
    if degree % 2 != 0 {
        warn!(
            requested = degree,
            adjusted = degree - 1,
            "ring lattice degree must be even, decrementing"
        );
        degree -= 1;
    }
    if degree >= nodes {
        warn!(
            requested = degree,
            adjusted = nodes - 1,
            nodes,
            "ring lattice degree must be below the node count, clamping"
        );
        degree = nodes - 1;
    }

    let reach = degree / 2;
    let mut builder = GraphBuilder::new(nodes);
    for node in 0..nodes {
        for offset in 1..=reach {
            builder.add_edge(node, (node + offset) % nodes);
            builder.add_edge(node, (node + nodes - offset) % nodes);
        }
    }
    builder.finish()
}
