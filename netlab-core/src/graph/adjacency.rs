//! Neighbour lists derived from a [`Graph`].

use super::{Graph, NodeId};

/// Sorted neighbour list per node.
///
/// Lists are sorted by node id so iteration is deterministic and membership
/// tests are a binary search.
///
/// # Examples
/// ```
/// use netlab_core::{Graph, NodeId};
///
/// let graph = Graph::try_from_edges(3, [(2, 0), (0, 1)]).expect("valid edges");
/// let adjacency = graph.adjacency();
/// assert_eq!(adjacency.neighbours(NodeId::new(0)), &[NodeId::new(1), NodeId::new(2)]);
/// assert!(adjacency.are_adjacent(NodeId::new(2), NodeId::new(0)));
/// assert!(!adjacency.are_adjacent(NodeId::new(1), NodeId::new(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjacency {
    neighbours: Vec<Vec<NodeId>>,
}

impl Adjacency {
    /// Builds the neighbour lists for `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let mut neighbours = vec![Vec::new(); graph.node_count()];
        for edge in graph.edges() {
            let (source, target) = (edge.source(), edge.target());
            if let Some(list) = neighbours.get_mut(source.index()) {
                list.push(target);
            }
            if let Some(list) = neighbours.get_mut(target.index()) {
                list.push(source);
            }
        }
        for list in &mut neighbours {
            list.sort_unstable();
        }
        Self { neighbours }
    }

    /// Returns the number of nodes covered.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns the neighbours of `node`, or an empty slice for unknown nodes.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        self.neighbours
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the degree of `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbours(node).len()
    }

    /// Returns whether `a` and `b` share an edge.
    #[must_use]
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbours(a).binary_search(&b).is_ok()
    }
}
