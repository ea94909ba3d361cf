//! Undirected graph model shared by the generators, metrics and epidemic engine.
//!
//! A [`Graph`] owns an ordered node sequence `0..node_count` and a
//! deduplicated list of [`Edge`]s. Edges are stored canonically with the lower
//! node first, so an unordered pair appears at most once and self-loops are
//! unrepresentable. Graphs are immutable once built.

mod adjacency;

use std::{collections::HashSet, fmt};

pub use adjacency::Adjacency;

use crate::error::GraphError;

/// Identifier of a node within a [`Graph`].
///
/// # Examples
/// ```
/// use netlab_core::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "node3");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the node in its graph's node sequence.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

/// Unordered pair of distinct nodes.
///
/// # Examples
/// ```
/// use netlab_core::{Edge, NodeId};
///
/// let edge = Edge::new(4, 1).expect("distinct endpoints form an edge");
/// assert_eq!(edge.source(), NodeId::new(1));
/// assert_eq!(edge.target(), NodeId::new(4));
/// assert!(Edge::new(2, 2).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    /// Builds the canonical edge between `a` and `b`, or `None` for a self-loop.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                source: NodeId(a),
                target: NodeId(b),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                source: NodeId(b),
                target: NodeId(a),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the lower endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the higher endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeId { self.target }

    /// Returns whether `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}

/// Immutable undirected graph.
///
/// # Examples
/// ```
/// use netlab_core::Graph;
///
/// let graph = Graph::try_from_edges(3, [(0, 1), (1, 2), (2, 1)])
///     .expect("edges reference known nodes");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge(2, 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Returns the graph with no nodes and no edges.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a graph of `node_count` isolated nodes.
    #[must_use]
    pub fn edgeless(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Assembles a graph from caller-supplied endpoint pairs.
    ///
    /// Repeated unordered pairs are kept once, in first-seen order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an endpoint is not below
    /// `node_count` and [`GraphError::SelfLoop`] when both endpoints match.
    pub fn try_from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut builder = GraphBuilder::new(node_count);
        for (a, b) in edges {
            for node in [a, b] {
                if node >= node_count {
                    return Err(GraphError::UnknownNode { node, node_count });
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop { node: a });
            }
            builder.add_edge(a, b);
        }
        Ok(builder.finish())
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns whether the graph has no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.node_count == 0 }

    /// Iterates the nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.node_count).map(NodeId)
    }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns whether `a` and `b` are joined by an edge.
    #[must_use]
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        Edge::new(a, b).is_some_and(|edge| self.edges.contains(&edge))
    }

    /// Returns the number of edges incident to `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.edges.iter().filter(|edge| edge.touches(node)).count()
    }

    /// Builds the neighbour lists for this graph.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_graph(self)
    }
}

/// Accumulates deduplicated edges for the generators.
pub(crate) struct GraphBuilder {
    node_count: usize,
    edges: Vec<Edge>,
    seen: HashSet<Edge>,
}

impl GraphBuilder {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Adds the unordered pair `{a, b}` unless it is a self-loop or already present.
    ///
    /// Returns whether the edge was inserted.
    pub(crate) fn add_edge(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a < self.node_count && b < self.node_count);
        let Some(edge) = Edge::new(a, b) else {
            return false;
        };
        if !self.seen.insert(edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    pub(crate) fn finish(self) -> Graph {
        Graph {
            node_count: self.node_count,
            edges: self.edges,
        }
    }
}

#[cfg(test)]
mod tests;
