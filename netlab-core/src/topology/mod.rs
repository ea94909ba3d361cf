//! Canonical topology generators.
//!
//! Each generator returns a fresh [`Graph`]. Only the random graph consumes
//! randomness, drawn from a caller-supplied [`Rng`] so runs are reproducible
//! under a fixed seed. Generators never fail: degenerate parameters are
//! corrected with a logged warning instead.

mod complete;
mod random;
mod ring;
mod star;

use rand::Rng;

pub use complete::complete_graph;
pub(crate) use random::draw_bernoulli_edges;
pub use random::random_graph;
pub use ring::ring_lattice;
pub use star::{HUB, star_graph};

use crate::graph::Graph;

/// Selects a topology and its structural parameters.
///
/// # Examples
/// ```
/// use netlab_core::Topology;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let graph = Topology::RingLattice { nodes: 8, neighbours: 2 }.generate(&mut rng);
/// assert_eq!(graph.edge_count(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Topology {
    /// Every pair of nodes is connected.
    Complete {
        /// Number of nodes.
        nodes: usize,
    },
    /// Each node links to its nearest neighbours on a cycle.
    RingLattice {
        /// Number of nodes.
        nodes: usize,
        /// Neighbours per node, split evenly between both sides.
        neighbours: usize,
    },
    /// Node `0` is a hub joined to every other node.
    Star {
        /// Number of nodes, hub included.
        nodes: usize,
    },
    /// Each pair is joined independently with a fixed probability.
    Random {
        /// Number of nodes.
        nodes: usize,
        /// Edge probability.
        probability: f64,
    },
}

impl Topology {
    /// Generates the selected topology.
    ///
    /// `rng` is only consumed by [`Topology::Random`].
    pub fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng + ?Sized,
    {
        match *self {
            Self::Complete { nodes } => complete_graph(nodes),
            Self::RingLattice { nodes, neighbours } => ring_lattice(nodes, neighbours),
            Self::Star { nodes } => star_graph(nodes),
            Self::Random { nodes, probability } => random_graph(nodes, probability, rng),
        }
    }

    /// Returns a short human-readable name for the topology.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complete { .. } => "complete",
            Self::RingLattice { .. } => "ring lattice",
            Self::Star { .. } => "star",
            Self::Random { .. } => "random",
        }
    }

    /// Returns the requested node count.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        match *self {
            Self::Complete { nodes }
            | Self::RingLattice { nodes, .. }
            | Self::Star { nodes }
            | Self::Random { nodes, .. } => nodes,
        }
    }
}

#[cfg(test)]
mod tests;
