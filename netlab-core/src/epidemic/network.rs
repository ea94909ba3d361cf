//! Contact networks carrying per-node SIR state.

use std::sync::Arc;

use rand::{Rng, seq::index};
use tracing::{debug, instrument};

use super::{
    params::{NetworkParams, Seeding},
    state::{Census, HealthState},
};
use crate::{
    error::GraphError,
    graph::{Adjacency, Graph, GraphBuilder, NodeId},
    metrics::average_degree,
    topology::draw_bernoulli_edges,
};

/// A contact graph plus the SIR state of every node.
///
/// Snapshots produced by [`crate::step_epidemic`] share the same immutable
/// graph; only the state vector differs between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpidemicNetwork {
    graph: Arc<Graph>,
    adjacency: Arc<Adjacency>,
    states: Vec<HealthState>,
}

/// Structural statistics of an [`EpidemicNetwork`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkStats {
    /// Population size.
    pub total_nodes: usize,
    /// Number of contact links.
    pub total_links: usize,
    /// Mean number of contacts per node, `2E / N`.
    pub average_connections: f64,
    /// Number of currently infected nodes.
    pub infected: usize,
}

impl EpidemicNetwork {
    /// Wraps `graph`, marking `index_cases` Infected and every other node Susceptible.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an index case is not a node of `graph`.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::{EpidemicNetwork, HealthState, NodeId, ring_lattice};
    ///
    /// let network = EpidemicNetwork::with_index_cases(ring_lattice(6, 2), [NodeId::new(2)])
    ///     .expect("node 2 exists");
    /// assert_eq!(network.state(NodeId::new(2)), Some(HealthState::Infected));
    /// assert_eq!(network.census().susceptible, 5);
    /// ```
    pub fn with_index_cases<I>(graph: Graph, index_cases: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let node_count = graph.node_count();
        let mut states = vec![HealthState::Susceptible; node_count];
        for case in index_cases {
            let slot = states.get_mut(case.index()).ok_or(GraphError::UnknownNode {
                node: case.index(),
                node_count,
            })?;
            *slot = HealthState::Infected;
        }
        Ok(Self::from_parts(graph, states))
    }

    fn from_parts(graph: Graph, states: Vec<HealthState>) -> Self {
        let adjacency = Adjacency::from_graph(&graph);
        Self {
            graph: Arc::new(graph),
            adjacency: Arc::new(adjacency),
            states,
        }
    }

    /// Returns a snapshot over the same graph with `states` replacing the current ones.
    pub(crate) fn with_states(&self, states: Vec<HealthState>) -> Self {
        debug_assert_eq!(states.len(), self.states.len());
        Self {
            graph: Arc::clone(&self.graph),
            adjacency: Arc::clone(&self.adjacency),
            states,
        }
    }

    /// Returns the contact graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the neighbour lists of the contact graph.
    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Returns the population size.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.states.len()
    }

    /// Returns every node's state in node order.
    #[must_use]
    pub fn states(&self) -> &[HealthState] {
        &self.states
    }

    /// Returns the state of `node`, or `None` if it is not part of the network.
    #[must_use]
    pub fn state(&self, node: NodeId) -> Option<HealthState> {
        self.states.get(node.index()).copied()
    }

    /// Iterates the nodes currently in `state`.
    pub fn nodes_in(&self, state: HealthState) -> impl Iterator<Item = NodeId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(move |(_, current)| **current == state)
            .map(|(index, _)| NodeId::new(index))
    }

    /// Counts the nodes in each compartment.
    #[must_use]
    pub fn census(&self) -> Census {
        Census::from_states(&self.states)
    }

    /// Summarises the network structure and current infections.
    #[must_use]
    pub fn stats(&self) -> NetworkStats {
        let total_nodes = self.node_count();
        let total_links = self.graph.edge_count();
        NetworkStats {
            total_nodes,
            total_links,
            average_connections: average_degree(total_nodes, total_links),
            infected: self.census().infected,
        }
    }
}

/// Generates a random contact network and seeds the initial infections.
///
/// The contact graph is drawn exactly like [`crate::random_graph`]: one
/// Bernoulli trial per unordered pair in lexicographic order. Under
/// [`Seeding::Random`] the index cases are sampled afterwards from the same
/// `rng`.
///
/// # Examples
/// ```
/// use netlab_core::{NetworkParams, generate_epidemic_network};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let params = NetworkParams::new(20, 3, 1.0).expect("parameters are valid");
/// let network = generate_epidemic_network(&params, &mut SmallRng::seed_from_u64(5));
/// let census = network.census();
/// assert_eq!((census.susceptible, census.infected, census.recovered), (17, 3, 0));
/// assert_eq!(network.graph().edge_count(), 190);
/// ```
#[instrument(
    name = "epidemic.generate_network",
    level = "debug",
    skip(params, rng),
    fields(
        total_nodes = params.total_nodes().get(),
        initial_infected = params.initial_infected(),
        connection_probability = params.connection_probability(),
        seeding = ?params.seeding(),
    ),
)]
pub fn generate_epidemic_network<R>(params: &NetworkParams, rng: &mut R) -> EpidemicNetwork
where
    R: Rng + ?Sized,
{
    let nodes = params.total_nodes().get();
    let mut builder = GraphBuilder::new(nodes);
    draw_bernoulli_edges(&mut builder, nodes, params.connection_probability(), rng);
    let graph = builder.finish();

    let index_cases: Vec<usize> = match params.seeding() {
        Seeding::FirstNodes => (0..params.initial_infected()).collect(),
        Seeding::Random => index::sample(rng, nodes, params.initial_infected()).into_vec(),
    };
    let mut states = vec![HealthState::Susceptible; nodes];
    for case in index_cases {
        if let Some(slot) = states.get_mut(case) {
            *slot = HealthState::Infected;
        }
    }

    let network = EpidemicNetwork::from_parts(graph, states);
    let stats = network.stats();
    debug!(
        links = stats.total_links,
        average_connections = stats.average_connections,
        infected = stats.infected,
        "generated epidemic network"
    );
    network
}
