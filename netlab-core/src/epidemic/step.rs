//! One synchronous tick of the SIR process.

use rand::Rng;
use tracing::{debug, instrument};

use super::{
    network::EpidemicNetwork,
    params::TransmissionParams,
    state::{Census, HealthState},
};
use crate::graph::NodeId;

/// What happened during one call to [`step_epidemic`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// Susceptible nodes that became Infected.
    pub new_infections: usize,
    /// Infected nodes that became Recovered.
    pub new_recoveries: usize,
    /// Compartment counts after the step.
    pub census: Census,
    /// Transmission probability used.
    pub beta: f64,
    /// Recovery probability used.
    pub gamma: f64,
    /// Mean number of links touching an infected node, per infected node,
    /// measured before the step. Zero when nobody was infected.
    pub contacts_per_infected: f64,
}

/// The network after one step and the report describing the step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    /// Snapshot after all transitions were applied.
    pub network: EpidemicNetwork,
    /// Counts describing the transitions.
    pub report: StepReport,
}

/// Advances the epidemic by one discrete step.
///
/// Every decision is made against the states at the start of the step:
///
/// 1. each Susceptible node draws one Bernoulli trial with probability `beta`
///    per Infected neighbour, in ascending neighbour order, stopping at the
///    first success;
/// 2. each node that was Infected draws one trial with probability `gamma`
///    to recover.
///
/// The collected transitions are applied together to a new snapshot; `network`
/// itself is left untouched and the contact graph is shared. Nodes are visited
/// in node order in both passes, so a seeded `rng` reproduces a run exactly.
///
/// # Examples
/// ```
/// use netlab_core::{
///     EpidemicNetwork, HealthState, NodeId, TransmissionParams, complete_graph, step_epidemic,
/// };
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let network = EpidemicNetwork::with_index_cases(complete_graph(5), [NodeId::new(0)])
///     .expect("index case exists");
/// let params = TransmissionParams::new(1.0, 0.0).expect("probabilities are valid");
/// let outcome = step_epidemic(&network, &params, &mut SmallRng::seed_from_u64(1));
/// assert_eq!(outcome.report.new_infections, 4);
/// assert!(outcome.network.states().iter().all(|state| *state == HealthState::Infected));
/// assert_eq!(network.census().infected, 1);
/// ```
#[must_use]
#[instrument(
    name = "epidemic.step",
    level = "debug",
    skip(network, params, rng),
    fields(nodes = network.node_count(), beta = params.beta(), gamma = params.gamma()),
)]
pub fn step_epidemic<R>(
    network: &EpidemicNetwork,
    params: &TransmissionParams,
    rng: &mut R,
) -> StepOutcome
where
    R: Rng + ?Sized,
{
    let current = network.states();
    let is_infected =
        |index: usize| matches!(current.get(index), Some(HealthState::Infected));
    let mut next = current.to_vec();

    let mut new_infections = 0;
    for (index, state) in current.iter().enumerate() {
        if *state != HealthState::Susceptible {
            continue;
        }
        let infected = network
            .adjacency()
            .neighbours(NodeId::new(index))
            .iter()
            .filter(|neighbour| is_infected(neighbour.index()))
            .any(|_| rng.gen_bool(params.beta()));
        if infected {
            if let Some(slot) = next.get_mut(index) {
                *slot = HealthState::Infected;
                new_infections += 1;
            }
        }
    }

    let mut new_recoveries = 0;
    for (index, state) in current.iter().enumerate() {
        if *state == HealthState::Infected && rng.gen_bool(params.gamma()) {
            if let Some(slot) = next.get_mut(index) {
                *slot = HealthState::Recovered;
                new_recoveries += 1;
            }
        }
    }

    let report = StepReport {
        new_infections,
        new_recoveries,
        census: Census::from_states(&next),
        beta: params.beta(),
        gamma: params.gamma(),
        contacts_per_infected: contacts_per_infected(network),
    };
    debug!(
        new_infections,
        new_recoveries,
        susceptible = report.census.susceptible,
        infected = report.census.infected,
        recovered = report.census.recovered,
        "epidemic step complete"
    );
    record_step(&report);

    StepOutcome {
        network: network.with_states(next),
        report,
    }
}

fn contacts_per_infected(network: &EpidemicNetwork) -> f64 {
    let infected = network.nodes_in(HealthState::Infected).count();
    if infected == 0 {
        return 0.0;
    }
    let contacts = network
        .graph()
        .edges()
        .iter()
        .filter(|edge| {
            network.state(edge.source()) == Some(HealthState::Infected)
                || network.state(edge.target()) == Some(HealthState::Infected)
        })
        .count();
    contacts as f64 / infected as f64
}

#[cfg(feature = "metrics")]
fn record_step(report: &StepReport) {
    ::metrics::counter!("epidemic_new_infections_total").increment(report.new_infections as u64);
    ::metrics::counter!("epidemic_new_recoveries_total").increment(report.new_recoveries as u64);
    ::metrics::gauge!("epidemic_infected").set(report.census.infected as f64);
}

#[cfg(not(feature = "metrics"))]
fn record_step(_report: &StepReport) {}
