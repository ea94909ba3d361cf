//! Benchmark parameter types and fixtures.

use std::fmt;

use netlab_core::{
    EpidemicNetwork, Graph, NetworkParams, Seeding, Topology, generate_epidemic_network,
};
use rand::{SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Seed shared by every benchmark fixture.
pub const SEED: u64 = 42;

/// Parameters for a metrics benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Topology to measure.
    pub topology: Topology,
}

impl GraphBenchParams {
    /// Generates the graph under test with the shared seed.
    #[must_use]
    pub fn graph(&self) -> Graph {
        self.topology.generate(&mut SmallRng::seed_from_u64(SEED))
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.topology.name().replace(' ', "_");
        write!(f, "{name},n={}", self.topology.nodes())
    }
}

/// Parameters for an epidemic step benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct EpidemicBenchParams {
    /// Population size.
    pub nodes: usize,
    /// Edge probability of the contact network.
    pub connection_probability: f64,
    /// Fraction of the population infected at the start, in percent.
    pub infected_percent: usize,
}

impl EpidemicBenchParams {
    /// Generates the contact network under test with randomly placed index cases.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the parameters are rejected.
    pub fn network(&self) -> Result<EpidemicNetwork, BenchSetupError> {
        let initial_infected = self.nodes * self.infected_percent / 100;
        let params = NetworkParams::new(self.nodes, initial_infected, self.connection_probability)?
            .with_seeding(Seeding::Random);
        Ok(generate_epidemic_network(&params, &mut SmallRng::seed_from_u64(SEED)))
    }
}

impl fmt::Display for EpidemicBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},p={},infected={}%",
            self.nodes, self.connection_probability, self.infected_percent
        )
    }
}
