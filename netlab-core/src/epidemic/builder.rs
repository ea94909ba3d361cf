//! Builder for [`Simulation`] instances.

use rand::{SeedableRng, rngs::SmallRng};

use super::{
    network::generate_epidemic_network,
    params::{NetworkParams, Seeding, TransmissionParams},
    simulation::Simulation,
};
use crate::error::Result;

/// Configures and constructs [`Simulation`] instances.
///
/// The same seed drives both network generation and every later step, so two
/// builders with identical settings produce identical runs.
///
/// # Examples
/// ```
/// use netlab_core::{Seeding, SimulationBuilder};
///
/// let simulation = SimulationBuilder::new()
///     .with_total_nodes(30)
///     .with_initial_infected(2)
///     .with_seeding(Seeding::Random)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(simulation.census().infected, 2);
/// assert_eq!(simulation.time(), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationBuilder {
    total_nodes: usize,
    initial_infected: usize,
    connection_probability: f64,
    beta: f64,
    gamma: f64,
    seeding: Seeding,
    seed: u64,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            total_nodes: 100,
            initial_infected: 3,
            connection_probability: 0.1,
            beta: 0.5,
            gamma: 0.05,
            seeding: Seeding::FirstNodes,
            seed: 0x5EED_CAFE,
        }
    }
}

impl SimulationBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::SimulationBuilder;
    ///
    /// let builder = SimulationBuilder::new();
    /// assert_eq!(builder.total_nodes(), 100);
    /// assert_eq!(builder.initial_infected(), 3);
    /// assert_eq!(builder.beta(), 0.5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the population size.
    #[must_use]
    pub fn with_total_nodes(mut self, total_nodes: usize) -> Self {
        self.total_nodes = total_nodes;
        self
    }

    /// Overrides the number of index cases.
    #[must_use]
    pub fn with_initial_infected(mut self, initial_infected: usize) -> Self {
        self.initial_infected = initial_infected;
        self
    }

    /// Overrides the edge probability of the contact graph.
    #[must_use]
    pub fn with_connection_probability(mut self, probability: f64) -> Self {
        self.connection_probability = probability;
        self
    }

    /// Overrides the per-contact transmission probability.
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Overrides the per-step recovery probability.
    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Overrides how the index cases are chosen.
    #[must_use]
    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Overrides the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured population size.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_nodes(&self) -> usize { self.total_nodes }

    /// Returns the configured number of index cases.
    #[must_use]
    #[rustfmt::skip]
    pub fn initial_infected(&self) -> usize { self.initial_infected }

    /// Returns the configured edge probability.
    #[must_use]
    #[rustfmt::skip]
    pub fn connection_probability(&self) -> f64 { self.connection_probability }

    /// Returns the configured transmission probability.
    #[must_use]
    #[rustfmt::skip]
    pub fn beta(&self) -> f64 { self.beta }

    /// Returns the configured recovery probability.
    #[must_use]
    #[rustfmt::skip]
    pub fn gamma(&self) -> f64 { self.gamma }

    /// Returns the configured seeding strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn seeding(&self) -> Seeding { self.seeding }

    /// Returns the configured random seed.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Validates the configuration, generates the contact network and
    /// constructs a [`Simulation`] positioned at `time = 0`.
    ///
    /// # Errors
    /// Returns the [`crate::EpidemicError`] raised by [`NetworkParams::new`]
    /// or [`TransmissionParams::new`].
    ///
    /// # Examples
    /// ```
    /// use netlab_core::{EpidemicErrorCode, SimulationBuilder};
    ///
    /// let err = SimulationBuilder::new()
    ///     .with_total_nodes(0)
    ///     .build()
    ///     .expect_err("an empty population is rejected");
    /// assert_eq!(err.code(), EpidemicErrorCode::EmptyPopulation);
    /// ```
    pub fn build(self) -> Result<Simulation> {
        let network_params = NetworkParams::new(
            self.total_nodes,
            self.initial_infected,
            self.connection_probability,
        )?
        .with_seeding(self.seeding);
        let transmission = TransmissionParams::new(self.beta, self.gamma)?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let network = generate_epidemic_network(&network_params, &mut rng);
        Ok(Simulation::with_rng(network, transmission, rng))
    }
}
