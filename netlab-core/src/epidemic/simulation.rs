//! Stateful driver that steps an epidemic and records its history.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use super::{
    network::EpidemicNetwork,
    params::TransmissionParams,
    series::TimeSeries,
    state::Census,
    step::{StepReport, step_epidemic},
};

/// Owns an [`EpidemicNetwork`], its transmission parameters and a seeded
/// random source, and records a [`TimeSeries`] point after every step.
///
/// The series always starts with the `time = 0` census, so after `n` steps it
/// holds `n + 1` points.
///
/// # Examples
/// ```
/// use netlab_core::SimulationBuilder;
///
/// let mut simulation = SimulationBuilder::new()
///     .with_total_nodes(50)
///     .with_seed(7)
///     .build()
///     .expect("configuration is valid");
/// let steps = simulation.run(20);
/// assert!(steps <= 20);
/// assert_eq!(simulation.series().len() as u64, steps + 1);
/// assert_eq!(simulation.census().total(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    network: EpidemicNetwork,
    transmission: TransmissionParams,
    rng: SmallRng,
    time: u64,
    series: TimeSeries,
}

impl Simulation {
    /// Starts a simulation over `network` with a random source seeded from `seed`.
    #[must_use]
    pub fn new(network: EpidemicNetwork, transmission: TransmissionParams, seed: u64) -> Self {
        Self::with_rng(network, transmission, SmallRng::seed_from_u64(seed))
    }

    pub(crate) fn with_rng(
        network: EpidemicNetwork,
        transmission: TransmissionParams,
        rng: SmallRng,
    ) -> Self {
        let mut series = TimeSeries::default();
        series.record(0, network.census());
        Self {
            network,
            transmission,
            rng,
            time: 0,
            series,
        }
    }

    /// Advances one step and appends the resulting census to the series.
    pub fn step(&mut self) -> StepReport {
        let outcome = step_epidemic(&self.network, &self.transmission, &mut self.rng);
        self.network = outcome.network;
        self.time += 1;
        self.series.record(self.time, outcome.report.census);
        outcome.report
    }

    /// Steps until no node is infected or `max_steps` steps have run.
    ///
    /// Returns the number of steps taken by this call.
    #[instrument(
        name = "epidemic.run",
        skip(self),
        fields(nodes = self.network.node_count(), start = self.time),
    )]
    pub fn run(&mut self, max_steps: u64) -> u64 {
        let mut taken = 0;
        while taken < max_steps && !self.is_extinct() {
            self.step();
            taken += 1;
        }
        let census = self.census();
        info!(
            steps = taken,
            time = self.time,
            susceptible = census.susceptible,
            infected = census.infected,
            recovered = census.recovered,
            extinct = self.is_extinct(),
            "simulation stopped"
        );
        taken
    }

    /// Replaces the transmission parameters used by later steps.
    pub fn set_transmission(&mut self, transmission: TransmissionParams) {
        self.transmission = transmission;
    }

    /// Returns whether the infection has burnt out.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.census().infected == 0
    }

    /// Returns the current compartment counts.
    #[must_use]
    pub fn census(&self) -> Census {
        self.network.census()
    }

    /// Returns the current snapshot.
    #[must_use]
    #[rustfmt::skip]
    pub fn network(&self) -> &EpidemicNetwork { &self.network }

    /// Returns the transmission parameters in effect.
    #[must_use]
    #[rustfmt::skip]
    pub fn transmission(&self) -> TransmissionParams { self.transmission }

    /// Returns the number of steps taken so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn time(&self) -> u64 { self.time }

    /// Returns the recorded history.
    #[must_use]
    #[rustfmt::skip]
    pub fn series(&self) -> &TimeSeries { &self.series }

    /// Consumes the simulation and returns its history.
    #[must_use]
    pub fn into_series(self) -> TimeSeries {
        self.series
    }
}
