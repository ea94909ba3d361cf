//! Discrete-time SIR epidemics on contact networks.
//!
//! [`generate_epidemic_network`] draws a random contact graph and seeds the
//! index cases, [`step_epidemic`] applies one synchronous round of
//! transitions, and [`Simulation`] drives repeated steps while recording a
//! [`TimeSeries`].

mod builder;
mod network;
mod params;
mod series;
mod simulation;
mod state;
mod step;

pub use self::{
    builder::SimulationBuilder,
    network::{EpidemicNetwork, NetworkStats, generate_epidemic_network},
    params::{NetworkParams, Seeding, TransmissionParams},
    series::{TimeSeries, TimeSeriesPoint},
    simulation::Simulation,
    state::{Census, HealthState},
    step::{StepOutcome, StepReport, step_epidemic},
};
