//! Validated epidemic parameters.
//!
//! Construction is the only place parameters are checked; a value of either
//! type is always usable by the engine.

use std::num::NonZeroUsize;

use crate::error::{EpidemicError, Parameter, Result, check_probability};

/// How the initially infected nodes are chosen.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Seeding {
    /// Infect the first `initial_infected` nodes in insertion order.
    #[default]
    FirstNodes,
    /// Infect `initial_infected` distinct nodes sampled uniformly at random.
    Random,
}

/// Parameters for generating an epidemic contact network.
///
/// # Examples
/// ```
/// use netlab_core::{EpidemicError, NetworkParams, Seeding};
///
/// let params = NetworkParams::new(100, 3, 0.1)?.with_seeding(Seeding::Random);
/// assert_eq!(params.total_nodes().get(), 100);
/// assert_eq!(params.seeding(), Seeding::Random);
///
/// assert!(matches!(
///     NetworkParams::new(10, 11, 0.1),
///     Err(EpidemicError::InitialInfectedOutOfRange { .. })
/// ));
/// # Ok::<(), EpidemicError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkParams {
    total_nodes: NonZeroUsize,
    initial_infected: usize,
    connection_probability: f64,
    seeding: Seeding,
}

impl NetworkParams {
    /// Validates and bundles the network parameters.
    ///
    /// # Errors
    /// Returns [`EpidemicError::EmptyPopulation`] when `total_nodes` is zero,
    /// [`EpidemicError::InitialInfectedOutOfRange`] when `initial_infected`
    /// exceeds `total_nodes`, and [`EpidemicError::ProbabilityOutOfRange`] when
    /// `connection_probability` is outside `[0, 1]` or NaN.
    pub fn new(
        total_nodes: usize,
        initial_infected: usize,
        connection_probability: f64,
    ) -> Result<Self> {
        let total_nodes = NonZeroUsize::new(total_nodes).ok_or(EpidemicError::EmptyPopulation)?;
        if initial_infected > total_nodes.get() {
            return Err(EpidemicError::InitialInfectedOutOfRange {
                initial_infected,
                total_nodes: total_nodes.get(),
            });
        }
        let connection_probability =
            check_probability(Parameter::ConnectionProbability, connection_probability)?;
        Ok(Self {
            total_nodes,
            initial_infected,
            connection_probability,
            seeding: Seeding::default(),
        })
    }

    /// Overrides the seeding strategy.
    #[must_use]
    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Returns the population size.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_nodes(&self) -> NonZeroUsize { self.total_nodes }

    /// Returns the number of nodes infected at `time = 0`.
    #[must_use]
    #[rustfmt::skip]
    pub fn initial_infected(&self) -> usize { self.initial_infected }

    /// Returns the edge probability of the contact graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn connection_probability(&self) -> f64 { self.connection_probability }

    /// Returns the seeding strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn seeding(&self) -> Seeding { self.seeding }
}

/// Per-step transition probabilities.
///
/// # Examples
/// ```
/// use netlab_core::{EpidemicError, Parameter, TransmissionParams};
///
/// let params = TransmissionParams::new(0.5, 0.05)?;
/// assert_eq!(params.beta(), 0.5);
///
/// let err = TransmissionParams::new(0.5, 1.5).expect_err("gamma above 1 is rejected");
/// assert!(matches!(
///     err,
///     EpidemicError::ProbabilityOutOfRange { parameter: Parameter::Gamma, .. }
/// ));
/// # Ok::<(), EpidemicError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransmissionParams {
    beta: f64,
    gamma: f64,
}

impl TransmissionParams {
    /// Validates and bundles the transmission parameters.
    ///
    /// # Errors
    /// Returns [`EpidemicError::ProbabilityOutOfRange`] when `beta` or `gamma`
    /// is outside `[0, 1]` or NaN.
    pub fn new(beta: f64, gamma: f64) -> Result<Self> {
        Ok(Self {
            beta: check_probability(Parameter::Beta, beta)?,
            gamma: check_probability(Parameter::Gamma, gamma)?,
        })
    }

    /// Returns the probability that one infected contact transmits in a step.
    #[must_use]
    #[rustfmt::skip]
    pub fn beta(&self) -> f64 { self.beta }

    /// Returns the probability that an infected node recovers in a step.
    #[must_use]
    #[rustfmt::skip]
    pub fn gamma(&self) -> f64 { self.gamma }
}
