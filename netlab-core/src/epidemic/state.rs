//! Per-node SIR state and population counts.

/// Compartment a node occupies in the SIR model.
///
/// Transitions only run forwards: Susceptible to Infected to Recovered.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum HealthState {
    /// Can be infected by an infected neighbour.
    #[default]
    Susceptible,
    /// Spreads the infection until it recovers.
    Infected,
    /// Immune for the rest of the run.
    Recovered,
}

/// Number of nodes in each compartment.
///
/// # Examples
/// ```
/// use netlab_core::{Census, HealthState};
///
/// let census = Census::from_states(&[
///     HealthState::Infected,
///     HealthState::Susceptible,
///     HealthState::Susceptible,
/// ]);
/// assert_eq!(census.susceptible, 2);
/// assert_eq!(census.infected, 1);
/// assert_eq!(census.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Census {
    /// Susceptible nodes.
    pub susceptible: usize,
    /// Infected nodes.
    pub infected: usize,
    /// Recovered nodes.
    pub recovered: usize,
}

impl Census {
    /// Tallies `states` by compartment.
    #[must_use]
    pub fn from_states(states: &[HealthState]) -> Self {
        states.iter().fold(Self::default(), |mut census, state| {
            match state {
                HealthState::Susceptible => census.susceptible += 1,
                HealthState::Infected => census.infected += 1,
                HealthState::Recovered => census.recovered += 1,
            }
            census
        })
    }

    /// Returns the population size.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}
