//! Append-only census history.

use super::state::Census;

/// Compartment counts observed at one simulated time.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TimeSeriesPoint {
    /// Number of steps taken before the observation.
    pub time: u64,
    /// Susceptible nodes.
    pub susceptible: usize,
    /// Infected nodes.
    pub infected: usize,
    /// Recovered nodes.
    pub recovered: usize,
}

impl TimeSeriesPoint {
    /// Builds the point for `census` observed at `time`.
    #[must_use]
    pub const fn from_census(time: u64, census: Census) -> Self {
        Self {
            time,
            susceptible: census.susceptible,
            infected: census.infected,
            recovered: census.recovered,
        }
    }
}

/// Time-ordered history of a simulation.
///
/// Points are only appended by [`crate::Simulation`], one per step, so times
/// are strictly increasing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeSeries {
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub(crate) fn record(&mut self, time: u64, census: Census) {
        debug_assert!(self.points.last().is_none_or(|last| last.time < time));
        self.points.push(TimeSeriesPoint::from_census(time, census));
    }

    /// Returns the recorded points in time order.
    #[must_use]
    #[rustfmt::skip]
    pub fn points(&self) -> &[TimeSeriesPoint] { &self.points }

    /// Returns the number of recorded points.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.points.len() }

    /// Returns whether no point has been recorded.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Returns the most recent point.
    #[must_use]
    pub fn last(&self) -> Option<&TimeSeriesPoint> {
        self.points.last()
    }

    /// Returns the earliest point with the highest infected count.
    #[must_use]
    pub fn peak_infected(&self) -> Option<&TimeSeriesPoint> {
        self.points
            .iter()
            .rev()
            .max_by_key(|point| point.infected)
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a TimeSeriesPoint;
    type IntoIter = std::slice::Iter<'a, TimeSeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
