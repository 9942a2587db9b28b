//! Simulation results
//!
//! The output of a full Monte Carlo run. Computed fresh on each
//! invocation, never mutated afterward, owned by the caller; the
//! presentation layer consumes it verbatim.

use serde::{Deserialize, Serialize};

/// Percentile bands and success probability from one ensemble run.
///
/// The three series are equal-length and indexed by simulation year;
/// `years[i]` labels the calendar year of `median[i]` / `downside[i]`.
/// Balances are in reference-year (today's) dollars. Each reported value
/// is a member of the sample set (single floored-rank pick, no
/// interpolation between adjacent ranks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Percentage of paths whose balance never went negative, rounded to 0..=100
    pub probability: u8,
    /// Median balance per year, today's dollars
    pub median: Vec<f64>,
    /// 10th-percentile balance per year, today's dollars
    pub downside: Vec<f64>,
    /// Calendar year labels
    pub years: Vec<i32>,
}

impl SimulationResult {
    /// Number of simulated years.
    #[must_use]
    pub fn num_years(&self) -> usize {
        self.years.len()
    }
}
