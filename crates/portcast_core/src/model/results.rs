//! Simulation results
//!
//! Output types from a Monte Carlo run. An `OutcomeSet` is assembled once,
//! after every trial finishes, and is read-only from then on: all statistics
//! and probability queries are pure functions of it.

use serde::{Deserialize, Serialize};

/// One trial's portfolio value at each simulated year end.
///
/// Length is always `years + 1`; index 0 holds the initial investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialPath {
    values: Vec<f64>,
}

impl TrialPath {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// Year-end values, index 0 = initial investment.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of recorded points (`years + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Portfolio value at the end of the last simulated year.
    #[must_use]
    pub fn final_value(&self) -> f64 {
        *self.values.last().expect("trial path is never empty")
    }
}

/// The complete, immutable result of one Monte Carlo run.
///
/// Holds every trial's year-by-year path (for path plots) and the derived
/// final-value array (for histograms and probability queries). No partial or
/// streaming view of a run ever exists; the engine either finishes all
/// trials or returns an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSet {
    initial_investment: f64,
    paths: Vec<TrialPath>,
    final_values: Vec<f64>,
}

impl OutcomeSet {
    pub(crate) fn new(initial_investment: f64, paths: Vec<TrialPath>) -> Self {
        let final_values = paths.iter().map(TrialPath::final_value).collect();
        Self {
            initial_investment,
            paths,
            final_values,
        }
    }

    #[must_use]
    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    /// All trial paths, one per trial, in trial order.
    #[must_use]
    pub fn paths(&self) -> &[TrialPath] {
        &self.paths
    }

    /// Final portfolio value of each trial, in trial order.
    #[must_use]
    pub fn final_values(&self) -> &[f64] {
        &self.final_values
    }

    /// Number of trials.
    #[must_use]
    pub fn num_trials(&self) -> usize {
        self.paths.len()
    }

    /// Final growth of each trial as a percentage of the initial investment
    /// (e.g. 35.0 means the portfolio ended 35% above where it started).
    #[must_use]
    pub fn growth_percentages(&self) -> Vec<f64> {
        self.final_values
            .iter()
            .map(|v| (v - self.initial_investment) / self.initial_investment * 100.0)
            .collect()
    }
}
