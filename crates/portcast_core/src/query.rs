//! Probability queries over a finished outcome set.
//!
//! Pure, O(trials) reads of the immutable `OutcomeSet`. Bounds are expressed
//! in absolute currency units — the same unit as `initial_investment` — not
//! as growth percentages; `OutcomeSet::growth_percentages` serves callers
//! who think in percentage terms.

use crate::error::QueryError;
use crate::model::{OutcomeSet, SimulationConfig};

/// Fraction of trials whose final value falls within the given bounds.
///
/// Bounds are absolute currency values and both ends are inclusive:
/// - only `lower` → fraction of trials with final value >= `lower`;
/// - only `upper` → fraction of trials with final value <= `upper`;
/// - both → fraction with `lower` <= final value <= `upper`.
///
/// Fails with `QueryError::MissingBounds` when neither bound is supplied,
/// and `QueryError::InvertedBounds` when `lower` > `upper`.
pub fn growth_probability(
    outcomes: &OutcomeSet,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
) -> Result<f64, QueryError> {
    let count = match (lower_bound, upper_bound) {
        (None, None) => return Err(QueryError::MissingBounds),
        (Some(lower), Some(upper)) if lower > upper => {
            return Err(QueryError::InvertedBounds { lower, upper });
        }
        (Some(lower), None) => outcomes.final_values().iter().filter(|&&v| v >= lower).count(),
        (None, Some(upper)) => outcomes.final_values().iter().filter(|&&v| v <= upper).count(),
        (Some(lower), Some(upper)) => outcomes
            .final_values()
            .iter()
            .filter(|&&v| v >= lower && v <= upper)
            .count(),
    };
    Ok(count as f64 / outcomes.num_trials() as f64)
}

/// Fraction of trials whose final value strictly exceeds the deterministic
/// benchmark, `initial_investment * (1 + benchmark_annual_return)^years`.
#[must_use]
pub fn benchmark_outperformance_rate(outcomes: &OutcomeSet, config: &SimulationConfig) -> f64 {
    let benchmark_final = config.benchmark_final_value();
    let count = outcomes
        .final_values()
        .iter()
        .filter(|&&v| v > benchmark_final)
        .count();
    count as f64 / outcomes.num_trials() as f64
}
