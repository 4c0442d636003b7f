use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Historical annualized return of the S&P 500, the default benchmark.
pub const DEFAULT_BENCHMARK_ANNUAL_RETURN: f64 = 0.1188;

/// How simulated-year returns are drawn from the historical series.
///
/// The two policies differ materially in tail behavior: `Independent`
/// destroys within-year co-movement between assets, `JointYears` keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SamplingPolicy {
    /// Each asset's return for a simulated year is an independent uniform
    /// draw from that asset's own history. Cross-asset correlation within a
    /// historical year is NOT preserved.
    #[default]
    Independent,
    /// One historical year index is drawn per simulated year and shared by
    /// every asset, preserving within-year co-movement (and therefore joint
    /// tail risk). Requires all series to have equal length.
    JointYears,
}

/// Immutable parameters for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of simulated years per trial
    pub years: usize,
    /// Number of independent trials
    pub trials: usize,
    /// Starting portfolio value, in currency units
    pub initial_investment: f64,
    /// Annualized return of the deterministic benchmark
    pub benchmark_annual_return: f64,
    /// Return-draw policy (see `SamplingPolicy`)
    pub sampling: SamplingPolicy,
    /// Master seed; each trial derives its own seed from this
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            years: 10,
            trials: 1_000,
            initial_investment: 100.0,
            benchmark_annual_return: DEFAULT_BENCHMARK_ANNUAL_RETURN,
            sampling: SamplingPolicy::default(),
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Check that years, trials, and initial investment are all positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.years == 0 {
            return Err(ConfigError::ZeroYears);
        }
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if !(self.initial_investment > 0.0) || !self.initial_investment.is_finite() {
            return Err(ConfigError::NonPositiveInitialInvestment(
                self.initial_investment,
            ));
        }
        Ok(())
    }

    /// Deterministic final value of the benchmark after `years` of
    /// compounding at `benchmark_annual_return`.
    #[must_use]
    pub fn benchmark_final_value(&self) -> f64 {
        // powf rather than powi: a usize exponent cast to i32 would wrap
        // for year counts past i32::MAX
        self.initial_investment * (1.0 + self.benchmark_annual_return).powf(self.years as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.benchmark_annual_return, 0.1188);
        assert_eq!(config.sampling, SamplingPolicy::Independent);
    }

    #[test]
    fn test_zero_years_rejected() {
        let config = SimulationConfig {
            years: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroYears));
    }

    #[test]
    fn test_zero_trials_rejected() {
        let config = SimulationConfig {
            trials: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTrials));
    }

    #[test]
    fn test_nonpositive_initial_investment_rejected() {
        for bad in [0.0, -100.0, f64::NAN] {
            let config = SimulationConfig {
                initial_investment: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NonPositiveInitialInvestment(_))
            ));
        }
    }

    #[test]
    fn test_benchmark_final_value_huge_year_count() {
        // A year count past i32::MAX must not wrap into a negative exponent
        // and report a benchmark below the initial investment
        let config = SimulationConfig {
            years: i32::MAX as usize + 2,
            initial_investment: 100.0,
            benchmark_annual_return: 0.10,
            ..Default::default()
        };
        assert!(config.benchmark_final_value() > config.initial_investment);
    }

    #[test]
    fn test_benchmark_final_value() {
        let config = SimulationConfig {
            years: 2,
            initial_investment: 100.0,
            benchmark_annual_return: 0.10,
            ..Default::default()
        };
        assert!((config.benchmark_final_value() - 121.0).abs() < 1e-9);
    }
}
