//! Monte Carlo portfolio growth simulation library
//!
//! This crate approximates the probability distribution of a multi-asset
//! portfolio's future value by resampling each asset's historical annual
//! returns. Every simulated year each asset's return is drawn directly from
//! its observed history (empirical bootstrap, not a fitted distribution),
//! the portfolio is rebalanced back to its target weights, and the process
//! repeats for many independent trials. The collected outcomes support:
//! - summary statistics (mean, median, min/max, arbitrary percentiles)
//! - threshold and interval probability queries over final values
//! - the rate at which trials outperform a fixed-return benchmark
//!
//! Results assume historical data reflects future performance; assets with
//! shorter histories bias the resampling toward their recorded era.
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic simulation setup:
//!
//! ```ignore
//! use portcast_core::config::SimulationBuilder;
//! use portcast_core::simulation::simulate;
//!
//! let (portfolio, config) = SimulationBuilder::new()
//!     .years(10)
//!     .trials(1_000)
//!     .initial_investment(100.0)
//!     .asset("VTSAX", 0.7, vec![0.21, -0.05, 0.18, 0.29, -0.19])
//!     .asset("BND", 0.3, vec![0.06, -0.02, 0.04, 0.01, -0.13])
//!     .build()?;
//!
//! let outcomes = simulate(&portfolio, &config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod query;
pub mod sampler;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{OutcomeStats, OutcomeSummary};
pub use config::SimulationBuilder;
pub use error::SimulationError;
pub use model::{
    AssetReturns, Holding, OutcomeSet, Portfolio, SamplingPolicy, SimulationConfig, TrialPath,
};
pub use query::{benchmark_outperformance_rate, growth_probability};
pub use simulation::simulate;
