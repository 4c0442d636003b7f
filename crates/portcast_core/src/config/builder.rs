//! Simulation builder
//!
//! Fluent API for assembling a portfolio and simulation parameters in one
//! pass, with all validation applied at `build()`.
//!
//! # Example
//!
//! ```ignore
//! use portcast_core::config::SimulationBuilder;
//!
//! let (portfolio, config) = SimulationBuilder::new()
//!     .years(10)
//!     .trials(1_000)
//!     .initial_investment(100.0)
//!     .seed(7)
//!     .asset("VTSAX", 0.7, vec![0.21, -0.05, 0.18, 0.29, -0.19])
//!     .asset("BND", 0.3, vec![0.06, -0.02, 0.04, 0.01, -0.13])
//!     .build()?;
//! ```

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::error::SimulationError;
use crate::model::{AssetReturns, Holding, Portfolio, SamplingPolicy, SimulationConfig};

/// Builder for a `(Portfolio, SimulationConfig)` pair.
pub struct SimulationBuilder {
    config: SimulationConfig,
    holdings: Vec<Holding>,
    // Asset name -> index into holdings, so re-adding a name replaces it
    index_by_name: FxHashMap<String, usize>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
            holdings: Vec::new(),
            index_by_name: FxHashMap::default(),
        }
    }

    /// Number of simulated years per trial
    #[must_use]
    pub fn years(mut self, years: usize) -> Self {
        self.config.years = years;
        self
    }

    /// Number of independent trials
    #[must_use]
    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    /// Starting portfolio value, in currency units
    #[must_use]
    pub fn initial_investment(mut self, amount: f64) -> Self {
        self.config.initial_investment = amount;
        self
    }

    /// Annualized return of the deterministic benchmark
    /// (default: 11.88%, the S&P 500 historical average)
    #[must_use]
    pub fn benchmark_annual_return(mut self, annual_return: f64) -> Self {
        self.config.benchmark_annual_return = annual_return;
        self
    }

    /// Return-draw policy (default: independent per-asset draws)
    #[must_use]
    pub fn sampling(mut self, policy: SamplingPolicy) -> Self {
        self.config.sampling = policy;
        self
    }

    /// Master seed for reproducible runs
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Add an asset with its target weight and historical annual returns.
    /// Adding the same name twice replaces the earlier entry.
    #[must_use]
    pub fn asset(
        mut self,
        name: impl Into<Cow<'static, str>>,
        weight: f64,
        returns: impl Into<Cow<'static, [f64]>>,
    ) -> Self {
        let holding = Holding {
            asset: AssetReturns::new(name, returns),
            weight,
        };
        let name = holding.asset.name.to_string();
        match self.index_by_name.get(&name).copied() {
            Some(idx) => self.holdings[idx] = holding,
            None => {
                self.index_by_name.insert(name, self.holdings.len());
                self.holdings.push(holding);
            }
        }
        self
    }

    /// Validate everything and produce the portfolio and config.
    pub fn build(self) -> Result<(Portfolio, SimulationConfig), SimulationError> {
        self.config.validate()?;
        let portfolio = Portfolio::new(self.holdings)?;
        for holding in portfolio.holdings() {
            holding.asset.validate()?;
        }
        Ok((portfolio, self.config))
    }
}
