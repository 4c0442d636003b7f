use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, WEIGHT_TOLERANCE};
use crate::model::AssetReturns;

/// One asset and its target weight within a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub asset: AssetReturns,
    /// Target allocation in [0, 1]; re-applied at every annual rebalance
    pub weight: f64,
}

/// A portfolio: ordered holdings whose weights sum to 1.0.
///
/// Holdings keep their insertion order so that per-asset random draws happen
/// in a deterministic order for a given seed. The portfolio is immutable for
/// the duration of a simulation run; weights are the rebalancing target,
/// re-applied every simulated year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// Build a portfolio, checking the weight invariant eagerly.
    ///
    /// Fails if there are no holdings, any weight is outside [0, 1], or the
    /// weights do not sum to 1.0 within `WEIGHT_TOLERANCE`.
    pub fn new(holdings: Vec<Holding>) -> Result<Self, PortfolioError> {
        let portfolio = Self { holdings };
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check the weight invariant: non-empty holdings, each weight in
    /// [0, 1], weights summing to 1.0 within `WEIGHT_TOLERANCE`.
    ///
    /// `new` applies this check, but a `Portfolio` can also arrive through
    /// deserialization, which fills the fields directly; the engine
    /// re-validates before running any trial.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.holdings.is_empty() {
            return Err(PortfolioError::Empty);
        }
        for h in &self.holdings {
            if !(0.0..=1.0).contains(&h.weight) || !h.weight.is_finite() {
                return Err(PortfolioError::WeightOutOfRange {
                    asset: h.asset.name.to_string(),
                    weight: h.weight,
                });
            }
        }
        let sum: f64 = self.holdings.iter().map(|h| h.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(PortfolioError::WeightSumMismatch { sum });
        }
        Ok(())
    }

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Number of assets in the portfolio.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.holdings.iter().map(|h| h.weight)
    }
}
