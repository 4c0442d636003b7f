use std::borrow::Cow;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AssetDataError;

/// An asset's historical annual return series.
///
/// This is the raw material for empirical resampling: each simulated year's
/// return for the asset is drawn uniformly, with replacement, from this
/// series. The series is immutable once constructed. Series of different
/// lengths may coexist in one portfolio (newer instruments have shorter
/// histories); that is a known bias the engine does not correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReturns {
    /// Asset name for display and error reporting
    pub name: Cow<'static, str>,
    /// Annual returns, oldest first. Every entry must be >= -1.0.
    pub returns: Cow<'static, [f64]>,
}

impl AssetReturns {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        returns: impl Into<Cow<'static, [f64]>>,
    ) -> Self {
        Self {
            name: name.into(),
            returns: returns.into(),
        }
    }

    /// Number of years of historical data available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Check that the series is non-empty and every return is >= -1.0.
    ///
    /// A return below -1.0 would imply losing more than the entire position
    /// in a single year, which no price series can produce.
    pub fn validate(&self) -> Result<(), AssetDataError> {
        if self.returns.is_empty() {
            return Err(AssetDataError::EmptySeries {
                asset: self.name.to_string(),
            });
        }
        for (year_index, &value) in self.returns.iter().enumerate() {
            if value < -1.0 {
                return Err(AssetDataError::ReturnBelowFloor {
                    asset: self.name.to_string(),
                    year_index,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Sample a random year's return (i.i.d. with replacement).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<f64> {
        if self.returns.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.returns.len());
        Some(self.returns[idx])
    }

    /// Return at a specific historical year index, used by joint-year
    /// sampling where one index is shared across all assets.
    #[must_use]
    pub fn return_at(&self, year_index: usize) -> f64 {
        self.returns[year_index]
    }

    /// Compute basic statistics of the historical returns.
    pub fn statistics(&self) -> Option<SeriesStatistics> {
        if self.returns.is_empty() {
            return None;
        }
        let n = self.returns.len() as f64;
        let arithmetic_mean = self.returns.iter().sum::<f64>() / n;

        // Geometric mean: (product of (1+r))^(1/n) - 1
        let product: f64 = self.returns.iter().map(|r| 1.0 + r).product();
        let geometric_mean = product.powf(1.0 / n) - 1.0;

        let variance = self
            .returns
            .iter()
            .map(|r| (r - arithmetic_mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        let min = self.returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .returns
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Some(SeriesStatistics {
            num_years: self.returns.len(),
            arithmetic_mean,
            geometric_mean,
            std_dev,
            min,
            max,
        })
    }
}

/// Summary statistics of a historical return series
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub num_years: usize,
    pub arithmetic_mean: f64,
    pub geometric_mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}
