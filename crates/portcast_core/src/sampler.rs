//! Per-year return sampling.
//!
//! A `YearSampler` draws one simulated year's return for every asset in a
//! portfolio, according to the configured `SamplingPolicy`. All asset-data
//! validation happens at construction, so drawing never fails mid-trial.

use rand::Rng;

use crate::error::AssetDataError;
use crate::model::{Portfolio, SamplingPolicy};

/// Draws one return per asset per simulated year.
///
/// Borrows the portfolio's return series, which are read-only and safely
/// shared across all trials.
#[derive(Debug)]
pub struct YearSampler<'a> {
    portfolio: &'a Portfolio,
    policy: SamplingPolicy,
    /// Common series length, only set for `JointYears`
    joint_len: Option<usize>,
}

impl<'a> YearSampler<'a> {
    /// Validate every asset's series and build a sampler.
    ///
    /// Fails if any series is empty or contains a return below -1.0, or, in
    /// `JointYears` mode, if the series do not all cover the same number of
    /// years (a shared year index would otherwise be meaningless).
    pub fn new(portfolio: &'a Portfolio, policy: SamplingPolicy) -> Result<Self, AssetDataError> {
        for holding in portfolio.holdings() {
            holding.asset.validate()?;
        }

        let joint_len = match policy {
            SamplingPolicy::Independent => None,
            SamplingPolicy::JointYears => {
                let holdings = portfolio.holdings();
                let expected = holdings[0].asset.len();
                for holding in &holdings[1..] {
                    if holding.asset.len() != expected {
                        return Err(AssetDataError::SeriesLengthMismatch {
                            asset: holding.asset.name.to_string(),
                            len: holding.asset.len(),
                            expected,
                        });
                    }
                }
                Some(expected)
            }
        };

        Ok(Self {
            portfolio,
            policy,
            joint_len,
        })
    }

    /// Draw one simulated year's return for each asset, in holding order,
    /// appending into `out`.
    ///
    /// `Independent`: one uniform draw per asset from its own history.
    /// `JointYears`: a single uniform draw of a historical year index,
    /// applied to every asset, preserving that year's cross-asset
    /// co-movement.
    pub fn sample_year<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut Vec<f64>) {
        out.clear();
        match self.policy {
            SamplingPolicy::Independent => {
                for holding in self.portfolio.holdings() {
                    let r = holding
                        .asset
                        .sample(rng)
                        .expect("series validated non-empty at construction");
                    out.push(r);
                }
            }
            SamplingPolicy::JointYears => {
                let len = self.joint_len.expect("joint_len set for JointYears");
                let idx = rng.random_range(0..len);
                for holding in self.portfolio.holdings() {
                    out.push(holding.asset.return_at(idx));
                }
            }
        }
    }
}
