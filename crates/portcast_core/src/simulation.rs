//! Trial execution and the Monte Carlo engine.
//!
//! A trial advances one simulated portfolio across the configured number of
//! years, rebalancing to target weights at every year end. The engine runs
//! many independent trials and collects them into an immutable `OutcomeSet`.
//!
//! Trials share no mutable state, so they may run in any order or in
//! parallel; each trial's RNG is seeded deterministically from the master
//! seed and the trial index, making every trial bit-for-bit reproducible
//! regardless of scheduling.

use rand::{Rng, SeedableRng};

use crate::error::SimulationError;
use crate::model::{OutcomeSet, Portfolio, SimulationConfig, TrialPath};
use crate::sampler::YearSampler;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Derive a per-trial seed from the master seed via SplitMix64.
///
/// Mixing rather than offsetting keeps neighboring trial seeds decorrelated.
pub(crate) fn trial_seed(master_seed: u64, trial: usize) -> u64 {
    let mut z = master_seed.wrapping_add((trial as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Run a single trial, producing one year-by-year path.
///
/// The portfolio value starts at `initial_investment`, notionally split into
/// per-asset sub-values by target weight. Each simulated year every
/// sub-value grows by its sampled return, the sub-values are summed into the
/// new total, and the total is redistributed back to target weights — that
/// redistribution is what "rebalanced every year" means. No floor at zero is
/// applied; returns below -1.0 are rejected before any trial starts.
pub fn run_trial<R: Rng + ?Sized>(
    sampler: &YearSampler<'_>,
    portfolio: &Portfolio,
    config: &SimulationConfig,
    rng: &mut R,
) -> TrialPath {
    let mut path = Vec::with_capacity(config.years + 1);
    path.push(config.initial_investment);

    let mut sub_values: Vec<f64> = portfolio
        .weights()
        .map(|w| config.initial_investment * w)
        .collect();
    let mut returns = Vec::with_capacity(portfolio.len());

    for _ in 0..config.years {
        sampler.sample_year(rng, &mut returns);
        for (sub, r) in sub_values.iter_mut().zip(&returns) {
            *sub *= 1.0 + r;
        }
        let total: f64 = sub_values.iter().sum();
        path.push(total);

        // Rebalance: pool gains/losses and redistribute to target weights
        for (sub, w) in sub_values.iter_mut().zip(portfolio.weights()) {
            *sub = total * w;
        }
    }

    TrialPath::new(path)
}

/// Run the full Monte Carlo simulation.
///
/// Validates the configuration, the portfolio's weight invariant, and every
/// asset's return series before any trial executes; either all
/// `config.trials` trials run to completion or an error is returned and no
/// partial `OutcomeSet` is ever visible. The statistical content of the
/// result is invariant to how trials are scheduled. The portfolio is checked
/// here even though `Portfolio::new` already did, because deserialization
/// can construct one without going through `new`.
pub fn simulate(
    portfolio: &Portfolio,
    config: &SimulationConfig,
) -> Result<OutcomeSet, SimulationError> {
    config.validate()?;
    portfolio.validate()?;
    let sampler = YearSampler::new(portfolio, config.sampling)?;

    let paths = run_trials(&sampler, portfolio, config);
    Ok(OutcomeSet::new(config.initial_investment, paths))
}

#[cfg(feature = "parallel")]
fn run_trials(
    sampler: &YearSampler<'_>,
    portfolio: &Portfolio,
    config: &SimulationConfig,
) -> Vec<TrialPath> {
    (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = rand::rngs::SmallRng::seed_from_u64(trial_seed(config.seed, trial));
            run_trial(sampler, portfolio, config, &mut rng)
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_trials(
    sampler: &YearSampler<'_>,
    portfolio: &Portfolio,
    config: &SimulationConfig,
) -> Vec<TrialPath> {
    (0..config.trials)
        .map(|trial| {
            let mut rng = rand::rngs::SmallRng::seed_from_u64(trial_seed(config.seed, trial));
            run_trial(sampler, portfolio, config, &mut rng)
        })
        .collect()
}
