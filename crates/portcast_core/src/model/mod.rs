mod assets;
mod config;
mod portfolio;
mod results;

pub use assets::{AssetReturns, SeriesStatistics};
pub use config::{DEFAULT_BENCHMARK_ANNUAL_RETURN, SamplingPolicy, SimulationConfig};
pub use portfolio::{Holding, Portfolio};
pub use results::{OutcomeSet, TrialPath};
