use std::fmt;

/// Tolerance used when checking that portfolio weights sum to 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Errors related to portfolio construction
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Portfolio contains no holdings
    Empty,
    /// A single holding's weight is outside [0, 1]
    WeightOutOfRange { asset: String, weight: f64 },
    /// Weights do not sum to 1.0 within `WEIGHT_TOLERANCE`
    WeightSumMismatch { sum: f64 },
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioError::Empty => write!(f, "portfolio has no holdings"),
            PortfolioError::WeightOutOfRange { asset, weight } => {
                write!(f, "weight {weight} for asset {asset:?} is outside [0, 1]")
            }
            PortfolioError::WeightSumMismatch { sum } => {
                write!(f, "portfolio weights sum to {sum}, expected 1.0")
            }
        }
    }
}

impl std::error::Error for PortfolioError {}

/// Errors related to an asset's historical return series
#[derive(Debug, Clone, PartialEq)]
pub enum AssetDataError {
    /// The historical series has no entries to sample from
    EmptySeries { asset: String },
    /// A historical return implies losing more than the entire investment
    /// in one period (return < -1.0)
    ReturnBelowFloor {
        asset: String,
        year_index: usize,
        value: f64,
    },
    /// Joint-year sampling requires every series to cover the same years
    SeriesLengthMismatch {
        asset: String,
        len: usize,
        expected: usize,
    },
}

impl fmt::Display for AssetDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetDataError::EmptySeries { asset } => {
                write!(f, "asset {asset:?} has an empty return series")
            }
            AssetDataError::ReturnBelowFloor {
                asset,
                year_index,
                value,
            } => {
                write!(
                    f,
                    "asset {asset:?} has return {value} at year index {year_index}, below the -1.0 floor"
                )
            }
            AssetDataError::SeriesLengthMismatch {
                asset,
                len,
                expected,
            } => {
                write!(
                    f,
                    "asset {asset:?} has {len} years of history, expected {expected} for joint-year sampling"
                )
            }
        }
    }
}

impl std::error::Error for AssetDataError {}

/// Errors related to simulation parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroYears,
    ZeroTrials,
    NonPositiveInitialInvestment(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroYears => write!(f, "simulation must cover at least one year"),
            ConfigError::ZeroTrials => write!(f, "simulation must run at least one trial"),
            ConfigError::NonPositiveInitialInvestment(v) => {
                write!(f, "initial investment {v} must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors related to probability queries over an outcome set
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Neither a lower nor an upper bound was supplied
    MissingBounds,
    /// The lower bound exceeds the upper bound
    InvertedBounds { lower: f64, upper: f64 },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MissingBounds => {
                write!(f, "at least one of lower/upper bound must be supplied")
            }
            QueryError::InvertedBounds { lower, upper } => {
                write!(f, "lower bound {lower} exceeds upper bound {upper}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Top-level error for setting up and running a simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Portfolio(PortfolioError),
    AssetData(AssetDataError),
    Config(ConfigError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Portfolio(e) => write!(f, "{e}"),
            SimulationError::AssetData(e) => write!(f, "{e}"),
            SimulationError::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Portfolio(e) => Some(e),
            SimulationError::AssetData(e) => Some(e),
            SimulationError::Config(e) => Some(e),
        }
    }
}

impl From<PortfolioError> for SimulationError {
    fn from(e: PortfolioError) -> Self {
        SimulationError::Portfolio(e)
    }
}

impl From<AssetDataError> for SimulationError {
    fn from(e: AssetDataError) -> Self {
        SimulationError::AssetData(e)
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}
