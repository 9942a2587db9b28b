use std::fmt;

/// Malformed or out-of-range arguments to the tax engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxError {
    NegativeIncome(f64),
    StateRateOutOfRange(f64),
}

impl fmt::Display for TaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxError::NegativeIncome(v) => {
                write!(f, "income must be non-negative, got {v}")
            }
            TaxError::StateRateOutOfRange(v) => {
                write!(f, "state tax rate must be in [0, 1), got {v}")
            }
        }
    }
}

impl std::error::Error for TaxError {}

/// Scenario configurations the engine cannot simulate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Custom risk level without an explicit expected return and standard deviation
    MissingCustomParameters,
    /// Fat-tail growth requested without a resolvable degrees-of-freedom parameter
    MissingDegreesOfFreedom,
    /// Retirement age or life expectancy precedes the current age
    InvalidTimeline {
        current_age: u8,
        retirement_age: u8,
        life_expectancy: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingCustomParameters => {
                write!(
                    f,
                    "custom risk level requires expected return and standard deviation"
                )
            }
            ConfigError::MissingDegreesOfFreedom => {
                write!(f, "fat-tail growth requires a degrees-of-freedom parameter")
            }
            ConfigError::InvalidTimeline {
                current_age,
                retirement_age,
                life_expectancy,
            } => {
                write!(
                    f,
                    "invalid timeline: current age {current_age}, retirement age \
                     {retirement_age}, life expectancy {life_expectancy}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors surfaced by a full simulation run
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Tax(TaxError),
    Config(ConfigError),
    /// The caller abandoned the run via its cancellation flag
    Cancelled,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Tax(e) => write!(f, "{e}"),
            SimulationError::Config(e) => write!(f, "{e}"),
            SimulationError::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Tax(e) => Some(e),
            SimulationError::Config(e) => Some(e),
            SimulationError::Cancelled => None,
        }
    }
}

impl From<TaxError> for SimulationError {
    fn from(e: TaxError) -> Self {
        SimulationError::Tax(e)
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}
