//! Portfolio growth models
//!
//! A scenario's `PortfolioAssumptions` are resolved once, at load time,
//! into a [`GrowthModel`] variant; the per-year sampling loop dispatches on
//! the variant without re-inspecting optional scenario fields.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::scenario::{PortfolioAssumptions, RiskLevel, SimulationType};
use crate::sampling;

/// Fixed sampling parameters for a named risk level.
///
/// `mean`/`std_dev` parameterize the additive and fat-tail regimes;
/// `mu`/`sigma` are the log-space equivalents for the log-normal regime,
/// derived as sigma = std_dev / (1 + mean) and mu = ln(1 + mean) - sigma^2 / 2
/// so the regimes agree on expected growth.
#[derive(Debug, Clone, Copy)]
pub struct RiskParams {
    pub mean: f64,
    pub std_dev: f64,
    pub mu: f64,
    pub sigma: f64,
    pub df: f64,
}

// Legacy real-return table (additive normal model).
pub const LEGACY_CONSERVATIVE: (f64, f64) = (0.03, 0.05);
pub const LEGACY_MODERATE: (f64, f64) = (0.045, 0.10);
pub const LEGACY_HIGH: (f64, f64) = (0.06, 0.15);

// Newer-model presets. df = 5.0 follows the usual equity Student-t fit.
pub const CONSERVATIVE: RiskParams = RiskParams {
    mean: 0.04,
    std_dev: 0.06,
    mu: 0.0375565,
    sigma: 0.0576923,
    df: 5.0,
};
pub const BALANCED: RiskParams = RiskParams {
    mean: 0.06,
    std_dev: 0.11,
    mu: 0.0528844,
    sigma: 0.1037736,
    df: 5.0,
};
pub const AGGRESSIVE: RiskParams = RiskParams {
    mean: 0.08,
    std_dev: 0.16,
    mu: 0.0659871,
    sigma: 0.1481481,
    df: 5.0,
};

/// One year's portfolio growth regime, resolved from a scenario's
/// `PortfolioAssumptions`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GrowthModel {
    /// Additive normal return: factor = 1 + mean + std_dev * N(0, 1)
    LegacyNormal { mean: f64, std_dev: f64 },
    /// Multiplicative log-normal: factor = exp(mu + sigma * N(0, 1))
    LogNormal { mu: f64, sigma: f64 },
    /// Multiplicative Student-t shock: factor = exp(mean + std_dev * T(df))
    FatTail { mean: f64, std_dev: f64, df: f64 },
}

impl GrowthModel {
    /// Resolve a scenario's portfolio assumptions into a concrete model.
    ///
    /// `Custom` requires explicit return/deviation parameters and uses the
    /// legacy additive regime, unless a fat-tail simulation is requested
    /// with an explicit degrees-of-freedom value. Named risk levels without
    /// a `simulation_type` use the legacy table; with one, the newer table.
    pub fn from_assumptions(assumptions: &PortfolioAssumptions) -> Result<Self, ConfigError> {
        if assumptions.risk_level == RiskLevel::Custom {
            let (mean, std_dev) = match (assumptions.expected_return, assumptions.standard_deviation)
            {
                (Some(mean), Some(std_dev)) => (mean, std_dev),
                _ => return Err(ConfigError::MissingCustomParameters),
            };
            return match assumptions.simulation_type {
                Some(SimulationType::FatTail) => {
                    let df = assumptions
                        .fat_tail_df
                        .ok_or(ConfigError::MissingDegreesOfFreedom)?;
                    Ok(GrowthModel::FatTail { mean, std_dev, df })
                }
                _ => Ok(GrowthModel::LegacyNormal { mean, std_dev }),
            };
        }

        match assumptions.simulation_type {
            None => {
                let (mean, std_dev) = match assumptions.risk_level {
                    RiskLevel::Conservative => LEGACY_CONSERVATIVE,
                    RiskLevel::Moderate | RiskLevel::Balanced => LEGACY_MODERATE,
                    RiskLevel::High | RiskLevel::Aggressive => LEGACY_HIGH,
                    RiskLevel::Custom => unreachable!(),
                };
                Ok(GrowthModel::LegacyNormal { mean, std_dev })
            }
            Some(kind) => {
                let params = match assumptions.risk_level {
                    RiskLevel::Conservative => CONSERVATIVE,
                    RiskLevel::Moderate | RiskLevel::Balanced => BALANCED,
                    RiskLevel::High | RiskLevel::Aggressive => AGGRESSIVE,
                    RiskLevel::Custom => unreachable!(),
                };
                match kind {
                    SimulationType::LogNormal => Ok(GrowthModel::LogNormal {
                        mu: params.mu,
                        sigma: params.sigma,
                    }),
                    SimulationType::FatTail => Ok(GrowthModel::FatTail {
                        mean: params.mean,
                        std_dev: params.std_dev,
                        df: assumptions.fat_tail_df.unwrap_or(params.df),
                    }),
                }
            }
        }
    }

    /// Sample one year's growth factor.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            GrowthModel::LegacyNormal { mean, std_dev } => {
                sampling::legacy_growth_factor(rng, mean, std_dev)
            }
            GrowthModel::LogNormal { mu, sigma } => {
                sampling::log_normal_growth_factor(rng, mu, sigma)
            }
            GrowthModel::FatTail { mean, std_dev, df } => {
                sampling::fat_tail_growth_factor(rng, mean, std_dev, df)
            }
        }
    }
}
