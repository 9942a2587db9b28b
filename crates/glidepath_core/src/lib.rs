//! Long-horizon personal-finance projection under market uncertainty
//!
//! Given a household scenario — age timeline, savings, scheduled
//! income/spending events, portfolio risk posture, and tax configuration —
//! this crate estimates the probability that savings remain non-negative
//! through life expectancy and produces per-year percentile bands (median,
//! 10th percentile) of inflation-adjusted balance. It provides:
//! - A progressive federal tax engine with gross/net conversion and a
//!   memoized bisection gross-up solver
//! - Stochastic growth sampling (additive normal, log-normal, fat-tailed
//!   Student-t) resolved from named risk levels
//! - Per-year cash-flow aggregation with event eligibility windows,
//!   inflation/COLA adjustment, and the 2034 Social Security shortfall
//! - A Monte Carlo driver running 5000 independent paths, in parallel by
//!   default (`parallel` feature)
//!
//! # Example
//!
//! ```ignore
//! use glidepath_core::{HouseholdScenario, run_simulation_seeded};
//!
//! let scenario: HouseholdScenario = serde_json::from_str(record)?;
//! let result = run_simulation_seeded(&scenario, 42)?;
//! println!("success probability: {}%", result.probability);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cash_flow;
pub mod error;
pub mod sampling;
pub mod simulation;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use cash_flow::{annual_income, annual_spending};
pub use error::{ConfigError, SimulationError, TaxError};
pub use model::{
    ColaType, FilingStatus, GrowthModel, HouseholdScenario, IncomeCategory, IncomeEvent,
    PortfolioAssumptions, RetirementSpending, RiskLevel, SimulationResult, SimulationType,
    SpendingCategory, SpendingGoal, TaxStatus,
};
pub use simulation::{
    NUM_SIMS, run_simulation, run_simulation_cancellable, run_simulation_seeded,
};
pub use taxes::TaxEngine;
