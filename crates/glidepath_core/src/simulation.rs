//! Monte Carlo simulation driver
//!
//! Runs the full ensemble: `NUM_SIMS` independent paths, each walking the
//! scenario's year sequence (record deflated balance, apply cash flow,
//! clamp on failure, apply growth), then a per-year sort to extract the
//! median and 10th-percentile series.
//!
//! Paths are embarrassingly parallel and run in batches across rayon
//! workers when the `parallel` feature is on. Batch seeds derive from the
//! run seed, so a given (scenario, seed) pair produces bit-identical
//! results at any worker count.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::cash_flow::{annual_income, annual_spending};
use crate::error::{SimulationError, TaxError};
use crate::model::{GrowthModel, HouseholdScenario, SimulationResult};
use crate::taxes::TaxEngine;

/// Number of independent paths per ensemble.
pub const NUM_SIMS: usize = 5000;

const MAX_BATCH_SIZE: usize = 100;
const DOWNSIDE_PERCENTILE: f64 = 0.1;

pub(crate) struct PathOutcome {
    /// Balance per simulated year, deflated to reference-year dollars
    pub series: Vec<f64>,
    /// True if the balance ever went negative
    pub failed: bool,
}

/// Walk one path through the scenario's year sequence.
pub(crate) fn simulate_path<R: Rng + ?Sized>(
    scenario: &HouseholdScenario,
    model: &GrowthModel,
    taxes: &TaxEngine,
    rng: &mut R,
) -> Result<PathOutcome, TaxError> {
    let total_years = scenario.total_years();
    let retirement_year = scenario.retirement_year();
    let mut balance = scenario.current_savings;
    let mut series = Vec::with_capacity(total_years);
    let mut failed = false;

    for i in 0..total_years {
        let year = scenario.reference_year + i as i32;

        // Record in today's dollars before this year's flows and growth
        series.push(balance / (1.0 + scenario.inflation_rate).powi(i as i32));

        let spending = annual_spending(scenario, taxes, year)?;
        let mut income = annual_income(scenario, taxes, year)?;
        if year < retirement_year {
            income += scenario.annual_savings;
        }

        balance += income - spending;
        if balance < 0.0 {
            failed = true;
            balance = 0.0;
        }

        balance *= model.sample(rng);
    }

    Ok(PathOutcome { series, failed })
}

/// Run the full ensemble with a seed drawn from the thread RNG.
pub fn run_simulation(scenario: &HouseholdScenario) -> Result<SimulationResult, SimulationError> {
    run_ensemble(scenario, rand::rng().next_u64(), None)
}

/// Run the full ensemble deterministically: identical scenario and seed
/// produce bit-identical results.
pub fn run_simulation_seeded(
    scenario: &HouseholdScenario,
    seed: u64,
) -> Result<SimulationResult, SimulationError> {
    run_ensemble(scenario, seed, None)
}

/// Run the full ensemble, abandoning with [`SimulationError::Cancelled`]
/// shortly after `cancel` becomes true. The flag is checked once per batch
/// of paths, bounding cancellation latency to a batch's runtime.
pub fn run_simulation_cancellable(
    scenario: &HouseholdScenario,
    seed: u64,
    cancel: &AtomicBool,
) -> Result<SimulationResult, SimulationError> {
    run_ensemble(scenario, seed, Some(cancel))
}

fn run_ensemble(
    scenario: &HouseholdScenario,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> Result<SimulationResult, SimulationError> {
    scenario.validate()?;
    let model = GrowthModel::from_assumptions(&scenario.portfolio)?;
    let taxes = TaxEngine::new();

    let num_batches = NUM_SIMS.div_ceil(MAX_BATCH_SIZE);

    let run_batch = |batch: usize| -> Result<Vec<PathOutcome>, SimulationError> {
        if let Some(flag) = cancel
            && flag.load(Ordering::Relaxed)
        {
            return Err(SimulationError::Cancelled);
        }

        let mut batch_rng = SmallRng::seed_from_u64(seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            NUM_SIMS - batch * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| {
                let mut path_rng = SmallRng::seed_from_u64(batch_rng.next_u64());
                simulate_path(scenario, &model, &taxes, &mut path_rng)
            })
            .collect::<Result<Vec<_>, TaxError>>()
            .map_err(SimulationError::from)
    };

    #[cfg(feature = "parallel")]
    let batches = (0..num_batches)
        .into_par_iter()
        .map(run_batch)
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let batches = (0..num_batches)
        .map(run_batch)
        .collect::<Result<Vec<_>, _>>()?;

    let paths: Vec<PathOutcome> = batches.into_iter().flatten().collect();

    let successes = paths.iter().filter(|p| !p.failed).count();
    let probability = ((successes as f64 / NUM_SIMS as f64) * 100.0).round() as u8;

    let total_years = scenario.total_years();
    let downside_rank = (NUM_SIMS as f64 * DOWNSIDE_PERCENTILE) as usize;
    let mut median = Vec::with_capacity(total_years);
    let mut downside = Vec::with_capacity(total_years);
    let mut years = Vec::with_capacity(total_years);
    let mut column = Vec::with_capacity(NUM_SIMS);

    for i in 0..total_years {
        column.clear();
        column.extend(paths.iter().map(|p| p.series[i]));
        column.sort_unstable_by(f64::total_cmp);
        // Single floored-rank pick; reported values are members of the
        // sample set, never interpolated
        median.push(column[NUM_SIMS / 2]);
        downside.push(column[downside_rank]);
        years.push(scenario.reference_year + i as i32);
    }

    Ok(SimulationResult {
        probability,
        median,
        downside,
        years,
    })
}
