//! Progressive federal tax computation and gross/net conversion
//!
//! The pure pieces (bracket walk, deductions) are free functions; the
//! [`TaxEngine`] wraps them with a memoization cache because the gross-up
//! solver is the hot path of a simulation (one bisection per spending item
//! per path-year). The cache is exact-match on the full input tuple, grows
//! unbounded for the engine's lifetime, and is cleared explicitly via
//! [`TaxEngine::clear_cache`] when scenario tax inputs change.

mod states;
mod tables;

pub use states::state_tax_rate;
pub use tables::{TaxBracket, brackets_for, senior_addition_for, standard_deduction_for};

use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::error::TaxError;
use crate::model::FilingStatus;

const BISECTION_TOLERANCE: f64 = 0.01;
const MAX_ITERATIONS: u32 = 1000;

/// Federal income tax on `taxable` income via the progressive bracket walk.
#[must_use]
pub fn federal_tax(taxable: f64, status: FilingStatus, tax_year: i32) -> f64 {
    let brackets = brackets_for(status, tax_year);
    let mut tax = 0.0;
    let mut prev_upper = 0.0;
    for bracket in brackets {
        let in_bracket = taxable.min(bracket.upper) - prev_upper;
        if in_bracket > 0.0 {
            tax += in_bracket * bracket.rate;
        }
        if taxable <= bracket.upper {
            break;
        }
        prev_upper = bracket.upper;
    }
    tax
}

/// Standard deduction for the filing status and tax year.
#[must_use]
pub fn standard_deduction(status: FilingStatus, tax_year: i32) -> f64 {
    standard_deduction_for(status, tax_year)
}

fn qualifying_seniors(status: FilingStatus, age: u8, spouse_age: Option<u8>) -> u32 {
    let mut count = u32::from(age >= 65);
    if status.is_joint() && spouse_age.is_some_and(|a| a >= 65) {
        count += 1;
    }
    count
}

/// The 2025-2028 additional senior deduction: $6,000 per qualifying
/// senior, reduced by 6 cents per dollar of gross income above the
/// threshold, floored at zero. Not available when married filing
/// separately.
fn bonus_senior_deduction(status: FilingStatus, tax_year: i32, count: u32, gross: f64) -> f64 {
    if count == 0
        || status == FilingStatus::MarriedFilingSeparately
        || !(2025..=2028).contains(&tax_year)
    {
        return 0.0;
    }
    let base = 6_000.0 * f64::from(count);
    let threshold = if status.is_joint() { 150_000.0 } else { 75_000.0 };
    let reduction = (gross - threshold).max(0.0) * 0.06;
    (base - reduction).max(0.0)
}

/// Total senior deduction: the per-senior table addition plus the
/// temporary 2025-2028 component, which phases out with gross income.
#[must_use]
pub fn senior_deduction(
    status: FilingStatus,
    age: u8,
    spouse_age: Option<u8>,
    tax_year: i32,
    gross: f64,
) -> f64 {
    let count = qualifying_seniors(status, age, spouse_age);
    if count == 0 {
        return 0.0;
    }
    let usual = f64::from(count) * senior_addition_for(status, tax_year);
    usual + bonus_senior_deduction(status, tax_year, count, gross)
}

fn check_inputs(amount: f64, state_rate: f64) -> Result<(), TaxError> {
    if amount < 0.0 {
        return Err(TaxError::NegativeIncome(amount));
    }
    if !(0.0..1.0).contains(&state_rate) {
        return Err(TaxError::StateRateOutOfRange(state_rate));
    }
    Ok(())
}

fn net_from_gross_uncached(
    gross: f64,
    state_rate: f64,
    status: FilingStatus,
    age: u8,
    tax_year: i32,
    spouse_age: Option<u8>,
) -> f64 {
    let deduction = standard_deduction_for(status, tax_year)
        + senior_deduction(status, age, spouse_age, tax_year, gross);
    let taxable = (gross - deduction).max(0.0);
    gross - federal_tax(taxable, status, tax_year) - gross * state_rate
}

/// Exact-match cache key: amounts keyed by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TaxKey {
    amount: u64,
    state_rate: u64,
    status: FilingStatus,
    age: u8,
    tax_year: i32,
    spouse_age: Option<u8>,
}

impl TaxKey {
    fn new(
        amount: f64,
        state_rate: f64,
        status: FilingStatus,
        age: u8,
        tax_year: i32,
        spouse_age: Option<u8>,
    ) -> Self {
        Self {
            amount: amount.to_bits(),
            state_rate: state_rate.to_bits(),
            status,
            age,
            tax_year,
            spouse_age,
        }
    }
}

#[derive(Debug, Default)]
struct TaxCache {
    gross_to_net: FxHashMap<TaxKey, f64>,
    net_to_gross: FxHashMap<TaxKey, f64>,
}

/// Tax computation engine with a shared result cache.
///
/// Safe to share across simulation worker threads: lookups take a read
/// lock, inserts a write lock, and entries are pure function results so
/// concurrent writers can only race to insert identical values.
#[derive(Debug, Default)]
pub struct TaxEngine {
    cache: RwLock<TaxCache>,
}

impl TaxEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all cached conversions. Call when a scenario's tax-relevant
    /// fields change.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.gross_to_net.clear();
        cache.net_to_gross.clear();
    }

    /// Number of cached conversions across both directions.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.gross_to_net.len() + cache.net_to_gross.len()
    }

    /// After-tax income for a gross amount:
    /// `gross - federal_tax(max(0, gross - deduction)) - gross * state_rate`.
    pub fn net_from_gross(
        &self,
        gross: f64,
        state_rate: f64,
        status: FilingStatus,
        age: u8,
        tax_year: i32,
        spouse_age: Option<u8>,
    ) -> Result<f64, TaxError> {
        check_inputs(gross, state_rate)?;
        let key = TaxKey::new(gross, state_rate, status, age, tax_year, spouse_age);
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(net) = cache.gross_to_net.get(&key) {
                return Ok(*net);
            }
        }
        let net = net_from_gross_uncached(gross, state_rate, status, age, tax_year, spouse_age);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .gross_to_net
            .insert(key, net);
        Ok(net)
    }

    /// Gross income whose after-tax value is `net`, found by bisection on
    /// `[net, 3 * net]`.
    ///
    /// The forward computation is re-evaluated per midpoint because the
    /// senior deduction's phase-out depends on gross income. Terminates at
    /// an interval width of one cent or after 1000 iterations; exhaustion
    /// logs a warning and returns the current estimate. The result is
    /// rounded to the nearest cent.
    pub fn gross_income_needed(
        &self,
        net: f64,
        state_rate: f64,
        status: FilingStatus,
        age: u8,
        tax_year: i32,
        spouse_age: Option<u8>,
    ) -> Result<f64, TaxError> {
        check_inputs(net, state_rate)?;
        let key = TaxKey::new(net, state_rate, status, age, tax_year, spouse_age);
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(gross) = cache.net_to_gross.get(&key) {
                return Ok(*gross);
            }
        }

        let mut low = net;
        let mut high = net * 3.0;
        let mut iterations = 0;
        while high - low > BISECTION_TOLERANCE && iterations < MAX_ITERATIONS {
            let mid = (low + high) / 2.0;
            let computed = net_from_gross_uncached(mid, state_rate, status, age, tax_year, spouse_age);
            if computed < net {
                low = mid;
            } else {
                high = mid;
            }
            iterations += 1;
        }
        if iterations >= MAX_ITERATIONS {
            tracing::warn!(
                target_net = net,
                tax_year,
                "gross-up bisection hit its iteration budget; returning the current estimate"
            );
        }

        let gross = (low * 100.0).round() / 100.0;
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .net_to_gross
            .insert(key, gross);
        Ok(gross)
    }
}
