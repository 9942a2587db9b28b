//! Per-year cash-flow aggregation
//!
//! Totals a household's spending and income for one concrete calendar
//! year: resolves which recurring/one-time items apply, applies inflation
//! and cost-of-living adjustment, and converts between gross and net via
//! the tax engine. Spending amounts are net targets and are grossed up to
//! the withdrawal needed to fund them; before-tax income is netted down.

use crate::error::TaxError;
use crate::model::{ColaType, HouseholdScenario, IncomeCategory, TaxStatus};
use crate::taxes::{TaxEngine, state_tax_rate};

/// Scheduled Social Security benefits drop to 77% when the trust fund is
/// projected to be depleted.
const SOCIAL_SECURITY_SHORTFALL_YEAR: i32 = 2034;
const SOCIAL_SECURITY_SHORTFALL_FACTOR: f64 = 0.77;

fn scenario_state_rate(scenario: &HouseholdScenario) -> f64 {
    scenario
        .state
        .as_deref()
        .and_then(state_tax_rate)
        .unwrap_or(0.0)
}

/// Whether an item's eligibility window contains `year`. One-time items
/// apply only in their start year (their `end_age` is ignored); an ongoing
/// item without an `end_age` runs through the life-expectancy year.
fn window_contains(
    scenario: &HouseholdScenario,
    start_age: u8,
    end_age: Option<u8>,
    one_time: bool,
    year: i32,
) -> bool {
    let start_year = scenario.year_for_age(start_age);
    if one_time {
        return year == start_year;
    }
    let end_year = scenario.year_for_age(end_age.unwrap_or(scenario.life_expectancy));
    start_year <= year && year <= end_year
}

/// Total spending for one calendar year, as the gross withdrawal needed to
/// fund every applicable item after tax.
pub fn annual_spending(
    scenario: &HouseholdScenario,
    taxes: &TaxEngine,
    year: i32,
) -> Result<f64, TaxError> {
    let rate = scenario_state_rate(scenario);
    let age = scenario.age_in_year(year);
    let spouse = scenario.spouse_age_in_year(year);
    let mut total = 0.0;

    let spending = &scenario.retirement_spending;
    let spending_start_year = scenario.year_for_age(spending.start_age);
    if year >= spending_start_year {
        let mut annual = spending.monthly_amount * 12.0 * scenario.inflation_factor(year);
        if let Some(pct) = spending.yearly_decrease_percent {
            annual *= (1.0 - pct / 100.0).powi(year - spending_start_year);
        }
        total +=
            taxes.gross_income_needed(annual, rate, scenario.filing_status, age, year, spouse)?;
    }

    for goal in &scenario.spending_goals {
        if !window_contains(scenario, goal.start_age, goal.end_age, goal.is_one_time, year) {
            continue;
        }
        let mut amount = goal.amount;
        if goal.inflation_adjusted {
            amount *= scenario.inflation_factor(year);
        }
        total +=
            taxes.gross_income_needed(amount, rate, scenario.filing_status, age, year, spouse)?;
    }

    Ok(total)
}

/// Total after-tax income for one calendar year. The pre-retirement
/// savings contribution is the simulation driver's concern, not ours.
pub fn annual_income(
    scenario: &HouseholdScenario,
    taxes: &TaxEngine,
    year: i32,
) -> Result<f64, TaxError> {
    let rate = scenario_state_rate(scenario);
    let age = scenario.age_in_year(year);
    let spouse = scenario.spouse_age_in_year(year);
    let mut total = 0.0;

    for event in &scenario.income_events {
        if !window_contains(scenario, event.start_age, event.end_age, event.is_one_time, year) {
            continue;
        }
        let mut amount = event.amount;
        if event.cola_type == ColaType::InflationAdjusted {
            amount *= scenario.inflation_factor(year);
        }
        if event.category == IncomeCategory::SocialSecurity && year >= SOCIAL_SECURITY_SHORTFALL_YEAR
        {
            amount *= SOCIAL_SECURITY_SHORTFALL_FACTOR;
        }
        total += match event.effective_tax_status() {
            TaxStatus::AfterTax => amount,
            TaxStatus::BeforeTax => {
                taxes.net_from_gross(amount, rate, scenario.filing_status, age, year, spouse)?
            }
        };
    }

    Ok(total)
}
