//! Integration tests for the glidepath simulation engine
//!
//! Tests are organized by topic:
//! - `cash_flow` - Eligibility windows, inflation/COLA, gross-up semantics
//! - `growth` - Growth-model resolution from portfolio assumptions
//! - `scenario_records` - The persistence layer's JSON record format
//! - `simulation` - Ensemble determinism, percentiles, end-to-end paths

mod cash_flow;

use crate::model::{
    ColaType, FilingStatus, HouseholdScenario, IncomeCategory, IncomeEvent, PortfolioAssumptions,
    RetirementSpending, RiskLevel, SpendingCategory, SpendingGoal, TaxStatus,
};

/// Baseline scenario the topic modules adapt: a 60-year-old single filer,
/// retiring at 65, no events or goals, legacy conservative portfolio.
pub fn base_scenario() -> HouseholdScenario {
    HouseholdScenario {
        current_age: 60,
        retirement_age: 65,
        life_expectancy: 90,
        current_savings: 500_000.0,
        annual_savings: 20_000.0,
        reference_year: 2024,
        inflation_rate: 0.03,
        filing_status: FilingStatus::Single,
        spouse_age: None,
        state: None,
        retirement_spending: RetirementSpending {
            monthly_amount: 4_000.0,
            start_age: 65,
            yearly_decrease_percent: None,
        },
        spending_goals: Vec::new(),
        income_events: Vec::new(),
        portfolio: PortfolioAssumptions {
            risk_level: RiskLevel::Conservative,
            expected_return: None,
            standard_deviation: None,
            simulation_type: None,
            fat_tail_df: None,
        },
    }
}

pub fn after_tax_income(amount: f64, start_age: u8, end_age: Option<u8>) -> IncomeEvent {
    IncomeEvent {
        id: "income".to_string(),
        category: IncomeCategory::Pension,
        name: None,
        amount,
        start_age,
        end_age,
        is_one_time: false,
        tax_status: TaxStatus::AfterTax,
        cola_type: ColaType::Fixed,
    }
}

pub fn one_time_goal(amount: f64, start_age: u8, end_age: Option<u8>) -> SpendingGoal {
    SpendingGoal {
        id: "goal".to_string(),
        category: SpendingCategory::Vacation,
        name: None,
        amount,
        start_age,
        end_age,
        is_one_time: true,
        inflation_adjusted: false,
    }
}
