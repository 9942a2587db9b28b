//! Cash-flow aggregation tests
//!
//! Eligibility windows (including the one-time precedence rule), inflation
//! and COLA adjustment, the retirement-spending decrease schedule, the
//! 2034 Social Security shortfall, and gross-up/net-down behavior.

use super::{after_tax_income, base_scenario, one_time_goal};
use crate::cash_flow::{annual_income, annual_spending};
use crate::model::{ColaType, IncomeCategory, IncomeEvent, TaxStatus};
use crate::taxes::TaxEngine;

#[test]
fn recurring_event_window_is_inclusive() {
    // currentAge 60, referenceYear 2024: startAge 65 / endAge 70 spans
    // calendar years 2029-2034 inclusive
    let mut scenario = base_scenario();
    scenario.income_events = vec![after_tax_income(10_000.0, 65, Some(70))];
    let taxes = TaxEngine::new();

    for year in 2029..=2034 {
        let income = annual_income(&scenario, &taxes, year).unwrap();
        assert_eq!(income, 10_000.0, "year {year} should be included");
    }
    for year in [2028, 2035] {
        let income = annual_income(&scenario, &taxes, year).unwrap();
        assert_eq!(income, 0.0, "year {year} should be excluded");
    }
}

#[test]
fn ongoing_event_defaults_to_life_expectancy() {
    // No endAge: runs through the life-expectancy year (2054) and no further
    let mut scenario = base_scenario();
    scenario.income_events = vec![after_tax_income(10_000.0, 65, None)];
    let taxes = TaxEngine::new();

    assert_eq!(annual_income(&scenario, &taxes, 2054).unwrap(), 10_000.0);
    assert_eq!(annual_income(&scenario, &taxes, 2055).unwrap(), 0.0);
}

#[test]
fn one_time_goal_ignores_end_age() {
    let mut scenario = base_scenario();
    scenario.retirement_spending.monthly_amount = 0.0;
    scenario.spending_goals = vec![one_time_goal(5_000.0, 65, Some(70))];
    let taxes = TaxEngine::new();

    let in_start_year = annual_spending(&scenario, &taxes, 2029).unwrap();
    assert!(in_start_year > 0.0);
    for year in [2028, 2030, 2033] {
        let spending = annual_spending(&scenario, &taxes, year).unwrap();
        assert_eq!(spending, 0.0, "one-time goal leaked into year {year}");
    }
}

#[test]
fn spending_before_retirement_start_is_zero() {
    let scenario = base_scenario();
    let taxes = TaxEngine::new();
    // Retirement spending starts at age 65 (2029)
    assert_eq!(annual_spending(&scenario, &taxes, 2028).unwrap(), 0.0);
    assert!(annual_spending(&scenario, &taxes, 2029).unwrap() > 0.0);
}

#[test]
fn retirement_spending_inflates_from_reference_year() {
    // Amounts small enough to stay under the standard deduction, so the
    // gross-up is the identity and the inflation math is exact
    let mut scenario = base_scenario();
    scenario.retirement_spending.monthly_amount = 1_000.0;
    let taxes = TaxEngine::new();

    let spending = annual_spending(&scenario, &taxes, 2029).unwrap();
    let expected = 12_000.0 * 1.03_f64.powi(5);
    assert!((spending - expected).abs() < 0.05, "got {spending}, expected {expected}");
}

#[test]
fn yearly_decrease_compounds_after_retirement_start() {
    let mut scenario = base_scenario();
    scenario.inflation_rate = 0.0;
    scenario.retirement_spending.monthly_amount = 1_000.0;
    scenario.retirement_spending.yearly_decrease_percent = Some(10.0);
    let taxes = TaxEngine::new();

    // Two years past the 2029 start: 12,000 * 0.9^2
    let spending = annual_spending(&scenario, &taxes, 2031).unwrap();
    let expected = 12_000.0 * 0.9_f64.powi(2);
    assert!((spending - expected).abs() < 0.05, "got {spending}, expected {expected}");
}

#[test]
fn fixed_cola_income_stays_nominal() {
    let mut scenario = base_scenario();
    scenario.income_events = vec![after_tax_income(10_000.0, 60, None)];
    let taxes = TaxEngine::new();

    assert_eq!(annual_income(&scenario, &taxes, 2024).unwrap(), 10_000.0);
    assert_eq!(annual_income(&scenario, &taxes, 2040).unwrap(), 10_000.0);
}

#[test]
fn inflation_adjusted_income_grows() {
    let mut scenario = base_scenario();
    let mut event = after_tax_income(10_000.0, 60, None);
    event.cola_type = ColaType::InflationAdjusted;
    scenario.income_events = vec![event];
    let taxes = TaxEngine::new();

    let income = annual_income(&scenario, &taxes, 2026).unwrap();
    let expected = 10_000.0 * 1.03_f64.powi(2);
    assert!((income - expected).abs() < 1e-9, "got {income}, expected {expected}");
}

#[test]
fn social_security_drops_to_77_percent_from_2034() {
    let mut scenario = base_scenario();
    scenario.income_events = vec![IncomeEvent {
        id: "ss".to_string(),
        category: IncomeCategory::SocialSecurity,
        name: None,
        amount: 30_000.0,
        start_age: 62,
        end_age: None,
        is_one_time: false,
        tax_status: TaxStatus::BeforeTax,
        cola_type: ColaType::Fixed,
    }];
    let taxes = TaxEngine::new();

    let reference = TaxEngine::new();
    let status = scenario.filing_status;

    let in_2033 = annual_income(&scenario, &taxes, 2033).unwrap();
    let expected_2033 = reference
        .net_from_gross(30_000.0, 0.0, status, 69, 2033, None)
        .unwrap();
    assert!((in_2033 - expected_2033).abs() < 1e-9);

    let in_2034 = annual_income(&scenario, &taxes, 2034).unwrap();
    let expected_2034 = reference
        .net_from_gross(30_000.0 * 0.77, 0.0, status, 70, 2034, None)
        .unwrap();
    assert!((in_2034 - expected_2034).abs() < 1e-9);
    assert!(in_2034 < in_2033);
}

#[test]
fn social_security_is_taxed_even_when_marked_after_tax() {
    let mut scenario = base_scenario();
    scenario.state = Some("California".to_string());
    scenario.income_events = vec![IncomeEvent {
        id: "ss".to_string(),
        category: IncomeCategory::SocialSecurity,
        name: None,
        amount: 30_000.0,
        start_age: 62,
        end_age: None,
        is_one_time: false,
        tax_status: TaxStatus::AfterTax,
        cola_type: ColaType::Fixed,
    }];
    let taxes = TaxEngine::new();

    let income = annual_income(&scenario, &taxes, 2024).unwrap();
    assert!(income < 30_000.0, "social security must be netted down, got {income}");
}

#[test]
fn state_rate_increases_the_gross_up() {
    let taxes = TaxEngine::new();

    let mut no_state = base_scenario();
    no_state.retirement_spending.monthly_amount = 5_000.0;
    let base = annual_spending(&no_state, &taxes, 2030).unwrap();

    let mut with_state = no_state.clone();
    with_state.state = Some("Oregon".to_string());
    let taxed = annual_spending(&with_state, &taxes, 2030).unwrap();

    assert!(taxed > base, "state tax should raise the required gross ({taxed} vs {base})");
}

#[test]
fn unknown_state_means_no_state_tax() {
    let taxes = TaxEngine::new();

    let mut scenario = base_scenario();
    scenario.retirement_spending.monthly_amount = 5_000.0;
    let base = annual_spending(&scenario, &taxes, 2030).unwrap();

    scenario.state = Some("Erewhon".to_string());
    let same = annual_spending(&scenario, &taxes, 2030).unwrap();
    assert_eq!(base, same);
}
