//! Criterion benchmarks for glidepath_core
//!
//! Run with: cargo bench -p glidepath_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use glidepath_core::model::{
    ColaType, FilingStatus, HouseholdScenario, IncomeCategory, IncomeEvent, PortfolioAssumptions,
    RetirementSpending, RiskLevel, SimulationType, TaxStatus,
};
use glidepath_core::{TaxEngine, annual_spending, run_simulation_seeded};

fn create_scenario(life_expectancy: u8) -> HouseholdScenario {
    HouseholdScenario {
        current_age: 55,
        retirement_age: 65,
        life_expectancy,
        current_savings: 750_000.0,
        annual_savings: 30_000.0,
        reference_year: 2025,
        inflation_rate: 0.03,
        filing_status: FilingStatus::MarriedFilingJointly,
        spouse_age: Some(54),
        state: Some("Virginia".to_string()),
        retirement_spending: RetirementSpending {
            monthly_amount: 6_000.0,
            start_age: 65,
            yearly_decrease_percent: Some(1.0),
        },
        spending_goals: Vec::new(),
        income_events: vec![IncomeEvent {
            id: "ss".to_string(),
            category: IncomeCategory::SocialSecurity,
            name: None,
            amount: 40_000.0,
            start_age: 67,
            end_age: None,
            is_one_time: false,
            tax_status: TaxStatus::BeforeTax,
            cola_type: ColaType::InflationAdjusted,
        }],
        portfolio: PortfolioAssumptions {
            risk_level: RiskLevel::Balanced,
            expected_return: None,
            standard_deviation: None,
            simulation_type: Some(SimulationType::LogNormal),
            fat_tail_df: None,
        },
    }
}

fn bench_full_ensemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble");
    group.sample_size(10);
    for life_expectancy in [75, 90] {
        let scenario = create_scenario(life_expectancy);
        group.bench_with_input(
            BenchmarkId::new("run_simulation_seeded", life_expectancy),
            &scenario,
            |b, scenario| b.iter(|| run_simulation_seeded(black_box(scenario), 42).unwrap()),
        );
    }
    group.finish();
}

fn bench_gross_up(c: &mut Criterion) {
    let scenario = create_scenario(90);

    c.bench_function("annual_spending_cold_cache", |b| {
        b.iter(|| {
            let taxes = TaxEngine::new();
            annual_spending(black_box(&scenario), &taxes, 2035).unwrap()
        })
    });

    let taxes = TaxEngine::new();
    c.bench_function("annual_spending_warm_cache", |b| {
        b.iter(|| annual_spending(black_box(&scenario), &taxes, 2035).unwrap())
    });

    c.bench_function("gross_income_needed", |b| {
        b.iter(|| {
            let taxes = TaxEngine::new();
            taxes
                .gross_income_needed(
                    black_box(80_000.0),
                    0.0575,
                    FilingStatus::MarriedFilingJointly,
                    70,
                    2035,
                    Some(69),
                )
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_full_ensemble, bench_gross_up);
criterion_main!(benches);
