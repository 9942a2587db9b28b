//! Household scenario model
//!
//! These types mirror the scenario records the editing and persistence
//! layers exchange (camelCase JSON). Additive fields carry `serde(default)`
//! so records written before a field existed still deserialize; the
//! persistence layer backfills real values before handing records here.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Federal filing status, serialized as the record format's short tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "mfs")]
    MarriedFilingSeparately,
    #[serde(rename = "mfj")]
    MarriedFilingJointly,
    #[serde(rename = "hoh")]
    HeadOfHousehold,
}

impl FilingStatus {
    /// True for statuses where a qualifying spouse can add deductions.
    #[must_use]
    pub fn is_joint(self) -> bool {
        matches!(self, FilingStatus::MarriedFilingJointly)
    }
}

/// Whether an amount is quoted before or after income tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxStatus {
    BeforeTax,
    AfterTax,
}

/// Whether an amount grows with inflation over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColaType {
    Fixed,
    InflationAdjusted,
}

/// Recurring retirement spending rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementSpending {
    /// Monthly amount in reference-year dollars
    pub monthly_amount: f64,
    /// Age the recurring spending begins
    pub start_age: u8,
    /// Optional yearly percentage decrease applied on top of inflation
    #[serde(default)]
    pub yearly_decrease_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingCategory {
    Charity,
    DependentSupport,
    Healthcare,
    HomePurchase,
    Education,
    Renovation,
    Vacation,
    Vehicle,
    Wedding,
    Other,
}

/// A scheduled spending item, recurring or one-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingGoal {
    pub id: String,
    #[serde(rename = "type")]
    pub category: SpendingCategory,
    /// Display name, meaningful only for the `Other` category
    #[serde(default)]
    pub name: Option<String>,
    /// Annual amount in reference-year dollars
    pub amount: f64,
    pub start_age: u8,
    #[serde(default)]
    pub end_age: Option<u8>,
    /// One-time items apply only in their start year; `end_age` is ignored
    #[serde(default)]
    pub is_one_time: bool,
    pub inflation_adjusted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeCategory {
    #[serde(rename = "social_security")]
    SocialSecurity,
    #[serde(rename = "annuity_income")]
    Annuity,
    #[serde(rename = "inheritance")]
    Inheritance,
    #[serde(rename = "pension_income")]
    Pension,
    #[serde(rename = "rental_income")]
    Rental,
    #[serde(rename = "sale_of_property")]
    PropertySale,
    #[serde(rename = "work_during_retirement")]
    WorkInRetirement,
    #[serde(rename = "other_income")]
    Other,
}

/// A scheduled income item, recurring or one-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub category: IncomeCategory,
    /// Display name, meaningful only for the `Other` category
    #[serde(default)]
    pub name: Option<String>,
    /// Annual amount in reference-year dollars
    pub amount: f64,
    pub start_age: u8,
    #[serde(default)]
    pub end_age: Option<u8>,
    /// One-time items apply only in their start year; `end_age` is ignored
    #[serde(default)]
    pub is_one_time: bool,
    /// Social Security is always treated as before-tax, whatever is stored here
    pub tax_status: TaxStatus,
    pub cola_type: ColaType,
}

impl IncomeEvent {
    /// Effective tax status: the social-security category is before-tax
    /// regardless of the stored field.
    #[must_use]
    pub fn effective_tax_status(&self) -> TaxStatus {
        if self.category == IncomeCategory::SocialSecurity {
            TaxStatus::BeforeTax
        } else {
            self.tax_status
        }
    }
}

/// Named portfolio-return regime. `Conservative`/`Moderate`/`High` are the
/// legacy tags, `Conservative`/`Balanced`/`Aggressive` the newer ones; both
/// sets appear in stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Balanced,
    High,
    Aggressive,
    Custom,
}

/// Sampling regime selector for the newer growth model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationType {
    LogNormal,
    FatTail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAssumptions {
    pub risk_level: RiskLevel,
    /// Expected annual return, used only when `risk_level` is `Custom`
    #[serde(default)]
    pub expected_return: Option<f64>,
    /// Return standard deviation, used only when `risk_level` is `Custom`
    #[serde(default)]
    pub standard_deviation: Option<f64>,
    /// Present on records using the newer growth model; absent means legacy
    #[serde(default)]
    pub simulation_type: Option<SimulationType>,
    /// Explicit degrees-of-freedom override for fat-tail sampling
    #[serde(default)]
    pub fat_tail_df: Option<f64>,
}

/// Read-only input to a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdScenario {
    pub current_age: u8,
    pub retirement_age: u8,
    pub life_expectancy: u8,
    pub current_savings: f64,
    /// Annual contribution while `year < retirement_year`
    pub annual_savings: f64,
    /// Calendar year the scenario's nominal dollar amounts are expressed in
    pub reference_year: i32,
    pub inflation_rate: f64,
    pub filing_status: FilingStatus,
    #[serde(default)]
    pub spouse_age: Option<u8>,
    /// State name for the flat state income-tax rate lookup
    #[serde(default)]
    pub state: Option<String>,
    pub retirement_spending: RetirementSpending,
    #[serde(default)]
    pub spending_goals: Vec<SpendingGoal>,
    #[serde(default)]
    pub income_events: Vec<IncomeEvent>,
    #[serde(rename = "portfolioAssumptions")]
    pub portfolio: PortfolioAssumptions,
}

impl HouseholdScenario {
    /// Check the timeline invariants the simulation loop depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retirement_age < self.current_age || self.life_expectancy < self.current_age {
            return Err(ConfigError::InvalidTimeline {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
                life_expectancy: self.life_expectancy,
            });
        }
        Ok(())
    }

    /// Number of simulated years, inclusive of the life-expectancy year.
    #[must_use]
    pub fn total_years(&self) -> usize {
        (self.life_expectancy - self.current_age) as usize + 1
    }

    /// Calendar year at which retirement begins.
    #[must_use]
    pub fn retirement_year(&self) -> i32 {
        self.year_for_age(self.retirement_age)
    }

    /// Calendar year at which the household reaches `age`.
    #[must_use]
    pub fn year_for_age(&self, age: u8) -> i32 {
        self.reference_year + (i32::from(age) - i32::from(self.current_age))
    }

    /// Household age in a given calendar year.
    #[must_use]
    pub fn age_in_year(&self, year: i32) -> u8 {
        let age = i32::from(self.current_age) + (year - self.reference_year);
        age.clamp(0, i32::from(u8::MAX)) as u8
    }

    /// Spouse age in a given calendar year, if a spouse is configured.
    #[must_use]
    pub fn spouse_age_in_year(&self, year: i32) -> Option<u8> {
        self.spouse_age.map(|spouse| {
            let age = i32::from(spouse) + (year - self.reference_year);
            age.clamp(0, i32::from(u8::MAX)) as u8
        })
    }

    /// Cumulative inflation factor from the reference year to `year`.
    #[must_use]
    pub fn inflation_factor(&self, year: i32) -> f64 {
        (1.0 + self.inflation_rate).powi(year - self.reference_year)
    }
}
