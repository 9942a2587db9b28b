mod growth;
mod results;
mod scenario;

pub use growth::{AGGRESSIVE, BALANCED, CONSERVATIVE, GrowthModel, RiskParams};
pub use results::SimulationResult;
pub use scenario::{
    ColaType, FilingStatus, HouseholdScenario, IncomeCategory, IncomeEvent, PortfolioAssumptions,
    RetirementSpending, RiskLevel, SimulationType, SpendingCategory, SpendingGoal, TaxStatus,
};
