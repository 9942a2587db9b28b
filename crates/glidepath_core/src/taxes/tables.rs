//! Federal tax tables, 2024-2026
//!
//! Brackets and deductions are indexed by tax year and filing status. Year
//! resolution picks the most recent table year at or before the requested
//! year; a request before the first table year falls back to the latest
//! table (future-year behavior), matching how projections beyond 2026 are
//! handled.

use crate::model::FilingStatus;

/// One marginal bracket: `rate` applies to income up to `upper`.
#[derive(Debug, Clone, Copy)]
pub struct TaxBracket {
    pub rate: f64,
    pub upper: f64,
}

const fn bracket(rate: f64, upper: f64) -> TaxBracket {
    TaxBracket { rate, upper }
}

/// Brackets for one tax year across the four filing statuses.
///
/// Uppers are strictly increasing and the last is unbounded.
#[derive(Debug, Clone, Copy)]
pub struct BracketTable {
    pub year: i32,
    pub single: [TaxBracket; 7],
    pub mfs: [TaxBracket; 7],
    pub mfj: [TaxBracket; 7],
    pub hoh: [TaxBracket; 7],
}

impl BracketTable {
    #[must_use]
    pub fn for_status(&self, status: FilingStatus) -> &[TaxBracket] {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingSeparately => &self.mfs,
            FilingStatus::MarriedFilingJointly => &self.mfj,
            FilingStatus::HeadOfHousehold => &self.hoh,
        }
    }
}

pub static BRACKET_TABLES: [BracketTable; 3] = [
    BracketTable {
        year: 2024,
        single: [
            bracket(0.10, 11_600.0),
            bracket(0.12, 47_150.0),
            bracket(0.22, 100_525.0),
            bracket(0.24, 191_950.0),
            bracket(0.32, 243_725.0),
            bracket(0.35, 609_350.0),
            bracket(0.37, f64::INFINITY),
        ],
        mfs: [
            bracket(0.10, 11_600.0),
            bracket(0.12, 47_150.0),
            bracket(0.22, 100_525.0),
            bracket(0.24, 191_950.0),
            bracket(0.32, 243_725.0),
            bracket(0.35, 365_600.0),
            bracket(0.37, f64::INFINITY),
        ],
        mfj: [
            bracket(0.10, 23_200.0),
            bracket(0.12, 94_300.0),
            bracket(0.22, 201_050.0),
            bracket(0.24, 383_900.0),
            bracket(0.32, 487_450.0),
            bracket(0.35, 731_200.0),
            bracket(0.37, f64::INFINITY),
        ],
        hoh: [
            bracket(0.10, 16_550.0),
            bracket(0.12, 63_100.0),
            bracket(0.22, 100_500.0),
            bracket(0.24, 191_950.0),
            bracket(0.32, 243_700.0),
            bracket(0.35, 609_350.0),
            bracket(0.37, f64::INFINITY),
        ],
    },
    BracketTable {
        year: 2025,
        single: [
            bracket(0.10, 11_925.0),
            bracket(0.12, 48_475.0),
            bracket(0.22, 103_350.0),
            bracket(0.24, 197_300.0),
            bracket(0.32, 250_525.0),
            bracket(0.35, 626_350.0),
            bracket(0.37, f64::INFINITY),
        ],
        mfs: [
            bracket(0.10, 11_925.0),
            bracket(0.12, 48_475.0),
            bracket(0.22, 103_350.0),
            bracket(0.24, 197_300.0),
            bracket(0.32, 250_525.0),
            bracket(0.35, 626_350.0),
            bracket(0.37, f64::INFINITY),
        ],
        mfj: [
            bracket(0.10, 23_850.0),
            bracket(0.12, 96_950.0),
            bracket(0.22, 206_700.0),
            bracket(0.24, 394_600.0),
            bracket(0.32, 501_050.0),
            bracket(0.35, 751_600.0),
            bracket(0.37, f64::INFINITY),
        ],
        hoh: [
            bracket(0.10, 17_000.0),
            bracket(0.12, 64_850.0),
            bracket(0.22, 103_350.0),
            bracket(0.24, 197_300.0),
            bracket(0.32, 250_500.0),
            bracket(0.35, 626_350.0),
            bracket(0.37, f64::INFINITY),
        ],
    },
    BracketTable {
        year: 2026,
        single: [
            bracket(0.10, 12_400.0),
            bracket(0.12, 50_400.0),
            bracket(0.22, 105_700.0),
            bracket(0.24, 201_775.0),
            bracket(0.32, 256_225.0),
            bracket(0.35, 640_600.0),
            bracket(0.37, f64::INFINITY),
        ],
        mfs: [
            bracket(0.10, 12_400.0),
            bracket(0.12, 50_400.0),
            bracket(0.22, 105_700.0),
            bracket(0.24, 201_775.0),
            bracket(0.32, 256_225.0),
            bracket(0.35, 640_600.0),
            bracket(0.37, f64::INFINITY),
        ],
        mfj: [
            bracket(0.10, 24_800.0),
            bracket(0.12, 100_800.0),
            bracket(0.22, 211_400.0),
            bracket(0.24, 403_550.0),
            bracket(0.32, 512_450.0),
            bracket(0.35, 768_700.0),
            bracket(0.37, f64::INFINITY),
        ],
        hoh: [
            bracket(0.10, 17_700.0),
            bracket(0.12, 67_450.0),
            bracket(0.22, 105_700.0),
            bracket(0.24, 201_775.0),
            bracket(0.32, 256_200.0),
            bracket(0.35, 640_600.0),
            bracket(0.37, f64::INFINITY),
        ],
    },
];

/// A per-status dollar amount for one tax year.
#[derive(Debug, Clone, Copy)]
pub struct DeductionTable {
    pub year: i32,
    pub single: f64,
    pub mfs: f64,
    pub mfj: f64,
    pub hoh: f64,
}

impl DeductionTable {
    #[must_use]
    pub fn for_status(&self, status: FilingStatus) -> f64 {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::MarriedFilingSeparately => self.mfs,
            FilingStatus::MarriedFilingJointly => self.mfj,
            FilingStatus::HeadOfHousehold => self.hoh,
        }
    }
}

pub static STANDARD_DEDUCTIONS: [DeductionTable; 3] = [
    DeductionTable {
        year: 2024,
        single: 14_600.0,
        mfs: 14_600.0,
        mfj: 29_200.0,
        hoh: 21_900.0,
    },
    DeductionTable {
        year: 2025,
        single: 15_750.0,
        mfs: 15_750.0,
        mfj: 31_500.0,
        hoh: 23_625.0,
    },
    DeductionTable {
        year: 2026,
        single: 16_100.0,
        mfs: 16_100.0,
        mfj: 32_200.0,
        hoh: 24_150.0,
    },
];

/// Additional deduction per qualifying senior (age 65+).
pub static SENIOR_ADDITIONS: [DeductionTable; 3] = [
    DeductionTable {
        year: 2024,
        single: 1_950.0,
        mfs: 1_950.0,
        mfj: 1_550.0,
        hoh: 1_950.0,
    },
    DeductionTable {
        year: 2025,
        single: 2_000.0,
        mfs: 2_000.0,
        mfj: 1_600.0,
        hoh: 2_000.0,
    },
    DeductionTable {
        year: 2026,
        single: 2_050.0,
        mfs: 2_050.0,
        mfj: 1_650.0,
        hoh: 2_050.0,
    },
];

fn effective<T>(tables: &[T], year_of: impl Fn(&T) -> i32, tax_year: i32) -> &T {
    tables
        .iter()
        .rev()
        .find(|t| year_of(t) <= tax_year)
        .unwrap_or(&tables[tables.len() - 1])
}

/// Brackets for the effective table year.
#[must_use]
pub fn brackets_for(status: FilingStatus, tax_year: i32) -> &'static [TaxBracket] {
    effective(&BRACKET_TABLES, |t| t.year, tax_year).for_status(status)
}

/// Standard deduction for the effective table year.
#[must_use]
pub fn standard_deduction_for(status: FilingStatus, tax_year: i32) -> f64 {
    effective(&STANDARD_DEDUCTIONS, |t| t.year, tax_year).for_status(status)
}

/// Per-qualifying-senior addition for the effective table year.
#[must_use]
pub fn senior_addition_for(status: FilingStatus, tax_year: i32) -> f64 {
    effective(&SENIOR_ADDITIONS, |t| t.year, tax_year).for_status(status)
}
