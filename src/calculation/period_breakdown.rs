//! Per-period breakdown rows derived from annual totals.
//!
//! This module converts a [`SalaryBreakdown`] into the income and tax tables
//! shown to the user, dividing each annual total by the weeks, fortnights and
//! months in a year. Columns whose divisor has not been loaded yet are
//! [`PeriodValue::Pending`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::models::{PeriodDivisors, SalaryBreakdown};

use super::number_format::format_number;

/// Text rendered for a cell whose divisor has not been loaded.
pub const PENDING_MARKER: &str = "pending";

/// Row label for take-home pay.
pub const TAKE_HOME_LABEL: &str = "Take home pay";
/// Row label for taxable income.
pub const TAXABLE_INCOME_LABEL: &str = "Taxable income";
/// Row label for superannuation.
pub const SUPERANNUATION_LABEL: &str = "Superannuation";
/// Row label for total taxes, shown in both tables.
pub const TOTAL_TAXES_LABEL: &str = "Total taxes";
/// Row label for income tax.
pub const INCOME_TAX_LABEL: &str = "Income Tax";
/// Row label for the low-income tax offset.
pub const LITO_LABEL: &str = "LITO (Low Income Tax Offset)";
/// Row label for the Medicare levy.
pub const MEDICARE_LEVY_LABEL: &str = "Medicare Levy";

/// A single cell of a breakdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodValue {
    /// A formatted figure such as `2,307.69`.
    Amount(String),
    /// The divisor for this column is not known yet.
    Pending,
}

impl PeriodValue {
    /// Returns true if the cell is waiting on divisors.
    pub fn is_pending(&self) -> bool {
        matches!(self, PeriodValue::Pending)
    }

    /// Returns the formatted figure, if there is one.
    pub fn as_amount(&self) -> Option<&str> {
        match self {
            PeriodValue::Amount(amount) => Some(amount),
            PeriodValue::Pending => None,
        }
    }
}

impl fmt::Display for PeriodValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodValue::Amount(amount) => f.write_str(amount),
            PeriodValue::Pending => f.write_str(PENDING_MARKER),
        }
    }
}

impl Serialize for PeriodValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One labelled row of a breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    /// The row label, e.g. "Take home pay".
    pub label: &'static str,
    /// The annual figure divided by weeks per year.
    pub weekly: PeriodValue,
    /// The annual figure divided by fortnights per year.
    pub fortnightly: PeriodValue,
    /// The annual figure divided by months per year.
    pub monthly: PeriodValue,
    /// The annual figure itself.
    pub annual: PeriodValue,
}

impl BreakdownRow {
    /// Builds a row for an annual figure.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_breakdown::calculation::{BreakdownRow, PeriodValue};
    /// use rust_decimal::Decimal;
    ///
    /// let row = BreakdownRow::from_annual("Take home pay", Decimal::new(52_000, 0), None);
    /// assert_eq!(row.annual, PeriodValue::Amount("52,000.00".to_string()));
    /// assert!(row.weekly.is_pending());
    /// ```
    pub fn from_annual(
        label: &'static str,
        annual: Decimal,
        divisors: Option<&PeriodDivisors>,
    ) -> Self {
        let per_period = |divisor: fn(&PeriodDivisors) -> Decimal| {
            divisors
                .and_then(|d| annual.checked_div(divisor(d)))
                .map(|value| PeriodValue::Amount(format_number(value)))
                .unwrap_or(PeriodValue::Pending)
        };

        Self {
            label,
            weekly: per_period(|d| d.weeks_per_year),
            fortnightly: per_period(|d| d.fortnights_per_year),
            monthly: per_period(|d| d.months_per_year),
            annual: PeriodValue::Amount(format_number(annual)),
        }
    }

    /// Returns the four cells in weekly, fortnightly, monthly, annual order.
    pub fn cells(&self) -> [&PeriodValue; 4] {
        [&self.weekly, &self.fortnightly, &self.monthly, &self.annual]
    }
}

/// Builds the income table: take-home pay, taxable income, superannuation and total taxes.
pub fn income_rows(
    breakdown: &SalaryBreakdown,
    divisors: Option<&PeriodDivisors>,
) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow::from_annual(TAKE_HOME_LABEL, breakdown.take_home, divisors),
        BreakdownRow::from_annual(TAXABLE_INCOME_LABEL, breakdown.taxable_income, divisors),
        BreakdownRow::from_annual(SUPERANNUATION_LABEL, breakdown.superannuation, divisors),
        BreakdownRow::from_annual(TOTAL_TAXES_LABEL, breakdown.total_taxes, divisors),
    ]
}

/// Builds the tax table: income tax, LITO, Medicare levy and total taxes.
///
/// The offset is a credit, so its row is always shown as a reduction.
pub fn tax_rows(
    breakdown: &SalaryBreakdown,
    divisors: Option<&PeriodDivisors>,
) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow::from_annual(INCOME_TAX_LABEL, breakdown.income_tax, divisors),
        BreakdownRow::from_annual(LITO_LABEL, -breakdown.low_income_offset.abs(), divisors),
        BreakdownRow::from_annual(MEDICARE_LEVY_LABEL, breakdown.medicare_levy, divisors),
        BreakdownRow::from_annual(TOTAL_TAXES_LABEL, breakdown.total_taxes, divisors),
    ]
}
