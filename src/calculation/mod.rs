//! Derived figures for the salary breakdown tables.
//!
//! The calculation service returns annual totals only. This module turns them
//! into weekly, fortnightly and monthly figures, and formats every figure for
//! display without depending on the host locale.

mod number_format;
mod period_breakdown;

pub use number_format::{format_currency, format_number};
pub use period_breakdown::{
    BreakdownRow, INCOME_TAX_LABEL, LITO_LABEL, MEDICARE_LEVY_LABEL, PENDING_MARKER, PeriodValue,
    SUPERANNUATION_LABEL, TAKE_HOME_LABEL, TAXABLE_INCOME_LABEL, TOTAL_TAXES_LABEL, income_rows,
    tax_rows,
};
