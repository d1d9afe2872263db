//! Core data models for the salary breakdown components.
//!
//! This module contains the domain types exchanged between the input
//! collector, the message bus, the presenter and the calculation service.

mod breakdown;
mod pay_period;
mod salary_input;

pub use breakdown::{
    FORTNIGHTS_PER_YEAR_KEY, MONTHS_PER_YEAR_KEY, PeriodDivisors, SalaryBreakdown,
    WEEKS_PER_YEAR_KEY,
};
pub use pay_period::{PayPeriod, UnknownPayPeriod, normalize_pay_period};
pub use salary_input::SalaryInputMessage;
