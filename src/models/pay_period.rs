//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the unit of time a salary is
//! entered in, and the conversion to the enum form the calculation service expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The time unit over which a salary is expressed.
///
/// The serde and display form is the capitalised label shown in the period
/// select ("Annually"); [`PayPeriod::service_name`] gives the upper-case form
/// accepted by the calculation service ("ANNUALLY").
///
/// # Example
///
/// ```
/// use salary_breakdown::models::PayPeriod;
///
/// let period: PayPeriod = "fortnightly".parse().unwrap();
/// assert_eq!(period, PayPeriod::Fortnightly);
/// assert_eq!(period.label(), "Fortnightly");
/// assert_eq!(period.service_name(), "FORTNIGHTLY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PayPeriod {
    /// Salary expressed per year.
    #[default]
    Annually,
    /// Salary expressed per calendar month.
    Monthly,
    /// Salary expressed per two weeks.
    Fortnightly,
    /// Salary expressed per week.
    Weekly,
    /// Salary expressed per working day.
    Daily,
    /// Salary expressed per hour.
    Hourly,
}

impl PayPeriod {
    /// Every period, in the order the period select lists them.
    pub const ALL: [PayPeriod; 6] = [
        PayPeriod::Annually,
        PayPeriod::Monthly,
        PayPeriod::Fortnightly,
        PayPeriod::Weekly,
        PayPeriod::Daily,
        PayPeriod::Hourly,
    ];

    /// Returns the human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PayPeriod::Annually => "Annually",
            PayPeriod::Monthly => "Monthly",
            PayPeriod::Fortnightly => "Fortnightly",
            PayPeriod::Weekly => "Weekly",
            PayPeriod::Daily => "Daily",
            PayPeriod::Hourly => "Hourly",
        }
    }

    /// Returns the enum form expected by the calculation service.
    pub fn service_name(self) -> String {
        normalize_pay_period(self.label())
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pay period: {0}")]
pub struct UnknownPayPeriod(pub String);

impl FromStr for PayPeriod {
    type Err = UnknownPayPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_pay_period(s.trim());
        PayPeriod::ALL
            .into_iter()
            .find(|p| normalize_pay_period(p.label()) == wanted)
            .ok_or_else(|| UnknownPayPeriod(s.to_string()))
    }
}

/// Converts a pay period string to the calculation service's enum form.
///
/// The conversion is a plain upper-casing, so it is idempotent and insensitive
/// to the case of the input.
///
/// # Example
///
/// ```
/// use salary_breakdown::models::normalize_pay_period;
///
/// assert_eq!(normalize_pay_period("Annually"), "ANNUALLY");
/// assert_eq!(normalize_pay_period("ANNUALLY"), "ANNUALLY");
/// ```
pub fn normalize_pay_period(period: &str) -> String {
    period.to_uppercase()
}
