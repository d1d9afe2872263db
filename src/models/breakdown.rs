//! Salary breakdown and period divisor models.
//!
//! [`SalaryBreakdown`] holds the seven annual totals returned by the
//! calculation service. [`PeriodDivisors`] holds the number of weeks,
//! fortnights and months in a year used to derive per-period figures.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SalaryError, SalaryResult};

/// Provider key for the number of months in a year.
pub const MONTHS_PER_YEAR_KEY: &str = "Months Per Year";
/// Provider key for the number of weeks in a year.
pub const WEEKS_PER_YEAR_KEY: &str = "Weeks Per Year";
/// Provider key for the number of fortnights in a year.
pub const FORTNIGHTS_PER_YEAR_KEY: &str = "Fortnights Per Year";

/// The seven annual totals of a salary calculation.
///
/// Replaced wholesale on every successful calculation; never edited in place.
///
/// # Example
///
/// ```
/// use salary_breakdown::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     take_home: Decimal::new(120_000, 0),
///     ..SalaryBreakdown::default()
/// };
/// assert_eq!(breakdown.income_tax, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Annual take-home pay.
    pub take_home: Decimal,
    /// Annual taxable income.
    pub taxable_income: Decimal,
    /// Annual superannuation contribution.
    pub superannuation: Decimal,
    /// Annual total of all taxes.
    pub total_taxes: Decimal,
    /// Annual income tax.
    pub income_tax: Decimal,
    /// Annual Medicare levy.
    pub medicare_levy: Decimal,
    /// Annual low-income tax offset (a credit).
    pub low_income_offset: Decimal,
}

/// Number of pay periods in a year, used to convert annual totals.
///
/// All three values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDivisors {
    /// Weeks per year.
    pub weeks_per_year: Decimal,
    /// Fortnights per year.
    pub fortnights_per_year: Decimal,
    /// Months per year.
    pub months_per_year: Decimal,
}

impl PeriodDivisors {
    /// Creates divisors, rejecting zero or negative values.
    pub fn new(
        weeks_per_year: Decimal,
        fortnights_per_year: Decimal,
        months_per_year: Decimal,
    ) -> SalaryResult<Self> {
        for (name, value) in [
            (WEEKS_PER_YEAR_KEY, weeks_per_year),
            (FORTNIGHTS_PER_YEAR_KEY, fortnights_per_year),
            (MONTHS_PER_YEAR_KEY, months_per_year),
        ] {
            if value <= Decimal::ZERO {
                return Err(SalaryError::DivisorFetch {
                    message: format!("'{}' must be positive, got {}", name, value),
                });
            }
        }

        Ok(Self {
            weeks_per_year,
            fortnights_per_year,
            months_per_year,
        })
    }

    /// Builds divisors from the keyed map returned by a divisor provider.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use salary_breakdown::models::PeriodDivisors;
    /// use rust_decimal::Decimal;
    ///
    /// let map = HashMap::from([
    ///     ("Weeks Per Year".to_string(), Decimal::new(52, 0)),
    ///     ("Fortnights Per Year".to_string(), Decimal::new(26, 0)),
    ///     ("Months Per Year".to_string(), Decimal::new(12, 0)),
    /// ]);
    /// let divisors = PeriodDivisors::from_provider_map(&map).unwrap();
    /// assert_eq!(divisors.months_per_year, Decimal::new(12, 0));
    /// ```
    pub fn from_provider_map(map: &HashMap<String, Decimal>) -> SalaryResult<Self> {
        let get = |key: &str| {
            map.get(key).copied().ok_or_else(|| SalaryError::DivisorFetch {
                message: format!("missing key '{}'", key),
            })
        };

        Self::new(
            get(WEEKS_PER_YEAR_KEY)?,
            get(FORTNIGHTS_PER_YEAR_KEY)?,
            get(MONTHS_PER_YEAR_KEY)?,
        )
    }

    /// Converts the divisors back into the provider's keyed form.
    pub fn to_provider_map(&self) -> HashMap<String, Decimal> {
        HashMap::from([
            (WEEKS_PER_YEAR_KEY.to_string(), self.weeks_per_year),
            (FORTNIGHTS_PER_YEAR_KEY.to_string(), self.fortnights_per_year),
            (MONTHS_PER_YEAR_KEY.to_string(), self.months_per_year),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_map() -> HashMap<String, Decimal> {
        HashMap::from([
            (WEEKS_PER_YEAR_KEY.to_string(), Decimal::new(52, 0)),
            (FORTNIGHTS_PER_YEAR_KEY.to_string(), Decimal::new(26, 0)),
            (MONTHS_PER_YEAR_KEY.to_string(), Decimal::new(12, 0)),
        ])
    }

    #[test]
    fn test_from_provider_map_reads_all_keys() {
        let divisors = PeriodDivisors::from_provider_map(&standard_map()).unwrap();
        assert_eq!(divisors.weeks_per_year, Decimal::new(52, 0));
        assert_eq!(divisors.fortnights_per_year, Decimal::new(26, 0));
        assert_eq!(divisors.months_per_year, Decimal::new(12, 0));
    }

    #[test]
    fn test_from_provider_map_missing_key_fails() {
        let mut map = standard_map();
        map.remove(FORTNIGHTS_PER_YEAR_KEY);

        match PeriodDivisors::from_provider_map(&map) {
            Err(SalaryError::DivisorFetch { message }) => {
                assert!(message.contains("Fortnights Per Year"));
            }
            other => panic!("Expected DivisorFetch error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let result = PeriodDivisors::new(Decimal::ZERO, Decimal::new(26, 0), Decimal::new(12, 0));
        assert!(matches!(result, Err(SalaryError::DivisorFetch { .. })));
    }

    #[test]
    fn test_provider_map_round_trip_keys() {
        let divisors = PeriodDivisors::from_provider_map(&standard_map()).unwrap();
        assert_eq!(divisors.to_provider_map(), standard_map());
    }

    #[test]
    fn test_default_breakdown_is_all_zero() {
        let breakdown = SalaryBreakdown::default();
        assert_eq!(breakdown.take_home, Decimal::ZERO);
        assert_eq!(breakdown.low_income_offset, Decimal::ZERO);
    }
}
