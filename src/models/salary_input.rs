//! The message published by the input collector.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Validated salary inputs, as carried on the salary data channel.
///
/// A message is only built after validation succeeded, so both the salary
/// and the super rate are always present and the salary is never zero.
///
/// # Example
///
/// ```
/// use salary_breakdown::models::{PayPeriod, SalaryInputMessage};
/// use rust_decimal::Decimal;
///
/// let message = SalaryInputMessage {
///     salary: Decimal::new(85_000, 0),
///     pay_period: PayPeriod::Annually,
///     super_rate: Decimal::new(11, 0),
///     include_super: false,
///     is_med_exempt: false,
/// };
/// let json = serde_json::to_value(&message).unwrap();
/// assert_eq!(json["payPeriod"], "Annually");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInputMessage {
    /// The salary amount, expressed per `pay_period`.
    pub salary: Decimal,
    /// The period the salary is expressed in.
    pub pay_period: PayPeriod,
    /// Superannuation rate as a percentage (e.g. 11 for 11%).
    pub super_rate: Decimal,
    /// Whether the entered salary already includes superannuation.
    pub include_super: bool,
    /// Whether the earner is exempt from the Medicare levy.
    pub is_med_exempt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_camel_case_keys() {
        let message = SalaryInputMessage {
            salary: Decimal::new(1000, 0),
            pay_period: PayPeriod::Weekly,
            super_rate: Decimal::new(115, 1),
            include_super: true,
            is_med_exempt: false,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["payPeriod"], "Weekly");
        assert_eq!(json["superRate"], "11.5");
        assert_eq!(json["includeSuper"], true);
        assert_eq!(json["isMedExempt"], false);
    }

    #[test]
    fn test_deserialize_accepts_numeric_amounts() {
        let json = r#"{
            "salary": 120000,
            "payPeriod": "Annually",
            "superRate": 11,
            "includeSuper": false,
            "isMedExempt": true
        }"#;
        let message: SalaryInputMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.salary, Decimal::new(120_000, 0));
        assert_eq!(message.super_rate, Decimal::new(11, 0));
        assert!(message.is_med_exempt);
    }
}
