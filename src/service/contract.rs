//! Wire types for the external calculation service.
//!
//! Field names follow the service's camelCase contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{SalaryBreakdown, SalaryInputMessage};

/// Text surfaced when a failure payload carries no usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Request sent to the calculation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The salary as entered.
    pub input_salary: Decimal,
    /// The pay period in the service's upper-case enum form.
    pub pay_period: String,
    /// Whether the salary already includes superannuation.
    pub include_super: bool,
    /// Superannuation rate as a percentage.
    pub super_rate: Decimal,
    /// Whether the earner is exempt from the Medicare levy.
    pub is_med_exempt: bool,
}

impl From<&SalaryInputMessage> for CalculationRequest {
    fn from(message: &SalaryInputMessage) -> Self {
        Self {
            input_salary: message.salary,
            pay_period: message.pay_period.service_name(),
            include_super: message.include_super,
            super_rate: message.super_rate,
            is_med_exempt: message.is_med_exempt,
        }
    }
}

/// Annual totals returned by the calculation service.
///
/// Amounts arrive as decimal strings; plain JSON numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// Annual take-home income.
    pub annual_income: Decimal,
    /// Annual taxable income.
    pub annual_taxable_income: Decimal,
    /// Annual superannuation.
    pub annual_super: Decimal,
    /// Annual total taxes.
    pub annual_taxes: Decimal,
    /// Annual income tax.
    pub annual_income_tax: Decimal,
    /// Annual Medicare levy.
    pub annual_med_levy: Decimal,
    /// Annual low-income tax offset.
    #[serde(rename = "annualLIO")]
    pub annual_lio: Decimal,
}

impl From<CalculationResponse> for SalaryBreakdown {
    fn from(response: CalculationResponse) -> Self {
        SalaryBreakdown {
            take_home: response.annual_income,
            taxable_income: response.annual_taxable_income,
            superannuation: response.annual_super,
            total_taxes: response.annual_taxes,
            income_tax: response.annual_income_tax,
            medicare_levy: response.annual_med_levy,
            low_income_offset: response.annual_lio,
        }
    }
}

/// Error payload returned by a failed service call.
///
/// `body` is either a list of sub-errors each carrying a `message`, or a
/// single object with a `message` field. Anything else is treated as unknown.
///
/// # Example
///
/// ```
/// use salary_breakdown::service::ServiceFailure;
/// use serde_json::json;
///
/// let failure = ServiceFailure::new(json!([{ "message": "a" }, { "message": "b" }]));
/// assert_eq!(failure.message(), "a, b");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{}", failure_message(.body))]
pub struct ServiceFailure {
    /// The raw error body.
    #[serde(default)]
    pub body: Value,
}

impl ServiceFailure {
    /// Wraps a raw error body.
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Creates a failure whose body carries a single message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::new(serde_json::json!({ "message": message.into() }))
    }

    /// Extracts the text shown to the user.
    ///
    /// Sub-errors without a string `message` are skipped; if none remain the
    /// result is [`UNKNOWN_ERROR`].
    pub fn message(&self) -> String {
        failure_message(&self.body)
    }
}

fn failure_message(body: &Value) -> String {
    match body {
        Value::Array(errors) => {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                messages.join(", ")
            }
        }
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR)
            .to_string(),
        _ => UNKNOWN_ERROR.to_string(),
    }
}
