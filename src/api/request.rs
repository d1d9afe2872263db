//! Request types for the salary breakdown API.
//!
//! This module defines the JSON body of the `/salary` endpoint.

use serde::{Deserialize, Serialize};

use crate::collector::InputCollector;
use crate::models::PayPeriod;

/// Raw text of a numeric form field.
///
/// Clients may send the field as a string or as a JSON number; either way it
/// goes through the collector's own parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// Field sent as text.
    Text(String),
    /// Field sent as a JSON number.
    Number(serde_json::Number),
}

impl RawInput {
    /// The raw text the user typed.
    pub fn as_text(&self) -> String {
        match self {
            RawInput::Text(text) => text.clone(),
            RawInput::Number(number) => number.to_string(),
        }
    }
}

/// Request body for the `/salary` endpoint.
///
/// Mirrors the salary form: free-text salary and super rate, a pay period
/// select and two checkboxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryFormRequest {
    /// Salary as typed.
    pub salary: RawInput,
    /// Selected pay period.
    #[serde(default)]
    pub pay_period: PayPeriod,
    /// Super rate as typed; the form's current rate is kept if omitted.
    #[serde(default)]
    pub super_rate: Option<RawInput>,
    /// Whether the salary includes superannuation.
    #[serde(default)]
    pub include_super: bool,
    /// Whether the earner is exempt from the Medicare levy.
    #[serde(default)]
    pub is_med_exempt: bool,
    /// Selected tax year; the form's current year is kept if omitted.
    #[serde(default)]
    pub tax_year: Option<String>,
}

impl SalaryFormRequest {
    /// Replays the request as form change events.
    pub fn apply_to(&self, collector: &mut InputCollector) {
        collector.handle_salary_change(&self.salary.as_text());
        collector.handle_period_change(self.pay_period);
        if let Some(super_rate) = &self.super_rate {
            collector.handle_super_rate_change(&super_rate.as_text());
        }
        collector.handle_include_super_change(self.include_super);
        collector.handle_medicare_exemption_change(self.is_med_exempt);
        if let Some(tax_year) = &self.tax_year {
            collector.handle_tax_year_change(tax_year.clone());
        }
    }
}
