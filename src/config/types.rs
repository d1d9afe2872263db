//! Configuration types for the salary components.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `calculator.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::bus::SALARY_DATA_CHANNEL;
use crate::models::PayPeriod;

/// Top-level contents of `calculator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Channel the collector publishes on and the presenter listens to.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Initial values of the input form.
    #[serde(default)]
    pub defaults: FormDefaults,
    /// Tax years offered in the tax-year select.
    #[serde(default = "default_tax_years")]
    pub tax_years: Vec<String>,
    /// Number of pay periods per year served by the static divisor provider.
    #[serde(default)]
    pub divisors: DivisorConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            defaults: FormDefaults::default(),
            tax_years: default_tax_years(),
            divisors: DivisorConfig::default(),
        }
    }
}

/// Initial values of the input form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    /// Initial salary. Zero, so submitting an untouched form fails validation.
    pub salary: Decimal,
    /// Initial pay period.
    pub pay_period: PayPeriod,
    /// Initial superannuation rate, as a percentage.
    pub super_rate: Decimal,
    /// Initial include-super flag.
    pub include_super: bool,
    /// Initial Medicare-exemption flag.
    pub is_med_exempt: bool,
    /// Initially selected tax year.
    pub tax_year: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            salary: Decimal::ZERO,
            pay_period: PayPeriod::Annually,
            super_rate: Decimal::new(11, 0),
            include_super: false,
            is_med_exempt: false,
            tax_year: "2023 - 2024".to_string(),
        }
    }
}

/// Number of weeks, fortnights and months in a year.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DivisorConfig {
    /// Weeks per year.
    pub weeks_per_year: Decimal,
    /// Fortnights per year.
    pub fortnights_per_year: Decimal,
    /// Months per year.
    pub months_per_year: Decimal,
}

impl Default for DivisorConfig {
    fn default() -> Self {
        Self {
            weeks_per_year: Decimal::new(52, 0),
            fortnights_per_year: Decimal::new(26, 0),
            months_per_year: Decimal::new(12, 0),
        }
    }
}

fn default_channel() -> String {
    SALARY_DATA_CHANNEL.to_string()
}

fn default_tax_years() -> Vec<String> {
    vec![
        "2023 - 2024".to_string(),
        "2024 - 2025".to_string(),
        "2025 - 2026".to_string(),
    ]
}
