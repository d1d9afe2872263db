//! Salary input collector.
//!
//! [`InputCollector`] holds the state of the salary form, validates it and
//! publishes a [`SalaryInputMessage`] on the salary data channel when the
//! user submits.
//!
//! Numeric fields use `None` as the "could not parse" sentinel. Validation
//! treats a zero salary as invalid but accepts a zero super rate.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::bus::MessageBus;
use crate::calculation::format_currency;
use crate::config::ConfigLoader;
use crate::error::{SalaryResult, ValidationError};
use crate::models::{PayPeriod, SalaryInputMessage};
use crate::notify::{Notification, NotificationSink};

/// A label/value pair for a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Text shown to the user.
    pub label: String,
    /// Value submitted when selected.
    pub value: String,
}

/// Parses free-text numeric input.
///
/// Accepts plain and scientific notation, ignoring surrounding whitespace.
/// Returns `None` for anything that is not a finite number, including digit
/// separators such as `1_000`, and for values outside the `Decimal` range.
///
/// # Example
///
/// ```
/// use salary_breakdown::collector::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("1000"), Some(Decimal::new(1000, 0)));
/// assert_eq!(parse_amount(" 1.5e3 "), Some(Decimal::new(1500, 0)));
/// assert_eq!(parse_amount("abc"), None);
/// assert_eq!(parse_amount(""), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if !trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// State and behaviour of the salary input form.
pub struct InputCollector {
    bus: MessageBus<SalaryInputMessage>,
    channel: String,
    notifier: Arc<dyn NotificationSink>,
    tax_years: Vec<String>,
    salary: Option<Decimal>,
    pay_period: PayPeriod,
    super_rate: Option<Decimal>,
    include_super: bool,
    is_med_exempt: bool,
    tax_year: String,
}

impl InputCollector {
    /// Creates a collector publishing on the configured channel, with the
    /// configured initial form values.
    pub fn new(
        config: &ConfigLoader,
        bus: MessageBus<SalaryInputMessage>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let defaults = config.defaults();
        Self {
            bus,
            channel: config.channel().to_string(),
            notifier,
            tax_years: config.tax_years().to_vec(),
            salary: Some(defaults.salary),
            pay_period: defaults.pay_period,
            super_rate: Some(defaults.super_rate),
            include_super: defaults.include_super,
            is_med_exempt: defaults.is_med_exempt,
            tax_year: defaults.tax_year.clone(),
        }
    }

    /// Updates the salary from raw text; unparseable input becomes `None`.
    pub fn handle_salary_change(&mut self, raw: &str) {
        self.salary = parse_amount(raw);
    }

    /// Updates the super rate from raw text; unparseable input becomes `None`.
    pub fn handle_super_rate_change(&mut self, raw: &str) {
        self.super_rate = parse_amount(raw);
    }

    /// Updates the pay period.
    pub fn handle_period_change(&mut self, period: PayPeriod) {
        self.pay_period = period;
    }

    /// Updates the include-super flag.
    pub fn handle_include_super_change(&mut self, include_super: bool) {
        self.include_super = include_super;
    }

    /// Updates the Medicare-exemption flag.
    pub fn handle_medicare_exemption_change(&mut self, is_med_exempt: bool) {
        self.is_med_exempt = is_med_exempt;
    }

    /// Updates the selected tax year.
    pub fn handle_tax_year_change(&mut self, tax_year: impl Into<String>) {
        self.tax_year = tax_year.into();
    }

    /// Checks the current inputs.
    ///
    /// Precedence: both numbers invalid, then salary invalid or zero, then
    /// super rate invalid.
    pub fn validate_inputs(&self) -> Option<ValidationError> {
        match (self.salary, self.super_rate) {
            (None, None) => Some(ValidationError::SalaryAndSuperRate),
            (None, _) => Some(ValidationError::Salary),
            (Some(salary), _) if salary.is_zero() => Some(ValidationError::Salary),
            (_, None) => Some(ValidationError::SuperRate),
            _ => None,
        }
    }

    /// Validates and publishes the current inputs.
    ///
    /// On a validation error the user is notified and nothing is published.
    /// Otherwise returns the number of subscribers the message reached.
    pub fn handle_button_click(&self) -> SalaryResult<usize> {
        let message = match self.build_message() {
            Ok(message) => message,
            Err(error) => {
                warn!(error = %error, "Salary input rejected");
                self.notifier.notify(Notification::error(error.to_string()));
                return Err(error.into());
            }
        };

        let delivered = self.bus.publish(&self.channel, &message);
        info!(
            channel = %self.channel,
            pay_period = %message.pay_period,
            delivered,
            "Published salary inputs"
        );
        Ok(delivered)
    }

    fn build_message(&self) -> Result<SalaryInputMessage, ValidationError> {
        if let Some(error) = self.validate_inputs() {
            return Err(error);
        }

        match (self.salary, self.super_rate) {
            (Some(salary), Some(super_rate)) => Ok(SalaryInputMessage {
                salary,
                pay_period: self.pay_period,
                super_rate,
                include_super: self.include_super,
                is_med_exempt: self.is_med_exempt,
            }),
            (None, _) => Err(ValidationError::Salary),
            (_, None) => Err(ValidationError::SuperRate),
        }
    }

    /// Pay period choices, in display order.
    pub fn time_period_options(&self) -> Vec<SelectOption> {
        PayPeriod::ALL
            .iter()
            .map(|period| SelectOption {
                label: period.label().to_string(),
                value: period.label().to_string(),
            })
            .collect()
    }

    /// Tax year choices, in display order.
    pub fn tax_year_options(&self) -> Vec<SelectOption> {
        self.tax_years
            .iter()
            .map(|year| SelectOption {
                label: year.clone(),
                value: year.clone(),
            })
            .collect()
    }

    /// The current salary rendered as US dollars; an invalid salary shows as `$0.00`.
    pub fn salary_formatted(&self) -> String {
        format_currency(self.salary.unwrap_or(Decimal::ZERO))
    }

    /// The current salary, `None` if the last input did not parse.
    pub fn salary(&self) -> Option<Decimal> {
        self.salary
    }

    /// The current super rate, `None` if the last input did not parse.
    pub fn super_rate(&self) -> Option<Decimal> {
        self.super_rate
    }

    /// The selected pay period.
    pub fn pay_period(&self) -> PayPeriod {
        self.pay_period
    }

    /// Whether the salary includes superannuation.
    pub fn include_super(&self) -> bool {
        self.include_super
    }

    /// Whether the Medicare-exemption box is ticked.
    pub fn is_med_exempt(&self) -> bool {
        self.is_med_exempt
    }

    /// The selected tax year.
    pub fn tax_year(&self) -> &str {
        &self.tax_year
    }

    /// The channel messages are published on.
    pub fn channel(&self) -> &str {
        &self.channel
    }
}
