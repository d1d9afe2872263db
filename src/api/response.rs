//! Response types for the salary breakdown API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::BreakdownRow;
use crate::collector::{InputCollector, SelectOption};
use crate::error::SalaryError;
use crate::models::PayPeriod;
use crate::presenter::PresenterState;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SalaryError> for ApiErrorResponse {
    fn from(error: SalaryError) -> Self {
        match error {
            SalaryError::InvalidInput(validation) => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(validation.to_string()),
            },
            other => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", other.to_string()),
            },
        }
    }
}

/// Body returned once salary inputs have been published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Always `"published"`.
    pub status: String,
    /// Number of subscribers the message reached.
    pub subscribers: usize,
}

impl SubmitResponse {
    /// Creates a response for a message that reached `subscribers` listeners.
    pub fn published(subscribers: usize) -> Self {
        Self {
            status: "published".to_string(),
            subscribers,
        }
    }
}

/// Current state of the salary form.
#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    /// Parsed salary, if valid.
    pub salary: Option<Decimal>,
    /// Salary rendered with thousands separators.
    pub salary_formatted: String,
    /// Selected pay period.
    pub pay_period: PayPeriod,
    /// Parsed super rate, if valid.
    pub super_rate: Option<Decimal>,
    /// Whether the salary includes superannuation.
    pub include_super: bool,
    /// Whether the earner is exempt from the Medicare levy.
    pub is_med_exempt: bool,
    /// Selected tax year.
    pub tax_year: String,
    /// Pay period choices.
    pub time_period_options: Vec<SelectOption>,
    /// Tax year choices.
    pub tax_year_options: Vec<SelectOption>,
}

impl From<&InputCollector> for FormResponse {
    fn from(collector: &InputCollector) -> Self {
        Self {
            salary: collector.salary(),
            salary_formatted: collector.salary_formatted(),
            pay_period: collector.pay_period(),
            super_rate: collector.super_rate(),
            include_super: collector.include_super(),
            is_med_exempt: collector.is_med_exempt(),
            tax_year: collector.tax_year().to_string(),
            time_period_options: collector.time_period_options(),
            tax_year_options: collector.tax_year_options(),
        }
    }
}

/// The two breakdown tables plus the outcome of the last calculation.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownResponse {
    /// Take home, taxable income, superannuation and total taxes.
    pub income: Vec<BreakdownRow>,
    /// Income tax, LITO, Medicare levy and total taxes.
    pub tax: Vec<BreakdownRow>,
    /// Message of the most recent failed calculation.
    pub last_error: Option<String>,
    /// Number of successful calculations applied.
    pub calculations: u64,
}

impl From<&PresenterState> for BreakdownResponse {
    fn from(state: &PresenterState) -> Self {
        Self {
            income: state.income_data(),
            tax: state.tax_data(),
            last_error: state.last_error.clone(),
            calculations: state.calculations,
        }
    }
}
