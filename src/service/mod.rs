//! Seams to the external calculation and divisor services.
//!
//! The salary and tax computation happens outside this crate. The presenter
//! reaches it through [`CalculationService`], and reads the number of pay
//! periods per year through [`DivisorProvider`].

mod contract;

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::models::PeriodDivisors;

pub use contract::{CalculationRequest, CalculationResponse, ServiceFailure, UNKNOWN_ERROR};

/// Remote procedure computing annual salary totals.
#[async_trait]
pub trait CalculationService: Send + Sync {
    /// Computes the annual breakdown for a request.
    async fn calculate_salary(
        &self,
        request: CalculationRequest,
    ) -> Result<CalculationResponse, ServiceFailure>;
}

/// Remote procedure returning the number of weeks, fortnights and months per year.
///
/// The map is keyed by "Weeks Per Year", "Fortnights Per Year" and "Months Per Year".
#[async_trait]
pub trait DivisorProvider: Send + Sync {
    /// Fetches the period divisors.
    async fn periodic_divisors(&self) -> Result<HashMap<String, Decimal>, ServiceFailure>;
}

/// Divisor provider answering from fixed values, typically loaded from configuration.
///
/// # Example
///
/// ```
/// use salary_breakdown::models::PeriodDivisors;
/// use salary_breakdown::service::{DivisorProvider, StaticDivisorProvider};
/// use rust_decimal::Decimal;
///
/// let divisors = PeriodDivisors::new(
///     Decimal::new(52, 0),
///     Decimal::new(26, 0),
///     Decimal::new(12, 0),
/// ).unwrap();
/// let provider = StaticDivisorProvider::new(divisors);
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let map = runtime.block_on(provider.periodic_divisors()).unwrap();
/// assert_eq!(map["Weeks Per Year"], Decimal::new(52, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticDivisorProvider {
    divisors: PeriodDivisors,
}

impl StaticDivisorProvider {
    /// Creates a provider always answering with `divisors`.
    pub fn new(divisors: PeriodDivisors) -> Self {
        Self { divisors }
    }
}

#[async_trait]
impl DivisorProvider for StaticDivisorProvider {
    async fn periodic_divisors(&self) -> Result<HashMap<String, Decimal>, ServiceFailure> {
        Ok(self.divisors.to_provider_map())
    }
}
