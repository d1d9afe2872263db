//! Salary breakdown presenter.
//!
//! [`BreakdownPresenter`] listens on the salary data channel, forwards each
//! message to the calculation service and keeps the latest annual totals.
//! Per-period rows are derived on demand from those totals and the period
//! divisors.
//!
//! ## Lifecycle
//! - [`BreakdownPresenter::mount`] subscribes once and requests the divisors once.
//! - [`BreakdownPresenter::unmount`] releases the subscription; repeating it is a no-op.
//!
//! ## Ordering
//! Calculations and the divisor fetch run as independent tasks and may finish
//! in any order. The last calculation to finish wins, even if it was started
//! first. Rows render [`PeriodValue::Pending`](crate::calculation::PeriodValue)
//! cells until divisors arrive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::bus::{MessageBus, Subscription};
use crate::calculation::{BreakdownRow, income_rows, tax_rows};
use crate::error::{SalaryError, SalaryResult};
use crate::models::{PeriodDivisors, SalaryBreakdown, SalaryInputMessage};
use crate::notify::{Notification, NotificationSink};
use crate::service::{CalculationRequest, CalculationService, DivisorProvider};

/// Everything the presenter renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterState {
    /// Totals from the most recent successful calculation.
    pub breakdown: Option<SalaryBreakdown>,
    /// Period divisors, once loaded.
    pub divisors: Option<PeriodDivisors>,
    /// Message of the most recent failed calculation, cleared on success.
    pub last_error: Option<String>,
    /// Number of successful calculations applied.
    pub calculations: u64,
}

impl PresenterState {
    /// Income table rows. Totals read as zero until a calculation succeeds.
    pub fn income_data(&self) -> Vec<BreakdownRow> {
        income_rows(&self.breakdown.unwrap_or_default(), self.divisors.as_ref())
    }

    /// Tax table rows. Totals read as zero until a calculation succeeds.
    pub fn tax_data(&self) -> Vec<BreakdownRow> {
        tax_rows(&self.breakdown.unwrap_or_default(), self.divisors.as_ref())
    }
}

struct PresenterInner {
    channel: String,
    service: Arc<dyn CalculationService>,
    divisor_provider: Arc<dyn DivisorProvider>,
    notifier: Arc<dyn NotificationSink>,
    state: watch::Sender<PresenterState>,
    subscription: Mutex<Option<Subscription>>,
    divisors_requested: AtomicBool,
}

/// Subscribes to salary inputs and presents the calculated breakdown.
///
/// Cloning yields another handle to the same presenter.
#[derive(Clone)]
pub struct BreakdownPresenter {
    inner: Arc<PresenterInner>,
}

impl BreakdownPresenter {
    /// Creates an unmounted presenter listening on `channel`.
    pub fn new(
        channel: impl Into<String>,
        service: Arc<dyn CalculationService>,
        divisor_provider: Arc<dyn DivisorProvider>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let (state, _) = watch::channel(PresenterState::default());
        Self {
            inner: Arc::new(PresenterInner {
                channel: channel.into(),
                service,
                divisor_provider,
                notifier,
                state,
                subscription: Mutex::new(None),
                divisors_requested: AtomicBool::new(false),
            }),
        }
    }

    /// Subscribes to the channel and starts the divisor fetch.
    ///
    /// Returns `false` if the presenter was already subscribed, in which case
    /// nothing changes. The divisor fetch needs a running tokio runtime; without
    /// one it is deferred to the next mount.
    pub fn mount(&self, bus: &MessageBus<SalaryInputMessage>) -> bool {
        let subscribed = {
            let mut slot = self.subscription_slot();
            if slot.is_some() {
                false
            } else {
                let presenter = self.clone();
                *slot = Some(bus.subscribe(&self.inner.channel, move |message| {
                    presenter.dispatch(message.clone());
                }));
                true
            }
        };

        if !self.inner.divisors_requested.swap(true, Ordering::SeqCst) {
            match Handle::try_current() {
                Ok(handle) => {
                    let presenter = self.clone();
                    handle.spawn(async move {
                        let _ = presenter.load_divisors().await;
                    });
                }
                Err(_) => {
                    warn!("No async runtime available; divisor fetch deferred");
                    self.inner.divisors_requested.store(false, Ordering::SeqCst);
                }
            }
        }

        subscribed
    }

    /// Releases the subscription.
    ///
    /// Returns `false` if there was nothing to release.
    pub fn unmount(&self, bus: &MessageBus<SalaryInputMessage>) -> bool {
        let released = self.subscription_slot().take();
        match released {
            Some(subscription) => bus.unsubscribe(&subscription),
            None => false,
        }
    }

    /// Returns true while subscribed.
    pub fn is_mounted(&self) -> bool {
        self.subscription_slot().is_some()
    }

    /// Sends one salary message to the calculation service and stores the result.
    ///
    /// On failure the user is notified and the previous totals are kept.
    pub async fn handle_message(&self, message: SalaryInputMessage) -> SalaryResult<SalaryBreakdown> {
        let correlation_id = Uuid::new_v4();
        let request = CalculationRequest::from(&message);
        info!(
            correlation_id = %correlation_id,
            pay_period = %request.pay_period,
            "Requesting salary calculation"
        );

        match self.inner.service.calculate_salary(request).await {
            Ok(response) => {
                let breakdown = SalaryBreakdown::from(response);
                self.inner.state.send_modify(|state| {
                    state.breakdown = Some(breakdown);
                    state.last_error = None;
                    state.calculations += 1;
                });
                info!(
                    correlation_id = %correlation_id,
                    take_home = %breakdown.take_home,
                    total_taxes = %breakdown.total_taxes,
                    "Salary calculation completed"
                );
                Ok(breakdown)
            }
            Err(failure) => {
                let message = failure.message();
                warn!(
                    correlation_id = %correlation_id,
                    error = %message,
                    "Salary calculation failed"
                );
                self.inner.state.send_modify(|state| {
                    state.last_error = Some(message.clone());
                });
                self.inner.notifier.notify(Notification::error(message.clone()));
                Err(SalaryError::RemoteCalculation { message })
            }
        }
    }

    /// Fetches the period divisors and stores them.
    ///
    /// Failures are logged only; rows stay pending.
    pub async fn load_divisors(&self) -> SalaryResult<PeriodDivisors> {
        let result = match self.inner.divisor_provider.periodic_divisors().await {
            Ok(map) => PeriodDivisors::from_provider_map(&map),
            Err(failure) => Err(SalaryError::DivisorFetch {
                message: failure.message(),
            }),
        };

        match result {
            Ok(divisors) => {
                self.inner.state.send_modify(|state| {
                    state.divisors = Some(divisors);
                });
                info!(
                    weeks_per_year = %divisors.weeks_per_year,
                    fortnights_per_year = %divisors.fortnights_per_year,
                    months_per_year = %divisors.months_per_year,
                    "Period divisors loaded"
                );
                Ok(divisors)
            }
            Err(err) => {
                error!(error = %err, "Error retrieving divisors");
                Err(err)
            }
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> PresenterState {
        self.inner.state.borrow().clone()
    }

    /// A receiver notified on every state change.
    pub fn watch(&self) -> watch::Receiver<PresenterState> {
        self.inner.state.subscribe()
    }

    /// Income table rows for the current state.
    pub fn income_data(&self) -> Vec<BreakdownRow> {
        self.inner.state.borrow().income_data()
    }

    /// Tax table rows for the current state.
    pub fn tax_data(&self) -> Vec<BreakdownRow> {
        self.inner.state.borrow().tax_data()
    }

    /// The channel this presenter listens on.
    pub fn channel(&self) -> &str {
        &self.inner.channel
    }

    fn dispatch(&self, message: SalaryInputMessage) {
        match Handle::try_current() {
            Ok(handle) => {
                let presenter = self.clone();
                handle.spawn(async move {
                    let _ = presenter.handle_message(message).await;
                });
            }
            Err(_) => warn!(
                channel = %self.inner.channel,
                "No async runtime available; salary message dropped"
            ),
        }
    }

    fn subscription_slot(&self) -> MutexGuard<'_, Option<Subscription>> {
        self.inner
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
