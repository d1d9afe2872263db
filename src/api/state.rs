//! Application state for the salary breakdown API.
//!
//! This module wires the collector, bus and presenter together and shares
//! them with every request handler.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::bus::MessageBus;
use crate::collector::InputCollector;
use crate::config::ConfigLoader;
use crate::notify::NotificationLog;
use crate::presenter::BreakdownPresenter;
use crate::service::{CalculationService, DivisorProvider, StaticDivisorProvider};

/// Shared application state.
///
/// Holds one input form and one mounted presenter connected through a
/// private message bus. Both report failures into the same notification log.
#[derive(Clone)]
pub struct AppState {
    collector: Arc<Mutex<InputCollector>>,
    presenter: BreakdownPresenter,
    notifications: Arc<NotificationLog>,
}

impl AppState {
    /// Builds the state and mounts the presenter.
    ///
    /// Must be called inside a tokio runtime so the divisor fetch can start.
    pub fn new(
        config: &ConfigLoader,
        service: Arc<dyn CalculationService>,
        divisor_provider: Arc<dyn DivisorProvider>,
    ) -> Self {
        let bus = MessageBus::new();
        let notifications = Arc::new(NotificationLog::default());

        let collector = InputCollector::new(config, bus.clone(), notifications.clone());
        let presenter = BreakdownPresenter::new(
            config.channel(),
            service,
            divisor_provider,
            notifications.clone(),
        );
        presenter.mount(&bus);

        Self {
            collector: Arc::new(Mutex::new(collector)),
            presenter,
            notifications,
        }
    }

    /// Builds the state with divisors taken from the configuration.
    pub fn with_configured_divisors(
        config: &ConfigLoader,
        service: Arc<dyn CalculationService>,
    ) -> Self {
        let divisors = Arc::new(StaticDivisorProvider::new(config.divisors()));
        Self::new(config, service, divisors)
    }

    /// Locks the input form.
    pub fn collector(&self) -> MutexGuard<'_, InputCollector> {
        self.collector.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &BreakdownPresenter {
        &self.presenter
    }

    /// Returns the notification log.
    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }
}
