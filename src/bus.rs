//! In-process publish/subscribe registry keyed by channel id.
//!
//! [`MessageBus`] replaces the page-scoped message service the components were
//! originally wired through. Delivery is synchronous: `publish` invokes every
//! callback registered on the channel before it returns.
//!
//! ## Rules
//! - Subscribing returns an explicit [`Subscription`] handle; nothing is released
//!   implicitly.
//! - Unsubscribing an already released handle is a no-op.
//! - The registry lock is never held while callbacks run, so a callback may
//!   publish, subscribe or unsubscribe on the same bus.
//! - Messages published to a channel without subscribers are dropped.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use salary_breakdown::bus::MessageBus;
//!
//! let bus: MessageBus<String> = MessageBus::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = seen.clone();
//! let subscription = bus.subscribe("greetings", move |_msg: &String| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert_eq!(bus.publish("greetings", &"hello".to_string()), 1);
//! assert!(bus.unsubscribe(&subscription));
//! assert!(!bus.unsubscribe(&subscription));
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Channel the input collector publishes salary inputs on.
pub const SALARY_DATA_CHANNEL: &str = "SalaryDataMessageChannel";

type Callback<M> = Arc<dyn Fn(&M) + Send + Sync>;

/// Handle identifying one registration on a channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    channel: String,
    id: u64,
}

impl Subscription {
    /// The channel this subscription listens on.
    pub fn channel(&self) -> &str {
        &self.channel
    }
}

/// A string-keyed observer registry delivering messages of type `M`.
///
/// Cloning the bus yields another handle to the same registry.
pub struct MessageBus<M> {
    channels: Arc<Mutex<HashMap<String, Vec<(u64, Callback<M>)>>>>,
    next_id: Arc<AtomicU64>,
}

impl<M> Clone for MessageBus<M> {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<M> Default for MessageBus<M> {
    fn default() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl<M> fmt::Debug for MessageBus<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.lock();
        f.debug_struct("MessageBus")
            .field("channels", &channels.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<M> MessageBus<M> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` on `channel` and returns its handle.
    pub fn subscribe<F>(&self, channel: &str, callback: F) -> Subscription
    where
        F: Fn(&M) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock()
            .entry(channel.to_string())
            .or_default()
            .push((id, Arc::new(callback)));

        debug!(channel, subscription_id = id, "Subscribed to channel");
        Subscription {
            channel: channel.to_string(),
            id,
        }
    }

    /// Removes a registration.
    ///
    /// Returns `false` if the handle was already released.
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        let mut channels = self.lock();
        let Some(subscribers) = channels.get_mut(&subscription.channel) else {
            return false;
        };

        let before = subscribers.len();
        subscribers.retain(|(id, _)| *id != subscription.id);
        let removed = subscribers.len() != before;

        if subscribers.is_empty() {
            channels.remove(&subscription.channel);
        }
        if removed {
            debug!(
                channel = %subscription.channel,
                subscription_id = subscription.id,
                "Unsubscribed from channel"
            );
        }
        removed
    }

    /// Delivers `message` to every current subscriber of `channel`.
    ///
    /// Returns the number of callbacks invoked.
    pub fn publish(&self, channel: &str, message: &M) -> usize {
        let callbacks: Vec<Callback<M>> = self
            .lock()
            .get(channel)
            .map(|subscribers| subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect())
            .unwrap_or_default();

        for callback in &callbacks {
            callback(message);
        }

        debug!(channel, delivered = callbacks.len(), "Published message");
        callbacks.len()
    }

    /// Returns the number of active subscriptions on `channel`.
    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.lock().get(channel).map_or(0, Vec::len)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<(u64, Callback<M>)>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_subscriber(bus: &MessageBus<u32>, channel: &str) -> (Subscription, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let subscription = bus.subscribe(channel, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (subscription, count)
    }

    #[test]
    fn test_publish_reaches_all_subscribers_synchronously() {
        let bus = MessageBus::new();
        let (_a, count_a) = counting_subscriber(&bus, "salary");
        let (_b, count_b) = counting_subscriber(&bus, "salary");

        assert_eq!(bus.publish("salary", &7), 2);
        assert_eq!(count_a.load(Ordering::SeqCst), 1);
        assert_eq!(count_b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_channels_are_isolated() {
        let bus = MessageBus::new();
        let (_sub, count) = counting_subscriber(&bus, "salary");

        assert_eq!(bus.publish("other", &1), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_callback_receives_message() {
        let bus: MessageBus<String> = MessageBus::new();
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        bus.subscribe("salary", move |msg: &String| {
            sink.lock().unwrap().push(msg.clone());
        });

        bus.publish("salary", &"first".to_string());
        bus.publish("salary", &"second".to_string());

        assert_eq!(*received.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = MessageBus::new();
        let (subscription, count) = counting_subscriber(&bus, "salary");

        assert!(bus.unsubscribe(&subscription));
        assert_eq!(bus.publish("salary", &1), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(bus.subscriber_count("salary"), 0);
    }

    #[test]
    fn test_unsubscribe_twice_is_noop() {
        let bus = MessageBus::new();
        let (subscription, _) = counting_subscriber(&bus, "salary");

        assert!(bus.unsubscribe(&subscription));
        assert!(!bus.unsubscribe(&subscription));
    }

    #[test]
    fn test_unsubscribe_leaves_other_subscribers() {
        let bus = MessageBus::new();
        let (first, _) = counting_subscriber(&bus, "salary");
        let (_second, count) = counting_subscriber(&bus, "salary");

        bus.unsubscribe(&first);
        assert_eq!(bus.subscriber_count("salary"), 1);
        assert_eq!(bus.publish("salary", &1), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_unsubscribe_itself() {
        let bus: MessageBus<u32> = MessageBus::new();
        let handle: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let inner_bus = bus.clone();
        let inner_handle = Arc::clone(&handle);
        let subscription = bus.subscribe("salary", move |_| {
            if let Some(sub) = inner_handle.lock().unwrap().take() {
                inner_bus.unsubscribe(&sub);
            }
        });
        *handle.lock().unwrap() = Some(subscription);

        assert_eq!(bus.publish("salary", &1), 1);
        assert_eq!(bus.publish("salary", &2), 0);
    }

    #[test]
    fn test_clones_share_registry() {
        let bus = MessageBus::new();
        let other = bus.clone();
        let (_sub, count) = counting_subscriber(&bus, "salary");

        assert_eq!(other.publish("salary", &3), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
