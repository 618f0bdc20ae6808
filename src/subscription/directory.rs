use crate::registry::MonitoredAsset;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};
use uuid::Uuid;

/// Observer invoked with the just-computed asset snapshot on every tick.
pub type ObserverCallback = Box<dyn Fn(&MonitoredAsset) + Send + Sync>;

struct Subscriber {
    token: Uuid,
    cancelled: Arc<AtomicBool>,
    callback: Arc<ObserverCallback>,
}

/// Per-asset multicast registry of observer callbacks.
///
/// Multiple independent subscriptions per asset are allowed; delivery is in
/// registration order. A callback that panics is isolated and logged so the
/// remaining observers still get the notification.
pub struct SubscriptionDirectory {
    subscribers: Mutex<HashMap<String, Vec<Subscriber>>>,
}

impl SubscriptionDirectory {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(HashMap::new()),
        }
    }

    /// Subscribe `callback` to updates for `asset_id`.
    ///
    /// Returns a cancel capability; dropping the handle without calling
    /// [`SubscriptionHandle::cancel`] leaves the subscription active.
    pub fn subscribe(
        self: &Arc<Self>,
        asset_id: &str,
        callback: ObserverCallback,
    ) -> SubscriptionHandle {
        let token = Uuid::new_v4();
        let cancelled = Arc::new(AtomicBool::new(false));

        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers
            .entry(asset_id.to_string())
            .or_default()
            .push(Subscriber {
                token,
                cancelled: Arc::clone(&cancelled),
                callback: Arc::new(callback),
            });

        debug!(asset_id = %asset_id, token = %token, "Observer subscribed");

        SubscriptionHandle {
            directory: Arc::clone(self),
            asset_id: asset_id.to_string(),
            token,
            cancelled,
        }
    }

    /// Invoke every live callback registered for `asset_id` with `asset`.
    ///
    /// Subscribers are snapshotted under the lock, then invoked outside it so
    /// a callback may subscribe or cancel without deadlocking. The cancelled
    /// flag is re-checked immediately before each invocation, so a cancel
    /// that completes while this batch is in flight still suppresses
    /// delivery to that callback.
    pub fn notify_all(&self, asset_id: &str, asset: &MonitoredAsset) {
        let batch: Vec<(Arc<AtomicBool>, Arc<ObserverCallback>)> = {
            let subscribers = self.subscribers.lock().unwrap();
            match subscribers.get(asset_id) {
                Some(list) => list
                    .iter()
                    .map(|s| (Arc::clone(&s.cancelled), Arc::clone(&s.callback)))
                    .collect(),
                None => return,
            }
        };

        for (cancelled, callback) in batch {
            if cancelled.load(Ordering::Acquire) {
                continue;
            }
            // One failing observer must not starve the rest
            if catch_unwind(AssertUnwindSafe(|| (*callback)(asset))).is_err() {
                error!(asset_id = %asset_id, "Observer callback panicked, isolating");
            }
        }
    }

    /// Number of live subscriptions for `asset_id`.
    pub fn count(&self, asset_id: &str) -> usize {
        self.subscribers
            .lock()
            .unwrap()
            .get(asset_id)
            .map_or(0, |list| list.len())
    }

    fn remove(&self, asset_id: &str, token: Uuid) {
        let mut subscribers = self.subscribers.lock().unwrap();
        if let Some(list) = subscribers.get_mut(asset_id) {
            list.retain(|s| s.token != token);
            if list.is_empty() {
                subscribers.remove(asset_id);
            }
        }
    }
}

impl Default for SubscriptionDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancel capability returned by [`SubscriptionDirectory::subscribe`].
///
/// `cancel` removes exactly this subscription; calling it again is a no-op.
pub struct SubscriptionHandle {
    directory: Arc<SubscriptionDirectory>,
    asset_id: String,
    token: Uuid,
    cancelled: Arc<AtomicBool>,
}

impl SubscriptionHandle {
    /// Cancel this subscription. After this returns, the callback is never
    /// invoked again, including by a notification batch already in flight.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.directory.remove(&self.asset_id, self.token);
        debug!(asset_id = %self.asset_id, token = %self.token, "Observer cancelled");
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }
}
