use std::cell::Cell;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::task::{Context, Poll};

use chrono::Utc;
use futures::Stream;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;

use crate::core::config::FeedConfig;
use crate::features::feed::generator::{generate_incident, next_delay};
use crate::features::incidents::models::Incident;

/// Capacity of the per-subscription channel backing `FeedSubscription`
const SUBSCRIPTION_BUFFER: usize = 64;

/// Subscriber callback, invoked once per emitted incident
pub type Listener = Arc<dyn Fn(&Incident) + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

thread_local! {
    /// Set while this thread runs listeners for a timer emission
    static DELIVERING: Cell<bool> = const { Cell::new(false) };
}

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Emission switch shared by the feed and one timer chain.
///
/// The chain checks `live` and delivers while holding `delivery`, so once
/// `turn_off` returns no listener of that chain runs again.
struct Switch {
    live: AtomicBool,
    delivery: Mutex<()>,
}

impl Switch {
    fn new() -> Self {
        Self {
            live: AtomicBool::new(true),
            delivery: Mutex::new(()),
        }
    }

    fn turn_off(&self) {
        self.live.store(false, Ordering::SeqCst);
        // A listener disconnecting from inside its own delivery already holds the gate
        if !DELIVERING.with(Cell::get) {
            drop(lock(&self.delivery));
        }
    }
}

/// A running timer chain
struct Connection {
    handle: JoinHandle<()>,
    switch: Arc<Switch>,
}

impl Connection {
    fn stop(self) {
        self.switch.turn_off();
        self.handle.abort();
    }
}

/// Simulated live incident feed.
///
/// After `connect()` a background task fabricates an incident after the
/// warm-up delay and then once per random interval, pushing each one to
/// every registered listener. `add_incident()` pushes operator-created
/// incidents through the same path.
pub struct IncidentFeed {
    config: FeedConfig,
    rng: Arc<Mutex<StdRng>>,
    listeners: Arc<Mutex<ListenerRegistry>>,
    connection: Mutex<Option<Connection>>,
}

impl IncidentFeed {
    pub fn new(config: FeedConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng: Arc::new(Mutex::new(rng)),
            listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
            connection: Mutex::new(None),
        }
    }

    /// Start generating incidents. A no-op while already connected.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn connect(&self) {
        let mut connection = lock(&self.connection);
        if connection.as_ref().is_some_and(|c| !c.handle.is_finished()) {
            tracing::warn!("Incident feed already connected, ignoring connect");
            return;
        }

        let switch = Arc::new(Switch::new());
        let handle = tokio::spawn(run_timer_chain(
            self.config.clone(),
            Arc::clone(&self.rng),
            Arc::clone(&self.listeners),
            Arc::clone(&switch),
        ));

        *connection = Some(Connection { handle, switch });
        tracing::info!(
            "Incident feed connected: warmup={:?}, interval={:?}..={:?}",
            self.config.warmup,
            self.config.min_interval,
            self.config.max_interval
        );
    }

    /// Cancel the pending timer chain. Listeners stay registered.
    ///
    /// Waits for a delivery already in progress, so no generated incident
    /// reaches a listener after this returns.
    pub fn disconnect(&self) {
        let connection = lock(&self.connection).take();
        match connection {
            Some(connection) => {
                connection.stop();
                tracing::info!("Incident feed disconnected");
            }
            None => tracing::debug!("Incident feed disconnect requested while not connected"),
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        lock(&self.connection)
            .as_ref()
            .is_some_and(|c| !c.handle.is_finished())
    }

    /// Register a subscriber; it sees every incident emitted from now on
    pub fn add_listener<F>(&self, callback: F) -> ListenerHandle
    where
        F: Fn(&Incident) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.listeners);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Arc::new(callback)));

        ListenerHandle {
            id,
            registry: Arc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }

    /// Broadcast an operator-created incident exactly like a generated one
    pub fn add_incident(&self, incident: Incident) -> Incident {
        tracing::info!(
            "Incident added manually: id={}, type={}, location={}",
            incident.id,
            incident.incident_type,
            incident.location
        );
        broadcast(&self.listeners, &incident);
        incident
    }

    /// Stream of emitted incidents; dropping it deregisters the listener
    pub fn subscribe(&self) -> FeedSubscription {
        let (tx, rx) = mpsc::channel(SUBSCRIPTION_BUFFER);
        let handle = self.add_listener(move |incident| {
            if let Err(mpsc::error::TrySendError::Full(dropped)) = tx.try_send(incident.clone()) {
                tracing::warn!("Feed subscriber lagging, dropping incident {}", dropped.id);
            }
        });

        FeedSubscription {
            stream: ReceiverStream::new(rx),
            handle: Some(handle),
        }
    }
}

impl Drop for IncidentFeed {
    fn drop(&mut self) {
        let connection = lock(&self.connection).take();
        if let Some(connection) = connection {
            connection.stop();
        }
    }
}

/// Invoke every listener registered at this moment, in registration order.
///
/// The registry lock is released before callbacks run so a listener may
/// unsubscribe itself or others during delivery.
fn broadcast(registry: &Mutex<ListenerRegistry>, incident: &Incident) {
    let snapshot: Vec<Listener> = lock(registry)
        .entries
        .iter()
        .map(|(_, listener)| Arc::clone(listener))
        .collect();

    for listener in snapshot {
        listener(incident);
    }
}

async fn run_timer_chain(
    config: FeedConfig,
    rng: Arc<Mutex<StdRng>>,
    listeners: Arc<Mutex<ListenerRegistry>>,
    switch: Arc<Switch>,
) {
    tokio::time::sleep(config.warmup).await;

    loop {
        let (incident, delay) = {
            let mut rng = lock(&rng);
            let incident = generate_incident(&mut *rng, Utc::now());
            let delay = next_delay(&mut *rng, config.min_interval, config.max_interval);
            (incident, delay)
        };

        {
            let _delivery = lock(&switch.delivery);
            if !switch.live.load(Ordering::SeqCst) {
                return;
            }

            tracing::info!(
                "New incident received: id={}, type={}, priority={}, location={}",
                incident.id,
                incident.incident_type,
                incident.priority,
                incident.location
            );
            DELIVERING.with(|d| d.set(true));
            broadcast(&listeners, &incident);
            DELIVERING.with(|d| d.set(false));
        }

        tokio::time::sleep(delay).await;
    }
}

/// Deregistration handle returned by `IncidentFeed::add_listener`
pub struct ListenerHandle {
    id: u64,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl ListenerHandle {
    /// Remove the listener. Returns false if it was already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = lock(&registry);
        let before = registry.entries.len();
        registry.entries.retain(|(id, _)| *id != self.id);
        registry.entries.len() != before
    }
}

/// Incident stream tied to a feed listener
pub struct FeedSubscription {
    stream: ReceiverStream<Incident>,
    handle: Option<ListenerHandle>,
}

impl Stream for FeedSubscription {
    type Item = Incident;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.stream).poll_next(cx)
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_incident, test_feed_config};
    use std::time::Duration;
    use tokio_stream::StreamExt;

    fn recorder(feed: &IncidentFeed) -> (Arc<Mutex<Vec<String>>>, ListenerHandle) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handle = feed.add_listener(move |incident| {
            sink.lock().unwrap().push(incident.id.clone());
        });
        (seen, handle)
    }

    #[test]
    fn test_listeners_invoked_once_in_registration_order() {
        let feed = IncidentFeed::new(test_feed_config());
        let calls = Arc::new(Mutex::new(Vec::new()));

        for n in 0..4 {
            let calls = Arc::clone(&calls);
            feed.add_listener(move |incident| {
                calls.lock().unwrap().push((n, incident.id.clone()));
            });
        }

        feed.add_incident(sample_incident("inc-003"));

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            (0..4)
                .map(|n| (n, "inc-003".to_string()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_add_incident_returns_it_unchanged() {
        let feed = IncidentFeed::new(test_feed_config());
        let incident = sample_incident("inc-010");

        let returned = feed.add_incident(incident.clone());

        assert_eq!(returned, incident);
        assert!(!feed.is_connected());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let feed = IncidentFeed::new(test_feed_config());
        let (kept, _kept_handle) = recorder(&feed);
        let (removed, handle) = recorder(&feed);

        assert!(handle.unsubscribe());
        feed.add_incident(sample_incident("inc-011"));

        assert_eq!(*kept.lock().unwrap(), vec!["inc-011"]);
        assert!(removed.lock().unwrap().is_empty());
        assert_eq!(feed.listener_count(), 1);
    }

    #[test]
    fn test_listener_may_unsubscribe_during_delivery() {
        let feed = Arc::new(IncidentFeed::new(test_feed_config()));
        let slot: Arc<Mutex<Option<ListenerHandle>>> = Arc::new(Mutex::new(None));

        let inner = Arc::clone(&slot);
        let handle = feed.add_listener(move |_| {
            if let Some(handle) = inner.lock().unwrap().take() {
                handle.unsubscribe();
            }
        });
        *slot.lock().unwrap() = Some(handle);

        feed.add_incident(sample_incident("inc-012"));
        assert_eq!(feed.listener_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_emits_after_warmup() {
        let feed = IncidentFeed::new(test_feed_config());
        let (seen, _handle) = recorder(&feed);

        feed.connect();
        assert!(feed.is_connected());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert!(seen.lock().unwrap().len() >= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_cancels_timer_chain() {
        let feed = IncidentFeed::new(test_feed_config());
        let (seen, _handle) = recorder(&feed);

        feed.connect();
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);

        feed.disconnect();
        assert!(!feed.is_connected());

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_connect_does_not_start_another_chain() {
        let feed = IncidentFeed::new(FeedConfig {
            min_interval: Duration::from_secs(10),
            max_interval: Duration::from_secs(10),
            ..test_feed_config()
        });
        let (seen, _handle) = recorder(&feed);

        feed.connect();
        feed.connect();

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconnect_after_disconnect() {
        let feed = IncidentFeed::new(test_feed_config());
        let (seen, _handle) = recorder(&feed);

        feed.connect();
        feed.disconnect();
        feed.connect();

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_disconnect_waits_for_delivery_in_progress() {
        let feed = Arc::new(IncidentFeed::new(FeedConfig {
            warmup: Duration::from_millis(10),
            ..test_feed_config()
        }));

        let (entered_tx, entered_rx) = std::sync::mpsc::channel::<()>();
        let (release_tx, release_rx) = std::sync::mpsc::channel::<()>();
        let release_rx = Mutex::new(release_rx);
        let delivered = Arc::new(AtomicBool::new(false));
        let done = Arc::clone(&delivered);
        feed.add_listener(move |_| {
            let _ = entered_tx.send(());
            let _ = release_rx.lock().unwrap().recv();
            done.store(true, Ordering::SeqCst);
        });

        feed.connect();
        tokio::task::spawn_blocking(move || entered_rx.recv().unwrap())
            .await
            .unwrap();

        let disconnecting = {
            let feed = Arc::clone(&feed);
            std::thread::spawn(move || feed.disconnect())
        };
        std::thread::sleep(Duration::from_millis(50));
        assert!(!disconnecting.is_finished());
        assert!(!delivered.load(Ordering::SeqCst));

        release_tx.send(()).unwrap();
        disconnecting.join().unwrap();
        assert!(delivered.load(Ordering::SeqCst));
        assert!(!feed.is_connected());
    }

    #[tokio::test(start_paused = true)]
    async fn test_listener_may_disconnect_during_delivery() {
        let feed = Arc::new(IncidentFeed::new(test_feed_config()));
        let weak = Arc::downgrade(&feed);
        let (seen, _handle) = recorder(&feed);
        feed.add_listener(move |_| {
            if let Some(feed) = weak.upgrade() {
                feed.disconnect();
            }
        });

        feed.connect();
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(!feed.is_connected());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_subscription_receives_and_deregisters_on_drop() {
        let feed = IncidentFeed::new(test_feed_config());
        let mut subscription = feed.subscribe();
        assert_eq!(feed.listener_count(), 1);

        feed.add_incident(sample_incident("inc-020"));
        let received = subscription.next().await.expect("incident delivered");
        assert_eq!(received.id, "inc-020");

        drop(subscription);
        assert_eq!(feed.listener_count(), 0);
    }
}
