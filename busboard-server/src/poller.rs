//! Timer-driven data refresh.
//!
//! A [`Poller`] owns the single writer of the board snapshot: on every
//! tick it asks the provider for a full replacement departure set and
//! publishes a fresh [`BoardSnapshot`] through a watch channel. Readers
//! only ever see whole snapshots; there is no partial update.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::board::BoardSnapshot;
use crate::provider::DepartureProvider;

/// Periodic departure fetcher with idempotent start/stop.
pub struct Poller<P> {
    provider: Arc<P>,
    tx: watch::Sender<Arc<BoardSnapshot>>,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl<P: DepartureProvider> Poller<P> {
    /// Create a poller and the receiver handing out snapshots.
    ///
    /// The initial snapshot is the not-yet-loaded state; nothing happens
    /// until [`Poller::start`] is called.
    pub fn new(provider: P, interval: Duration) -> (Self, watch::Receiver<Arc<BoardSnapshot>>) {
        let (tx, rx) = watch::channel(Arc::new(BoardSnapshot::initial()));
        (
            Self {
                provider: Arc::new(provider),
                tx,
                interval,
                handle: None,
            },
            rx,
        )
    }

    /// Begin polling. The first fetch fires immediately, then once per
    /// interval. Calling this while already running is a no-op.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let period = self.interval;

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let snapshot = match provider.fetch().await {
                    Ok(departures) => {
                        info!(stops = departures.len(), "departures refreshed");
                        BoardSnapshot::loaded(departures)
                    }
                    Err(err) => {
                        warn!(error = %err, "departure fetch failed");
                        BoardSnapshot::failed(&tx.borrow(), err.to_string())
                    }
                };
                tx.send_replace(Arc::new(snapshot));
            }
        }));
    }

    /// Stop polling. The refresh task is aborted, so a response still in
    /// flight is dropped rather than delivered late. Calling this while
    /// stopped is a no-op.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl<P> Drop for Poller<P> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Departure, DepartureSet, TransportType};
    use crate::provider::MockProvider;
    use chrono::NaiveDate;

    fn one_stop() -> DepartureSet {
        let t = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut set = DepartureSet::new();
        set.insert(
            "Dam",
            vec![Departure {
                line_public_number: "4".to_string(),
                destination: "Station RAI".to_string(),
                transport_type: TransportType::Tram,
                operator: "GVB".to_string(),
                target_departure: t,
                expected_departure: t,
                last_update: Some(t),
                timing_point_wheelchair_accessible: false,
                timing_point_visual_accessible: false,
                line_wheelchair_accessible: false,
            }],
        );
        set
    }

    const TICK: Duration = Duration::from_millis(10);

    #[tokio::test]
    async fn publishes_loaded_snapshot_after_first_fetch() {
        let (mut poller, mut rx) = Poller::new(MockProvider::serving(one_stop()), TICK);
        poller.start();

        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone();
        assert!(snapshot.loaded);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.departures.len(), 1);
    }

    #[tokio::test]
    async fn failure_latches_error_and_keeps_polling() {
        let (mut poller, mut rx) = Poller::new(
            MockProvider::scripted(vec![Err("down".to_string()), Ok(one_stop())]),
            TICK,
        );
        poller.start();

        rx.changed().await.unwrap();
        {
            let snapshot = rx.borrow_and_update();
            assert!(snapshot.error.as_deref().is_some_and(|e| e.contains("down")));
            assert!(!snapshot.loaded);
        }

        // The timer keeps running: the next tick recovers.
        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone();
        assert!(snapshot.loaded);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn failure_after_success_keeps_previous_data() {
        let (mut poller, mut rx) = Poller::new(
            MockProvider::scripted(vec![Ok(one_stop()), Err("blip".to_string())]),
            TICK,
        );
        poller.start();

        rx.changed().await.unwrap();
        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone();
        assert!(snapshot.loaded);
        assert!(snapshot.error.is_some());
        assert_eq!(snapshot.departures.len(), 1);
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let (mut poller, _rx) = Poller::new(MockProvider::serving(one_stop()), TICK);
        poller.start();
        assert!(poller.is_running());
        poller.start();
        assert!(poller.is_running());
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let (mut poller, _rx) = Poller::new(MockProvider::serving(one_stop()), TICK);
        poller.stop();
        assert!(!poller.is_running());

        poller.start();
        poller.stop();
        assert!(!poller.is_running());
        poller.stop();
        assert!(!poller.is_running());
    }

    #[tokio::test]
    async fn restart_after_stop_polls_again() {
        let (mut poller, mut rx) = Poller::new(MockProvider::serving(one_stop()), TICK);
        poller.start();
        rx.changed().await.unwrap();
        poller.stop();

        rx.mark_unchanged();
        poller.start();
        rx.changed().await.unwrap();
        assert!(rx.borrow().loaded);
    }
}
