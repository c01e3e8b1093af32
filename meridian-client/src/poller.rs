//! Cancellable order polling
//!
//! The dashboards refresh from the backend on a fixed interval. The poller
//! owns that loop: it fetches immediately, then on every tick, and pushes
//! each snapshot into a `watch` channel the view reads from. Cancelling the
//! token (view teardown, logout) stops the loop promptly. On a failed fetch
//! the last good snapshot is kept so the view never blanks out.

use std::time::Duration;

use async_trait::async_trait;
use meridian_core::{Order, OrderStatus};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{ClientResult, HttpClient};

/// Source of order snapshots
///
/// Implemented by [`HttpClient`]; a seam for tests and alternative
/// transports.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
    async fn fetch_orders(&self, status: Option<OrderStatus>) -> ClientResult<Vec<Order>>;
}

#[async_trait]
impl OrderSource for HttpClient {
    async fn fetch_orders(&self, status: Option<OrderStatus>) -> ClientResult<Vec<Order>> {
        self.list_orders(status).await
    }
}

/// Fixed-interval order poller bound to a view's lifetime
pub struct OrderPoller<S> {
    source: S,
    interval: Duration,
    status_filter: Option<OrderStatus>,
    shutdown: CancellationToken,
}

impl<S: OrderSource> OrderPoller<S> {
    pub fn new(source: S, interval: Duration, shutdown: CancellationToken) -> Self {
        Self {
            source,
            interval,
            status_filter: None,
            shutdown,
        }
    }

    /// Only poll orders with the given status
    pub fn with_status_filter(mut self, status: OrderStatus) -> Self {
        self.status_filter = Some(status);
        self
    }

    /// Spawn the polling loop, returning the snapshot receiver and the
    /// task handle
    pub fn spawn(self) -> (watch::Receiver<Vec<Order>>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(Vec::new());
        let handle = tokio::spawn(self.run(tx));
        (rx, handle)
    }

    /// Main loop: immediate first fetch, then one per interval tick
    pub async fn run(self, tx: watch::Sender<Vec<Order>>) {
        tracing::info!(interval_secs = self.interval.as_secs(), "order poller started");

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    match self.source.fetch_orders(self.status_filter).await {
                        Ok(orders) => {
                            // Receiver gone means the view is torn down
                            if tx.send(orders).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "order fetch failed; keeping last snapshot");
                        }
                    }
                }
            }
        }

        tracing::info!("order poller stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn order(id: i64) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "status": "pending",
            "items": []
        }))
        .unwrap()
    }

    /// Replays a scripted sequence of responses, then repeats the last
    /// behavior (empty Ok) and counts fetches
    struct ScriptedSource {
        responses: Mutex<VecDeque<ClientResult<Vec<Order>>>>,
        fetches: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<ClientResult<Vec<Order>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl OrderSource for ScriptedSource {
        async fn fetch_orders(&self, _status: Option<OrderStatus>) -> ClientResult<Vec<Order>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_fetch_is_immediate() {
        let shutdown = CancellationToken::new();
        let source = ScriptedSource::new(vec![Ok(vec![order(1)])]);
        let poller = OrderPoller::new(source, Duration::from_secs(15), shutdown.clone());
        let (mut rx, handle) = poller.spawn();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);
        assert_eq!(rx.borrow()[0].id, 1);

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_error_keeps_last_snapshot() {
        let shutdown = CancellationToken::new();
        let source = ScriptedSource::new(vec![
            Ok(vec![order(1), order(2)]),
            Err(ClientError::Backend("boom".to_string())),
            Ok(vec![order(3)]),
        ]);
        let poller = OrderPoller::new(source, Duration::from_secs(15), shutdown.clone());
        let (mut rx, handle) = poller.spawn();

        // First snapshot
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().len(), 2);

        // Second tick fails; the channel keeps the last good value until
        // the third tick succeeds
        rx.changed().await.unwrap();
        let ids: Vec<i64> = rx.borrow().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3]);

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_stops_loop() {
        let shutdown = CancellationToken::new();
        let source = ScriptedSource::new(vec![]);
        let poller = OrderPoller::new(source, Duration::from_secs(15), shutdown.clone());
        let (mut rx, handle) = poller.spawn();

        rx.changed().await.unwrap();
        shutdown.cancel();
        // The loop exits without waiting for the next tick
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_filter_passed_through() {
        struct AssertingSource;

        #[async_trait]
        impl OrderSource for AssertingSource {
            async fn fetch_orders(
                &self,
                status: Option<OrderStatus>,
            ) -> ClientResult<Vec<Order>> {
                assert_eq!(status, Some(OrderStatus::Pending));
                Ok(Vec::new())
            }
        }

        let shutdown = CancellationToken::new();
        let poller = OrderPoller::new(AssertingSource, Duration::from_secs(15), shutdown.clone())
            .with_status_filter(OrderStatus::Pending);
        let (mut rx, handle) = poller.spawn();

        rx.changed().await.unwrap();
        shutdown.cancel();
        handle.await.unwrap();
    }
}
