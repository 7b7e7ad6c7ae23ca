//! Kitchen live queue feed
//!
//! A periodic background refresher that re-reads the active-order
//! queue (pending/preparing/ready) and publishes it on a watch
//! channel. Consumers hold a [`watch::Receiver`] and see the latest
//! snapshot; stopping the feed cancels the loop cooperatively with no
//! subscription state left behind.

use shared::models::Order;
use sqlx::SqlitePool;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::db::repository::order;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Handle to the running refresher
pub struct KitchenFeed {
    handle: JoinHandle<()>,
    shutdown: CancellationToken,
    rx: watch::Receiver<Vec<Order>>,
}

impl KitchenFeed {
    /// Spawn the refresh loop
    ///
    /// The channel starts with an empty queue; the first tick fires
    /// right away and publishes the first real snapshot. A failed read
    /// keeps the previous snapshot and logs the error.
    pub fn start(pool: SqlitePool, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(Vec::new());
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::debug!("Kitchen feed stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        match order::list_active(&pool).await {
                            Ok(orders) => {
                                // Receivers may all be gone; keep ticking
                                // so a late subscriber still gets data
                                let _ = tx.send(orders);
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "Kitchen feed refresh failed, keeping previous snapshot");
                            }
                        }
                    }
                }
            }
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "Kitchen feed started");
        Self {
            handle,
            shutdown,
            rx,
        }
    }

    /// Subscribe to queue snapshots
    pub fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.rx.clone()
    }

    /// Cancel the loop and wait for it to exit
    pub async fn stop(self) {
        self.shutdown.cancel();
        if let Err(e) = self.handle.await
            && !e.is_cancelled()
        {
            tracing::error!(error = ?e, "Kitchen feed task panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::{CartItem, MarmitaSize, OrderDraft, OrderType};

    async fn test_pool() -> (SqlitePool, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();
        (db.pool, dir)
    }

    fn draft(customer: &str) -> OrderDraft {
        OrderDraft {
            customer_name: customer.into(),
            is_company_order: false,
            order_type: OrderType::Balcao,
            delivery_address: None,
            items: vec![CartItem {
                size: MarmitaSize::M,
                protein: "Frango".into(),
                accompaniments: vec!["Arroz".into()],
                employee_name: None,
            }],
            salads: vec![],
            beverages: vec![],
            observations: None,
            attendant_code: "01".into(),
            attendant_name: "Ana".into(),
        }
    }

    #[tokio::test]
    async fn feed_publishes_active_orders() {
        let (pool, _dir) = test_pool().await;
        order::create(&pool, &draft("Maria"), 15.0).await.unwrap();

        let feed = KitchenFeed::start(pool.clone(), Duration::from_millis(20));
        let mut rx = feed.subscribe();

        let snapshot = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                rx.changed().await.unwrap();
                let orders = rx.borrow().clone();
                if !orders.is_empty() {
                    return orders;
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].customer_name, "Maria");
        feed.stop().await;
    }

    #[tokio::test]
    async fn stop_cancels_the_loop() {
        let (pool, _dir) = test_pool().await;
        let feed = KitchenFeed::start(pool, Duration::from_millis(20));
        tokio::time::timeout(Duration::from_secs(1), feed.stop())
            .await
            .unwrap();
    }
}
