//! Fixed-interval exchange-rate refresh.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::client::BackendClient;
use crate::types::ExchangeRate;

/// Latest successfully fetched rates.
#[derive(Debug, Clone, Serialize)]
pub struct RatesSnapshot {
    pub rates: Vec<ExchangeRate>,
    /// Backend-side update timestamp, if the backend has one.
    pub last_update: Option<i64>,
    pub fetched_at: DateTime<Utc>,
}

/// Background task refreshing exchange rates on a fixed interval.
///
/// The first refresh happens immediately. A failed refresh keeps the
/// previous snapshot. The task stops on [`ExchangeRatePoller::stop`] or drop.
pub struct ExchangeRatePoller {
    latest: Arc<RwLock<Option<RatesSnapshot>>>,
    handle: JoinHandle<()>,
}

impl ExchangeRatePoller {
    /// Start polling. Must be called from within a tokio runtime.
    pub fn spawn(client: Arc<BackendClient>, every: Duration) -> Self {
        let latest = Arc::new(RwLock::new(None));
        let slot = latest.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!("Exchange-rate poller started (every {}s)", every.as_secs());

            loop {
                ticker.tick().await;
                match client.refresh_exchange_rates().await {
                    Ok(snapshot) => *slot.write() = Some(snapshot),
                    Err(e) => warn!("Exchange-rate refresh failed: {}", e),
                }
            }
        });

        Self { latest, handle }
    }

    pub fn latest(&self) -> Option<RatesSnapshot> {
        self.latest.read().clone()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ExchangeRatePoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
