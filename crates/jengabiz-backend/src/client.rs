//! Query client over the backend actor: cached reads, retried calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::actor::BackendActor;
use crate::cache::QueryCache;
use crate::error::{RemoteError, RemoteResult};
use crate::poller::RatesSnapshot;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::types::{ExchangeRate, UserProfile, UssdAvailability, Video, VideoCategory};

/// Stale time for exchange rates and the USSD availability probe.
pub const RATES_STALE_TIME: Duration = Duration::from_secs(5 * 60);
/// Stale time for the video catalog.
pub const CATALOG_STALE_TIME: Duration = Duration::from_secs(5 * 60);
/// Profile entries live until invalidated by a save.
pub const PROFILE_STALE_TIME: Duration = Duration::from_secs(24 * 60 * 60);

const SINGLETON_KEY: &str = "_";
const CACHE_CAPACITY: usize = 64;

/// Client for the backend actor.
///
/// Without an actor every call fails with [`RemoteError::ActorUnavailable`].
pub struct BackendClient {
    actor: Option<Arc<dyn BackendActor>>,
    pub(crate) retry: RetryPolicy,
    profile: QueryCache<Option<UserProfile>>,
    categories: QueryCache<Vec<VideoCategory>>,
    videos: QueryCache<Option<Vec<Video>>>,
    rates: QueryCache<Vec<ExchangeRate>>,
    rates_timestamp: QueryCache<Option<i64>>,
    pub(crate) ussd_availability: QueryCache<UssdAvailability>,
}

impl BackendClient {
    pub fn new(actor: Option<Arc<dyn BackendActor>>) -> Self {
        Self {
            actor,
            retry: RetryPolicy::default(),
            profile: QueryCache::new(1, PROFILE_STALE_TIME),
            categories: QueryCache::new(1, CATALOG_STALE_TIME),
            videos: QueryCache::new(CACHE_CAPACITY, CATALOG_STALE_TIME),
            rates: QueryCache::new(1, RATES_STALE_TIME),
            rates_timestamp: QueryCache::new(1, RATES_STALE_TIME),
            ussd_availability: QueryCache::new(1, RATES_STALE_TIME),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.actor.is_some()
    }

    pub(crate) fn actor(&self) -> RemoteResult<&Arc<dyn BackendActor>> {
        self.actor.as_ref().ok_or(RemoteError::ActorUnavailable)
    }

    /// Serve `key` from `cache`, otherwise fetch with `policy` and store.
    async fn cached<V, F, Fut>(
        &self,
        cache: &QueryCache<V>,
        key: &str,
        policy: &RetryPolicy,
        fetch: F,
    ) -> RemoteResult<V>
    where
        V: Clone,
        F: FnMut() -> Fut,
        Fut: Future<Output = RemoteResult<V>>,
    {
        if let Some(hit) = cache.get(key) {
            debug!("Cache hit: {}", key);
            return Ok(hit);
        }
        let value = retry_with_backoff(policy, fetch).await?;
        cache.put(key, value.clone());
        Ok(value)
    }

    // ---------------------------------------------------------------
    // Profile
    // ---------------------------------------------------------------

    /// The caller's profile. Not retried: a failure here is surfaced at once.
    pub async fn caller_profile(&self) -> RemoteResult<Option<UserProfile>> {
        let actor = self.actor()?;
        self.cached(&self.profile, SINGLETON_KEY, &RetryPolicy::none(), move || {
            actor.get_caller_user_profile()
        })
        .await
    }

    /// Save the caller's profile and drop the cached copy.
    pub async fn save_caller_profile(&self, profile: UserProfile) -> RemoteResult<()> {
        let actor = self.actor()?;
        actor.save_caller_user_profile(profile).await?;
        self.profile.invalidate(SINGLETON_KEY);
        info!("Saved caller profile");
        Ok(())
    }

    // ---------------------------------------------------------------
    // Video catalog
    // ---------------------------------------------------------------

    pub async fn video_categories(&self) -> RemoteResult<Vec<VideoCategory>> {
        let actor = self.actor()?;
        self.cached(&self.categories, SINGLETON_KEY, &self.retry, move || {
            actor.get_all_video_categories()
        })
        .await
    }

    /// Videos of one category. An empty name makes no call.
    pub async fn videos_by_category(&self, category: &str) -> RemoteResult<Option<Vec<Video>>> {
        if category.is_empty() {
            return Ok(None);
        }
        let actor = self.actor()?;
        self.cached(&self.videos, category, &self.retry, move || {
            actor.get_videos_by_category(category)
        })
        .await
    }

    // ---------------------------------------------------------------
    // Exchange rates & market data
    // ---------------------------------------------------------------

    pub async fn exchange_rates(&self) -> RemoteResult<Vec<ExchangeRate>> {
        let actor = self.actor()?;
        self.cached(&self.rates, SINGLETON_KEY, &self.retry, move || {
            actor.get_exchange_rates()
        })
        .await
    }

    pub async fn last_exchange_rates_update(&self) -> RemoteResult<Option<i64>> {
        let actor = self.actor()?;
        self.cached(&self.rates_timestamp, SINGLETON_KEY, &self.retry, move || {
            actor.get_last_exchange_rates_update_timestamp()
        })
        .await
    }

    /// Bypass the stale window and refetch rates and their timestamp.
    pub async fn refresh_exchange_rates(&self) -> RemoteResult<RatesSnapshot> {
        self.rates.invalidate(SINGLETON_KEY);
        self.rates_timestamp.invalidate(SINGLETON_KEY);

        let rates = self.exchange_rates().await?;
        let last_update = self.last_exchange_rates_update().await?;
        debug!("Refreshed {} exchange rates", rates.len());

        Ok(RatesSnapshot {
            rates,
            last_update,
            fetched_at: chrono::Utc::now(),
        })
    }

    /// Ask the backend to pull fresh market data. Never cached.
    pub async fn fetch_market_data(&self) -> RemoteResult<String> {
        let actor = self.actor()?;
        actor.fetch_market_data().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockActor;

    fn client_with(actor: &Arc<MockActor>) -> BackendClient {
        BackendClient::new(Some(actor.clone() as Arc<dyn BackendActor>))
    }

    #[tokio::test]
    async fn test_without_actor() {
        let client = BackendClient::new(None);
        assert!(!client.is_connected());
        assert_eq!(client.exchange_rates().await, Err(RemoteError::ActorUnavailable));
        assert_eq!(client.caller_profile().await, Err(RemoteError::ActorUnavailable));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rates_cached_within_stale_time() {
        let actor = Arc::new(MockActor::with_rates(&[("USD/KES", 129.5)]));
        let client = client_with(&actor);

        let first = client.exchange_rates().await.unwrap();
        let second = client.exchange_rates().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].currency_pair, "USD/KES");
        assert_eq!(actor.calls("get_exchange_rates"), 1);

        tokio::time::advance(RATES_STALE_TIME).await;
        client.exchange_rates().await.unwrap();
        assert_eq!(actor.calls("get_exchange_rates"), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failure_retried() {
        let actor = Arc::new(MockActor::with_rates(&[("USD/KES", 129.5)]));
        actor.fail_next([RemoteError::Service("timeout".into())]);
        let client = client_with(&actor);

        let rates = client.exchange_rates().await.unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(actor.calls("get_exchange_rates"), 2);
    }

    #[tokio::test]
    async fn test_profile_not_retried() {
        let actor = Arc::new(MockActor::new());
        actor.fail_next([RemoteError::Service("timeout".into())]);
        let client = client_with(&actor);

        assert!(client.caller_profile().await.is_err());
        assert_eq!(actor.calls("get_caller_user_profile"), 1);
        // Failures are not cached
        assert_eq!(client.caller_profile().await, Ok(None));
    }

    #[tokio::test]
    async fn test_save_profile_invalidates() {
        let actor = Arc::new(MockActor::new());
        let client = client_with(&actor);

        assert_eq!(client.caller_profile().await, Ok(None));
        client
            .save_caller_profile(UserProfile { name: "Wanjiru".into() })
            .await
            .unwrap();
        let profile = client.caller_profile().await.unwrap();
        assert_eq!(profile.map(|p| p.name), Some("Wanjiru".to_string()));
        assert_eq!(actor.calls("get_caller_user_profile"), 2);
    }

    #[tokio::test]
    async fn test_videos_by_empty_category_skips_call() {
        let actor = Arc::new(MockActor::new());
        let client = client_with(&actor);

        assert_eq!(client.videos_by_category("").await, Ok(None));
        assert_eq!(actor.calls("get_videos_by_category"), 0);

        assert_eq!(client.videos_by_category("Leadership").await, Ok(None));
        assert_eq!(actor.calls("get_videos_by_category"), 1);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let actor = Arc::new(MockActor::with_rates(&[("EUR/KES", 140.1)]));
        let client = client_with(&actor);

        client.exchange_rates().await.unwrap();
        let snapshot = client.refresh_exchange_rates().await.unwrap();
        assert_eq!(actor.calls("get_exchange_rates"), 2);
        assert_eq!(snapshot.rates[0].rate, 140.1);
        assert!(snapshot.last_update.is_some());
    }

    #[tokio::test]
    async fn test_market_data_not_cached() {
        let actor = Arc::new(MockActor::new());
        let client = client_with(&actor);
        client.fetch_market_data().await.unwrap();
        client.fetch_market_data().await.unwrap();
        assert_eq!(actor.calls("fetch_market_data"), 2);
    }
}
