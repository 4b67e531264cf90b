//! Scriptable in-memory actor for tests.

use std::collections::{HashMap, VecDeque};

use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::Mutex;

use crate::actor::BackendActor;
use crate::error::{RemoteError, RemoteResult};
use crate::types::{ExchangeRate, UserProfile, Video, VideoCategory};

#[derive(Default)]
pub struct MockActor {
    pub profile: Mutex<Option<UserProfile>>,
    pub rates: Mutex<Vec<ExchangeRate>>,
    pub categories: Mutex<Vec<VideoCategory>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failures: Mutex<VecDeque<RemoteError>>,
}

impl MockActor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: &[(&str, f64)]) -> Self {
        let actor = Self::new();
        *actor.rates.lock() = rates
            .iter()
            .map(|(pair, rate)| ExchangeRate {
                rate: *rate,
                currency_pair: pair.to_string(),
            })
            .collect();
        actor
    }

    /// The next calls fail with these errors, in order.
    pub fn fail_next(&self, errors: impl IntoIterator<Item = RemoteError>) {
        self.failures.lock().extend(errors);
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().get(method).copied().unwrap_or(0)
    }

    fn record(&self, method: &'static str) -> RemoteResult<()> {
        *self.calls.lock().entry(method).or_insert(0) += 1;
        match self.failures.lock().pop_front() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl BackendActor for MockActor {
    fn get_caller_user_profile(&self) -> BoxFuture<'_, RemoteResult<Option<UserProfile>>> {
        async move {
            self.record("get_caller_user_profile")?;
            Ok(self.profile.lock().clone())
        }
        .boxed()
    }

    fn save_caller_user_profile(&self, profile: UserProfile) -> BoxFuture<'_, RemoteResult<()>> {
        async move {
            self.record("save_caller_user_profile")?;
            *self.profile.lock() = Some(profile);
            Ok(())
        }
        .boxed()
    }

    fn get_all_video_categories(&self) -> BoxFuture<'_, RemoteResult<Vec<VideoCategory>>> {
        async move {
            self.record("get_all_video_categories")?;
            Ok(self.categories.lock().clone())
        }
        .boxed()
    }

    fn get_videos_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> BoxFuture<'a, RemoteResult<Option<Vec<Video>>>> {
        async move {
            self.record("get_videos_by_category")?;
            Ok(self
                .categories
                .lock()
                .iter()
                .find(|c| c.name == category)
                .map(|c| c.videos.clone()))
        }
        .boxed()
    }

    fn get_exchange_rates(&self) -> BoxFuture<'_, RemoteResult<Vec<ExchangeRate>>> {
        async move {
            self.record("get_exchange_rates")?;
            Ok(self.rates.lock().clone())
        }
        .boxed()
    }

    fn get_last_exchange_rates_update_timestamp(&self) -> BoxFuture<'_, RemoteResult<Option<i64>>> {
        async move {
            self.record("get_last_exchange_rates_update_timestamp")?;
            Ok(Some(1_700_000_000_000_000_000))
        }
        .boxed()
    }

    fn fetch_market_data(&self) -> BoxFuture<'_, RemoteResult<String>> {
        async move {
            self.record("fetch_market_data")?;
            Ok("{\"KES/USD\":0.0077}".to_string())
        }
        .boxed()
    }

    fn send_ussd_request<'a>(
        &'a self,
        code: &'a str,
        service: &'a str,
    ) -> BoxFuture<'a, RemoteResult<String>> {
        async move {
            self.record("send_ussd_request")?;
            Ok(format!("USSD {code} relayed to {service}"))
        }
        .boxed()
    }
}
