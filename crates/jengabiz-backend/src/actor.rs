//! The remote backend actor, as seen by this client.

use futures::future::BoxFuture;

use crate::error::RemoteResult;
use crate::types::{ExchangeRate, UserProfile, Video, VideoCategory};

/// Request/response surface of the backend actor.
///
/// Identity and session are supplied by whoever constructs the actor.
pub trait BackendActor: Send + Sync {
    fn get_caller_user_profile(&self) -> BoxFuture<'_, RemoteResult<Option<UserProfile>>>;

    fn save_caller_user_profile(&self, profile: UserProfile) -> BoxFuture<'_, RemoteResult<()>>;

    fn get_all_video_categories(&self) -> BoxFuture<'_, RemoteResult<Vec<VideoCategory>>>;

    fn get_videos_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> BoxFuture<'a, RemoteResult<Option<Vec<Video>>>>;

    fn get_exchange_rates(&self) -> BoxFuture<'_, RemoteResult<Vec<ExchangeRate>>>;

    /// Nanosecond timestamp of the last rate update, if any.
    fn get_last_exchange_rates_update_timestamp(&self) -> BoxFuture<'_, RemoteResult<Option<i64>>>;

    fn fetch_market_data(&self) -> BoxFuture<'_, RemoteResult<String>>;

    fn send_ussd_request<'a>(
        &'a self,
        code: &'a str,
        service: &'a str,
    ) -> BoxFuture<'a, RemoteResult<String>>;
}
