//! JengaBiz Backend: client side of the remote backend actor.
//!
//! The actor itself is opaque; this crate layers the caller-side behavior
//! on top of it: authorization-vs-transient error classification, retry
//! with capped exponential backoff, stale-time caching, fixed-interval
//! exchange-rate polling, and the USSD relay. It also carries the static
//! curated video catalog.
//!
//! The server binary does not construct an actor yet, so it only uses the
//! curated catalog. [`BackendClient`], [`ExchangeRatePoller`] and the USSD
//! relay are reached from this crate's tests until a transport exists.

pub mod actor;
pub mod cache;
pub mod client;
pub mod error;
pub mod poller;
pub mod retry;
pub mod types;
pub mod ussd;
pub mod videos;

#[cfg(test)]
mod testing;

pub use actor::BackendActor;
pub use cache::QueryCache;
pub use client::BackendClient;
pub use error::{RemoteError, RemoteResult};
pub use poller::{ExchangeRatePoller, RatesSnapshot};
pub use retry::{retry_with_backoff, RetryPolicy};
pub use types::*;
pub use videos::{curated_categories, curated_videos, CuratedVideo};
