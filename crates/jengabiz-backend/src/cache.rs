//! Keyed stale-time cache for remote query results.
//!
//! Entries older than the TTL are treated as missing and refetched.
//! Oldest entries are evicted once `max_size` is reached.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// Cached value with timestamp.
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Thread-safe TTL cache.
pub struct QueryCache<V> {
    inner: Mutex<CacheInner<V>>,
}

struct CacheInner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    order: Vec<String>,
    max_size: usize,
    ttl: Duration,
}

impl<V: Clone> QueryCache<V> {
    /// Create a new cache with the given capacity and TTL.
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: Vec::new(),
                max_size: max_size.max(1),
                ttl,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.inner.lock().ttl
    }

    /// Get a fresh value. Returns None on miss or stale entry.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock();
        let ttl = inner.ttl;

        let stale = inner
            .entries
            .get(key)
            .map(|e| e.inserted_at.elapsed() >= ttl)?;

        if stale {
            inner.entries.remove(key);
            inner.order.retain(|k| k != key);
            return None;
        }
        inner.entries.get(key).map(|e| e.value.clone())
    }

    /// Insert or replace a value.
    pub fn put(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut inner = self.inner.lock();

        if inner.entries.contains_key(&key) {
            inner.order.retain(|k| k != &key);
        } else {
            while inner.entries.len() >= inner.max_size && !inner.order.is_empty() {
                let oldest = inner.order.remove(0);
                inner.entries.remove(&oldest);
            }
        }

        inner.order.push(key.clone());
        inner.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop one key so the next read refetches.
    pub fn invalidate(&self, key: &str) {
        let mut inner = self.inner.lock();
        inner.entries.remove(key);
        inner.order.retain(|k| k != key);
    }

    /// Number of entries in the cache (fresh or not).
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_and_miss() {
        let cache = QueryCache::new(10, Duration::from_secs(300));
        assert!(cache.get("rates").is_none());

        cache.put("rates", vec![1.5, 2.5]);
        assert_eq!(cache.get("rates"), Some(vec![1.5, 2.5]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_eviction() {
        let cache = QueryCache::new(2, Duration::from_secs(300));
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_replace_does_not_evict() {
        let cache = QueryCache::new(2, Duration::from_secs(300));
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("a", 10);
        assert_eq!(cache.get("a"), Some(10));
        assert_eq!(cache.get("b"), Some(2));
    }

    #[test]
    fn test_invalidate() {
        let cache = QueryCache::new(4, Duration::from_secs(300));
        cache.put("profile", "Amina".to_string());
        cache.invalidate("profile");
        assert!(cache.get("profile").is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_expires() {
        let cache = QueryCache::new(10, Duration::from_secs(300));
        cache.put("rates", 1);

        tokio::time::advance(Duration::from_secs(299)).await;
        assert_eq!(cache.get("rates"), Some(1));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get("rates").is_none());
        assert!(cache.is_empty());
    }
}
