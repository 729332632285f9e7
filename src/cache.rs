//! Expiring single-flight cache for fetch results.
//!
//! Memoizes expensive loads (registry metadata, rendered documentation)
//! keyed by URL. Concurrent callers for the same key share one in-flight
//! load; entries expire a fixed interval after their last access.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::OnceCell;

/// How long an entry survives after its last access.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// An async memoizing cache with time-based expiry.
///
/// Expiry is lazy: an entry older than the TTL is discarded on the next
/// access, there is no background sweeper. A failed load leaves the entry
/// empty, so a later access re-runs the loader. The key space is URLs
/// derived from providers referenced in a workspace, which stays small, so
/// no size bound is enforced.
pub struct ExpiringCache<V: Clone> {
    entries: DashMap<String, Entry<V>>,
    ttl: Duration,
}

struct Entry<V> {
    slot: Arc<OnceCell<V>>,
    touched: Instant,
}

impl<V> Entry<V> {
    fn fresh() -> Self {
        Self {
            slot: Arc::new(OnceCell::new()),
            touched: Instant::now(),
        }
    }
}

impl<V: Clone> ExpiringCache<V> {
    /// Create a cache whose entries expire `ttl` after last access.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Create a cache with the default 5-minute TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Get the cached value for `key`, running `loader` on a miss.
    ///
    /// At most one loader runs per key at any time: concurrent callers
    /// await the outstanding load and share its result. Accessing an entry
    /// refreshes its expiry clock.
    pub async fn get_or_fetch<E, F, Fut>(&self, key: &str, loader: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = {
            let mut entry = self
                .entries
                .entry(key.to_string())
                .or_insert_with(Entry::fresh);
            if entry.touched.elapsed() >= self.ttl {
                *entry = Entry::fresh();
            }
            entry.touched = Instant::now();
            Arc::clone(&entry.slot)
        };
        // The map guard is dropped before awaiting so other keys are never
        // blocked behind this load.
        slot.get_or_try_init(loader).await.map(|value| value.clone())
    }

    /// Number of entries, including expired ones not yet discarded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<V: Clone> Default for ExpiringCache<V> {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}
